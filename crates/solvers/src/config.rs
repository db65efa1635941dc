use rootbrack_core::{MACHINE_EPSILON, nearly_equal};
use thiserror::Error;

/// Configuration shared by every bracketing solver.
///
/// A `Config` is validated once on construction and cannot change afterwards,
/// so a solver holding one may be reused across solves and threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    xtol: f64,
    max_iter: usize,
    raise_on_fail: bool,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error(
        "xtol can't be smaller than machine epsilon (xtol={xtol:e}, EPS={eps:e})",
        eps = MACHINE_EPSILON
    )]
    XTol { xtol: f64 },

    #[error(
        "epsilon can't be smaller than machine epsilon (epsilon={epsilon:e}, EPS={eps:e})",
        eps = MACHINE_EPSILON
    )]
    Epsilon { epsilon: f64 },

    #[error("max_iter must be a non-negative integer, not {max_iter}")]
    MaxIter { max_iter: i64 },
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-6, MACHINE_EPSILON, 500, true).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `xtol` or `epsilon` is below [`MACHINE_EPSILON`]
    /// or is `NaN`.
    pub fn new(
        epsilon: f64,
        xtol: f64,
        max_iter: usize,
        raise_on_fail: bool,
    ) -> Result<Self, ConfigError> {
        if xtol.is_nan() || xtol < MACHINE_EPSILON {
            return Err(ConfigError::XTol { xtol });
        }
        if epsilon.is_nan() || epsilon < MACHINE_EPSILON {
            return Err(ConfigError::Epsilon { epsilon });
        }

        Ok(Self {
            epsilon,
            xtol,
            max_iter,
            raise_on_fail,
        })
    }

    /// Returns the tolerance under which a function value counts as a root.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the smallest meaningful bracket width.
    #[must_use]
    pub fn xtol(&self) -> f64 {
        self.xtol
    }

    /// Returns the iteration cap.
    #[must_use]
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Returns true if a failed solve is surfaced as an error.
    #[must_use]
    pub fn raise_on_fail(&self) -> bool {
        self.raise_on_fail
    }

    /// Returns true if `fx` is close enough to zero to be a root.
    #[must_use]
    pub fn is_root(&self, fx: f64) -> bool {
        nearly_equal(0.0, fx, self.epsilon)
    }

    /// Returns true if the bracket `[xa, xb]` is narrower than `xtol`.
    #[must_use]
    pub fn is_small_bracket(&self, xa: f64, xb: f64) -> bool {
        nearly_equal(xa, xb, self.xtol)
    }
}

/// Unvalidated solver options, as read from user input.
///
/// Missing fields take the [`Config::default`] values. `max_iter` is signed so
/// that a negative count read from a file is reported as a [`ConfigError`]
/// rather than failing to parse.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    pub epsilon: f64,
    pub xtol: f64,
    pub max_iter: i64,
    pub raise_on_fail: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            xtol: MACHINE_EPSILON,
            max_iter: 500,
            raise_on_fail: true,
        }
    }
}

impl TryFrom<Options> for Config {
    type Error = ConfigError;

    fn try_from(options: Options) -> Result<Self, Self::Error> {
        let max_iter = usize::try_from(options.max_iter).map_err(|_| ConfigError::MaxIter {
            max_iter: options.max_iter,
        })?;
        Self::new(
            options.epsilon,
            options.xtol,
            max_iter,
            options.raise_on_fail,
        )
    }
}
