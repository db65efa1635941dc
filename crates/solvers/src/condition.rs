use std::fmt;

/// Why a solve attempt stopped.
///
/// Each condition maps to one fixed message and one `converged` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// The bracket became narrower than `xtol` before a root was found.
    SmallBracket,

    /// The lower endpoint is already a root.
    LowerBracketIsRoot,

    /// The upper endpoint is already a root.
    UpperBracketIsRoot,

    /// `f` has the same sign at both endpoints.
    NotBracketed,

    /// A function value within `epsilon` of zero was found.
    Converged,

    /// The iteration cap was reached.
    MaxIterationsExceeded,

    /// Ridder iterates stopped moving before the bracket closed.
    StagnantIteration,
}

impl Condition {
    /// Returns the short key identifying this condition.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::SmallBracket => "small bracket",
            Self::LowerBracketIsRoot => "lower bracket",
            Self::UpperBracketIsRoot => "upper bracket",
            Self::NotBracketed => "no bracket",
            Self::Converged => "convergence",
            Self::MaxIterationsExceeded => "iterations",
            Self::StagnantIteration => "stagnant",
        }
    }

    /// Returns the fixed human-readable message.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::SmallBracket => "Bracket is smaller than tolerance.",
            Self::LowerBracketIsRoot => "Root is equal to the lower bracket",
            Self::UpperBracketIsRoot => "Root is equal to the upper bracket",
            Self::NotBracketed => "Root is not bracketed.",
            Self::Converged => "Solution converged.",
            Self::MaxIterationsExceeded => "Exceeded max iterations.",
            Self::StagnantIteration => "Precision not achieved. Iteration stagnant.",
        }
    }

    /// Returns true if the condition counts as a found root.
    #[must_use]
    pub fn is_converged(self) -> bool {
        matches!(
            self,
            Self::Converged | Self::LowerBracketIsRoot | Self::UpperBracketIsRoot
        )
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
