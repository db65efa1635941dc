use rootbrack_core::Point;

use super::Extrapolation;

/// Iteration state of Brent's method.
///
/// `cur` is the best estimate, `pre` the previous estimate and `blk` the
/// contrapoint, with `f(cur)` and `f(blk)` of opposite sign after
/// [`align`](State::align). `spre` and `scur` are the last two step sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct State {
    xpre: f64,
    xcur: f64,
    xblk: f64,
    fpre: f64,
    fcur: f64,
    fblk: f64,
    spre: f64,
    scur: f64,
}

impl State {
    /// Starts from an evaluated bracket; the contrapoint is set by `align`.
    pub(super) fn new(lower: Point, upper: Point) -> Self {
        Self {
            xpre: lower.x,
            xcur: upper.x,
            xblk: 0.0,
            fpre: lower.fx,
            fcur: upper.fx,
            fblk: 0.0,
            spre: 0.0,
            scur: 0.0,
        }
    }

    /// Returns the current best estimate.
    pub(super) fn current(&self) -> Point {
        Point::new(self.xcur, self.fcur)
    }

    /// Returns the previous estimate.
    pub(super) fn previous(&self) -> Point {
        Point::new(self.xpre, self.fpre)
    }

    /// Restores the contrapoint and makes `cur` the point with smallest `|f|`.
    pub(super) fn align(&mut self) {
        if self.fpre * self.fcur < 0.0 {
            self.xblk = self.xpre;
            self.fblk = self.fpre;
            self.spre = self.xcur - self.xpre;
            self.scur = self.spre;
        }

        if self.fblk.abs() < self.fcur.abs() {
            self.xpre = self.xcur;
            self.xcur = self.xblk;
            self.xblk = self.xpre;
            self.fpre = self.fcur;
            self.fcur = self.fblk;
            self.fblk = self.fpre;
        }
    }

    /// Returns the step from `cur` to the middle of the bracket.
    pub(super) fn bisection_step(&self) -> f64 {
        (self.xblk - self.xcur) / 2.0
    }

    /// Chooses between a short interpolated step and bisection.
    pub(super) fn select_step<S: Extrapolation>(&mut self, sbis: f64, xtol: f64) {
        if self.spre.abs() > xtol && self.fcur.abs() < self.fpre.abs() {
            #[allow(clippy::float_cmp)]
            let stry = if self.xpre == self.xblk {
                -self.fcur * (self.xcur - self.xpre) / (self.fcur - self.fpre)
            } else {
                let dpre = (self.fpre - self.fcur) / (self.xpre - self.xcur);
                let dblk = (self.fblk - self.fcur) / (self.xblk - self.xcur);
                S::extrapolate(self.fcur, self.fpre, self.fblk, dpre, dblk)
            };

            if 2.0 * stry.abs() < self.spre.abs().min(3.0 * sbis.abs() - xtol) {
                self.spre = self.scur;
                self.scur = stry;
                return;
            }
        }

        self.spre = sbis;
        self.scur = sbis;
    }

    /// Moves `cur` by the chosen step, at least `xtol` toward the contrapoint.
    ///
    /// Returns the new `x` to evaluate.
    pub(super) fn advance(&mut self, sbis: f64, xtol: f64) -> f64 {
        self.xpre = self.xcur;
        self.fpre = self.fcur;
        if self.scur.abs() > xtol {
            self.xcur += self.scur;
        } else if sbis > 0.0 {
            self.xcur += xtol;
        } else {
            self.xcur -= xtol;
        }
        self.xcur
    }

    /// Stores `f` at the new `cur`.
    pub(super) fn evaluated(&mut self, fcur: f64) {
        self.fcur = fcur;
    }
}
