/// Extrapolation formula used by Brent's method.
///
/// Given the current, previous and contrapoint function values and the
/// divided differences `dpre = (fpre - fcur) / (xpre - xcur)` and
/// `dblk = (fblk - fcur) / (xblk - xcur)`, returns the trial step from `xcur`.
///
/// Degenerate inputs (such as `fblk == fpre`) divide by zero. The resulting
/// infinite or `NaN` step fails the acceptance test and the solver bisects.
pub trait Extrapolation {
    /// Name of the solver using this formula.
    const NAME: &'static str;

    /// Returns the trial step.
    fn extrapolate(fcur: f64, fpre: f64, fblk: f64, dpre: f64, dblk: f64) -> f64;
}

/// Inverse quadratic extrapolation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InverseQuadratic;

impl Extrapolation for InverseQuadratic {
    const NAME: &'static str = "Brentq";

    fn extrapolate(fcur: f64, fpre: f64, fblk: f64, dpre: f64, dblk: f64) -> f64 {
        -fcur * (fblk * dblk - fpre * dpre) / (dblk * dpre * (fblk - fpre))
    }
}

/// Hyperbolic extrapolation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hyperbolic;

impl Extrapolation for Hyperbolic {
    const NAME: &'static str = "Brenth";

    fn extrapolate(fcur: f64, fpre: f64, fblk: f64, dpre: f64, dblk: f64) -> f64 {
        -fcur * (fblk - fpre) / (fblk * dpre - fpre * dblk)
    }
}
