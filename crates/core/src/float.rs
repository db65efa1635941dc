/// Difference between 1.0 and the next representable `f64`.
///
/// Neither tolerance of a solver may be configured below this value.
pub const MACHINE_EPSILON: f64 = f64::EPSILON;

/// Returns true if `a` and `b` are equal within `epsilon`.
///
/// Exactly equal values (including same-signed infinities and `0.0 == -0.0`)
/// always compare equal. Otherwise the difference is compared absolutely when
/// the larger magnitude is at least one or the difference does not exceed it,
/// and relatively to that magnitude in the remaining case.
///
/// Any comparison involving `NaN` is false.
///
/// Differences that land right on `epsilon` are decided by how both values
/// round to binary: `nearly_equal(1.0, 1.0 + 1e-7, 1e-7)` is false while
/// `nearly_equal(-1.0, -1.0 + 1e-7, 1e-7)` is true.
#[must_use]
pub fn nearly_equal(a: f64, b: f64, epsilon: f64) -> bool {
    #[allow(clippy::float_cmp)]
    if a == b {
        return true;
    }

    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs()).max(1.0);
    if scale >= diff || scale > 1.0 {
        diff <= epsilon
    } else {
        diff < epsilon * scale
    }
}
