/// A point with its evaluated function value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The function value at x.
    pub fx: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, fx: f64) -> Self {
        Self { x, fx }
    }

    /// Returns the point with the smaller `|f(x)|`, preferring `self` on ties.
    #[must_use]
    pub fn closer_to_root(self, other: Self) -> Self {
        if other.fx.abs() < self.fx.abs() {
            other
        } else {
            self
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, fx): (f64, f64)) -> Self {
        Self::new(x, fx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closer_to_root_picks_smaller_magnitude() {
        let a = Point::new(1.0, -0.5);
        let b = Point::new(2.0, 0.25);
        assert_eq!(a.closer_to_root(b), b);
        assert_eq!(b.closer_to_root(a), b);
    }

    #[test]
    fn closer_to_root_prefers_self_on_tie() {
        let a = Point::new(-1.0, -1.0);
        let b = Point::new(1.0, 1.0);
        assert_eq!(a.closer_to_root(b), a);
    }
}
