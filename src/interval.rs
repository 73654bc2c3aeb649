/*

    Responsible for creating a struct that represents
    closed ranges [a, b] and functionality to check if
    x is in range, and to grow a range until it covers
    another range.

    One interval per axis is the building block of the
    axis aligned bounding boxes in bbox.rs.

    @author: bartu
    @date: 22 Nov, 2025

*/

use crate::numeric::{Float};

#[derive(Debug, Clone, Copy)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Interval {

    pub fn new(min: Float, max: Float) -> Self {
        Self {
            min,
            max,
        }
    }

    pub fn size(&self) -> Float {
        self.max - self.min
    }

    pub fn midpoint(&self) -> Float {
        (self.min + self.max) / 2.0
    }

    /// Closed on both ends, i.e. x == min or x == max is inside
    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }

    /// Grow this interval until it covers the other one too.
    /// Directional fold, min against min and max against max,
    /// so inverted (max < min) operands pass through the same
    /// way a raw per-corner min/max fold would treat them.
    pub fn enclose(&mut self, other: &Interval) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

}


#[cfg(test)]
mod tests {
    use super::*; // access to the outer scope

    #[test]
    fn test_contains_is_closed() {
        let range = Interval::new(-1.0, 2.5);
        assert!(range.contains(-1.0));
        assert!(range.contains(2.5));
        assert!(range.contains(0.0));
        assert!(!range.contains(2.5 + 1e-12));
        assert!(!range.contains(-1.0 - 1e-12));
    }

    #[test]
    fn test_enclose_grows_both_ends() {
        let mut range = Interval::new(0.0, 1.0);
        range.enclose(&Interval::new(-5.0, 0.5));
        assert_eq!(range.min, -5.0);
        assert_eq!(range.max, 1.0);

        range.enclose(&Interval::new(2.0, 3.0));
        assert_eq!(range.min, -5.0);
        assert_eq!(range.max, 3.0);

        range.enclose(&Interval::new(-4.0, 2.0));
        assert_eq!(range.min, -5.0);
        assert_eq!(range.max, 3.0); // already covered, should not shrink
    }

    #[test]
    fn test_enclose_inverted_operand() {
        // min folds against min and max against max even when
        // the operand is inverted
        let mut range = Interval::new(0.0, 2.0);
        range.enclose(&Interval::new(6.0, 4.0));
        assert_eq!(range.min, 0.0);
        assert_eq!(range.max, 4.0);
    }

    #[test]
    fn test_degenerate_interval() {
        // A single point is a valid (zero sized) interval
        let point = Interval::new(4.0, 4.0);
        assert_eq!(point.size(), 0.0);
        assert_eq!(point.midpoint(), 4.0);
        assert!(point.contains(4.0));
    }
}
