/*

    Axis Aligned Bounding Box, stored as a center
    position plus full extents along each axis.

    The same struct doubles as the rectangular cuboid
    solid in solids.rs, since a cuboid is its own
    tightest bounding box.

    @author: bartu
    @date: 22 Nov, 2025
*/


use crate::interval::{Interval};
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    pub position: Vector3,

    pub size_x: Float,
    pub size_y: Float,
    pub size_z: Float,
}

impl Cuboid {
    pub fn new(position: Vector3, size_x: Float, size_y: Float, size_z: Float) -> Self {
        if size_x < 0.0 || size_y < 0.0 || size_z < 0.0 {
            debug!("Constructed cuboid with negative extents ({}, {}, {}), it will contain no points", size_x, size_y, size_z);
        }
        Self {
            position,
            size_x,
            size_y,
            size_z,
        }
    }

    /// Inverted (max < min) intervals are not rejected, they fall
    /// through as negative extents and get logged in new()
    pub fn from_intervals(xint: &Interval, yint: &Interval, zint: &Interval) -> Self {
        Self::new(
            Vector3::new(xint.midpoint(), yint.midpoint(), zint.midpoint()),
            xint.size(),
            yint.size(),
            zint.size(),
        )
    }

    pub fn half_extents(&self) -> Vector3 {
        Vector3::new(self.size_x, self.size_y, self.size_z) * 0.5
    }

    pub fn min_corner(&self) -> Vector3 {
        self.position - self.half_extents()
    }

    pub fn max_corner(&self) -> Vector3 {
        self.position + self.half_extents()
    }

    pub fn x_interval(&self) -> Interval {
        Interval::new(self.min_corner().x, self.max_corner().x)
    }

    pub fn y_interval(&self) -> Interval {
        Interval::new(self.min_corner().y, self.max_corner().y)
    }

    pub fn z_interval(&self) -> Interval {
        Interval::new(self.min_corner().z, self.max_corner().z)
    }

    /// Closed on every face, i.e. points exactly on a face count as inside
    pub fn contains_point(&self, point: Vector3) -> bool {
        point.cmpge(self.min_corner()).all() && point.cmple(self.max_corner()).all()
    }
}


#[cfg(test)]
mod tests {
    use super::*; // access to the outer scope

    #[test]
    fn test_faces_are_inside() {
        let cuboid = Cuboid::new(Vector3::new(0., 0., 0.), 2., 2., 2.);

        assert!(cuboid.contains_point(Vector3::new(1., 0., 0.)));
        assert!(cuboid.contains_point(Vector3::new(-1., -1., -1.))); // corner
        assert!(cuboid.contains_point(Vector3::new(0., 0., 0.)));

        // One ulp past a face is outside
        let just_outside = 1.0_f64.next_up();
        assert!(!cuboid.contains_point(Vector3::new(just_outside, 0., 0.)));
        assert!(!cuboid.contains_point(Vector3::new(0., 0., -just_outside)));
    }

    #[test]
    fn test_corners_match_intervals() {
        let cuboid = Cuboid::new(Vector3::new(1., 2., 3.), 4., 6., 8.);
        assert_eq!(cuboid.min_corner(), Vector3::new(-1., -1., -1.));
        assert_eq!(cuboid.max_corner(), Vector3::new(3., 5., 7.));

        let rebuilt = Cuboid::from_intervals(
            &cuboid.x_interval(),
            &cuboid.y_interval(),
            &cuboid.z_interval(),
        );
        assert_eq!(rebuilt, cuboid);
    }

    #[test]
    fn test_from_intervals_midpoint() {
        let xint = Interval::new(-1.0, 11.0);
        let yint = Interval::new(-1.0, 1.0);
        let zint = Interval::new(-1.0, 1.0);
        let cuboid = Cuboid::from_intervals(&xint, &yint, &zint);

        assert_eq!(cuboid.position, Vector3::new(5., 0., 0.));
        assert_eq!(cuboid.size_x, 12.0);
        assert_eq!(cuboid.size_y, 2.0);
        assert_eq!(cuboid.size_z, 2.0);
    }

    #[test]
    fn test_from_intervals_inverted_passthrough() {
        // Degenerate input produces a degenerate cuboid, not a failure
        let bad = Interval::new(1.0, -1.0);
        let ok = Interval::new(0.0, 1.0);
        let cuboid = Cuboid::from_intervals(&bad, &ok, &ok);

        assert_eq!(cuboid.position, Vector3::new(0., 0.5, 0.5));
        assert_eq!(cuboid.size_x, -2.0);
        // A negative extent makes min > max on that axis, so nothing fits
        assert!(!cuboid.contains_point(Vector3::new(0., 0.5, 0.5)));
    }

    #[test]
    fn test_degenerate_point_cuboid() {
        // min == max on every axis is a legal zero sized box
        let point = Cuboid::new(Vector3::new(2., 2., 2.), 0., 0., 0.);
        assert!(point.contains_point(Vector3::new(2., 2., 2.)));
        assert!(!point.contains_point(Vector3::new(2., 2., 2.0 + 1e-12)));
    }
}
