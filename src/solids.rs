/*

    Declare solids: Sphere, Cuboid, Cylinder, Compound

    Every solid answers two queries: does it contain a
    given point, and which axis aligned cuboid bounds it.
    Compound is the union of other solids (possibly other
    Compounds), so both queries recurse over its parts.

    @date: 23 Nov, 2025
    @author: bartu
*/

use thiserror::Error;

use crate::bbox::{Cuboid};
use crate::prelude::*;


// =======================================================================================================
// Sphere
// =======================================================================================================

#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub position: Vector3,
    pub radius: Float,
}

impl Sphere {
    pub fn new(position: Vector3, radius: Float) -> Self {
        if radius <= 0.0 {
            debug!("Constructed sphere with non-positive radius {}, the squared test treats it like radius {}", radius, radius.abs());
        }
        Self { position, radius }
    }

    pub fn contains_point(&self, point: Vector3) -> bool {
        // Compare squared lengths to skip the square root
        (point - self.position).length_squared() <= self.radius * self.radius
    }

    pub fn bounding_box(&self) -> Cuboid {
        let size = 2.0 * self.radius;
        Cuboid::new(self.position, size, size, size)
    }
}


// =======================================================================================================
// Cylinder
// =======================================================================================================

// Axis is fixed parallel to Z, size_z is the full height.
// No rotation support.
#[derive(Debug, Clone, Copy)]
pub struct Cylinder {
    pub position: Vector3,
    pub size_z: Float,
    pub radius: Float,
}

impl Cylinder {
    pub fn new(position: Vector3, size_z: Float, radius: Float) -> Self {
        if radius <= 0.0 || size_z <= 0.0 {
            debug!("Constructed cylinder with non-positive radius {} or height {}", radius, size_z);
        }
        Self { position, size_z, radius }
    }

    fn z_interval(&self) -> Interval {
        let min_z = self.position.z - self.size_z / 2.0;
        Interval::new(min_z, min_z + self.size_z)
    }

    pub fn contains_point(&self, point: Vector3) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        let radial2 = dx * dx + dy * dy;

        radial2 <= self.radius * self.radius && self.z_interval().contains(point.z)
    }

    pub fn bounding_box(&self) -> Cuboid {
        let size = 2.0 * self.radius;
        Cuboid::new(self.position, size, size, self.size_z)
    }
}


// =======================================================================================================
// Compound
// =======================================================================================================

#[derive(Debug, Error)]
#[error("a compound solid requires at least one part")]
pub struct EmptyCompoundError;

// Parts are private so the list stays non-empty and fixed
// after construction. Children are owned values, there is
// no back reference from a part to its parent.
#[derive(Debug, Clone)]
pub struct Compound {
    parts: Vec<Solid>,
}

impl Compound {
    /// Fails fast on an empty part list: the compound's own
    /// position is defined as the position of its first part,
    /// which does not exist in the empty case.
    pub fn new(parts: Vec<Solid>) -> Result<Self, EmptyCompoundError> {
        if parts.is_empty() {
            warn!("Rejected compound solid with zero parts");
            return Err(EmptyCompoundError);
        }
        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[Solid] {
        &self.parts
    }

    /// Derived attribute, not a centroid
    pub fn position(&self) -> Vector3 {
        self.parts[0].position()
    }

    pub fn contains_point(&self, point: Vector3) -> bool {
        self.parts.iter().any(|part| part.contains_point(point))
    }

    /// Folds the per-axis intervals of every part's bounding box,
    /// seeded from the first part so no infinity sentinel is ever
    /// needed. Recomputed from scratch on every call; solids are
    /// immutable, so callers who care can memoize the result.
    ///
    /// Total over degenerate parts: a part with negative extents
    /// contributes its inverted corner intervals as-is and can
    /// leave a negative sized result, it never fails the fold.
    ///
    /// WARNING: Recursion depth equals the nesting depth of
    /// Compound parts, which is whatever the caller built.
    pub fn bounding_box(&self) -> Cuboid {
        let (first, rest) = match self.parts.split_first() {
            Some(pair) => pair,
            None => unreachable!("Compound::new rejects empty part lists"),
        };

        let seed = first.bounding_box();
        let mut xint = seed.x_interval();
        let mut yint = seed.y_interval();
        let mut zint = seed.z_interval();

        for part in rest {
            let bbox = part.bounding_box();
            xint.enclose(&bbox.x_interval());
            yint.enclose(&bbox.y_interval());
            zint.enclose(&bbox.z_interval());
        }

        Cuboid::from_intervals(&xint, &yint, &zint)
    }
}


// =======================================================================================================
// Solid (the closed set of variants)
// =======================================================================================================

// A closed sum instead of a trait object: both queries are
// exhaustive matches, so adding a variant without implementing
// them is a compile error rather than a missing override.
#[derive(Debug, Clone)]
pub enum Solid {
    Sphere(Sphere),
    Cuboid(Cuboid),
    Cylinder(Cylinder),
    Compound(Compound),
}

impl Solid {
    pub fn contains_point(&self, point: Vector3) -> bool {
        match self {
            Solid::Sphere(sphere) => sphere.contains_point(point),
            Solid::Cuboid(cuboid) => cuboid.contains_point(point),
            Solid::Cylinder(cylinder) => cylinder.contains_point(point),
            Solid::Compound(compound) => compound.contains_point(point),
        }
    }

    pub fn bounding_box(&self) -> Cuboid {
        match self {
            Solid::Sphere(sphere) => sphere.bounding_box(),
            Solid::Cuboid(cuboid) => *cuboid, // a cuboid is its own tightest bound
            Solid::Cylinder(cylinder) => cylinder.bounding_box(),
            Solid::Compound(compound) => compound.bounding_box(),
        }
    }

    pub fn position(&self) -> Vector3 {
        match self {
            Solid::Sphere(sphere) => sphere.position,
            Solid::Cuboid(cuboid) => cuboid.position,
            Solid::Cylinder(cylinder) => cylinder.position,
            Solid::Compound(compound) => compound.position(),
        }
    }
}

impl From<Sphere> for Solid {
    fn from(sphere: Sphere) -> Self {
        Solid::Sphere(sphere)
    }
}

impl From<Cuboid> for Solid {
    fn from(cuboid: Cuboid) -> Self {
        Solid::Cuboid(cuboid)
    }
}

impl From<Cylinder> for Solid {
    fn from(cylinder: Cylinder) -> Self {
        Solid::Cylinder(cylinder)
    }
}

impl From<Compound> for Solid {
    fn from(compound: Compound) -> Self {
        Solid::Compound(compound)
    }
}
