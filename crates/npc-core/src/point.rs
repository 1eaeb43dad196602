//! 3D point value type used by agents and pathfinding.
//!
//! `Point3` uses `f32` components — matching the precision game hosts feed
//! in and keeping waypoint lists compact.  It has no identity and is
//! immutable once constructed; all operations return new values.

use std::ops::{Add, Mul, Sub};

/// A three-component point in world space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Linear interpolation: `self + (other - self) * t`.
    ///
    /// `t` is not clamped; callers pass whatever coefficient the waypoint
    /// scheme requires.
    #[inline]
    pub fn lerp(self, other: Point3, t: f32) -> Point3 {
        self + (other - self) * t
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point3) -> f32 {
        let d = other - self;
        (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
    }

    /// `true` when all three components are finite (no NaN, no infinity).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Point3 {
    type Output = Point3;
    #[inline]
    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Point3;
    #[inline]
    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Point3 {
    type Output = Point3;
    #[inline]
    fn mul(self, rhs: f32) -> Point3 {
        Point3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl std::fmt::Display for Point3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
