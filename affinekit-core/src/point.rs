//! Position points and related functionality

use crate::normal::Normal;
use crate::vector::Vector;
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use nalgebra::Vector4;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// A position in 3D space stored as a homogeneous 4-tuple.
///
/// The homogeneous slot is kept at 0 rather than the classic 1: the affine
/// transform adds its translation column back explicitly when applied to a
/// point, so translation still takes effect. Keeping `w = 0` everywhere is
/// load-bearing and must not be changed without re-deriving the transform
/// rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Point {
    pub(crate) coords: Vector4<f32>,
}

unsafe impl Pod for Point {}
unsafe impl Zeroable for Point {}

impl Point {
    /// Create a point from its three coordinates
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            coords: Vector4::new(x, y, z, 0.0),
        }
    }

    /// The origin
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Create a point from the first three values of a slice
    pub fn from_slice(coords: &[f32]) -> Self {
        Self::new(coords[0], coords[1], coords[2])
    }

    pub(crate) fn from_homogeneous(coords: Vector4<f32>) -> Self {
        Self { coords }
    }

    /// Get the x coordinate
    pub fn x(&self) -> f32 {
        self.coords.x
    }

    /// Get the y coordinate
    pub fn y(&self) -> f32 {
        self.coords.y
    }

    /// Get the z coordinate
    pub fn z(&self) -> f32 {
        self.coords.z
    }

    /// Set the x coordinate
    pub fn set_x(&mut self, x: f32) {
        self.coords.x = x;
    }

    /// Set the y coordinate
    pub fn set_y(&mut self, y: f32) {
        self.coords.y = y;
    }

    /// Set the z coordinate
    pub fn set_z(&mut self, z: f32) {
        self.coords.z = z;
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

/// Offsetting a point by a vector yields another point.
impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point::from_homogeneous(self.coords + rhs.coords)
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, rhs: Vector) {
        self.coords += rhs.coords;
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Point {
        Point::from_homogeneous(self.coords - rhs.coords)
    }
}

impl SubAssign<Vector> for Point {
    fn sub_assign(&mut self, rhs: Vector) {
        self.coords -= rhs.coords;
    }
}

/// Subtracting two positions yields the free displacement between them,
/// not a position.
impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::from_homogeneous(self.coords - rhs.coords)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, scalar: f32) -> Point {
        Point::from_homogeneous(self.coords * scalar)
    }
}

impl Mul<Point> for f32 {
    type Output = Point;

    fn mul(self, point: Point) -> Point {
        Point::from_homogeneous(point.coords * self)
    }
}

impl From<[f32; 3]> for Point {
    fn from(coords: [f32; 3]) -> Self {
        Self::new(coords[0], coords[1], coords[2])
    }
}

impl From<Vector> for Point {
    fn from(vector: Vector) -> Self {
        Self {
            coords: vector.coords,
        }
    }
}

impl From<Normal> for Point {
    fn from(normal: Normal) -> Self {
        Self {
            coords: normal.coords,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.coords.abs_diff_eq(&other.coords, epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.coords.relative_eq(&other.coords, epsilon, max_relative)
    }
}
