//! Surface normals and related functionality

use crate::point::Point;
use crate::vector::Vector;
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use nalgebra::Vector4;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg};

/// A surface-orientation covector stored as a homogeneous 4-tuple with
/// `w = 0`.
///
/// Normals share the vector algebra but transform by the inverse-transpose
/// of an affine transform's linear block, which keeps them perpendicular to
/// transformed surfaces where the plain linear rule would not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Normal {
    pub(crate) coords: Vector4<f32>,
}

unsafe impl Pod for Normal {}
unsafe impl Zeroable for Normal {}

impl Normal {
    /// Create a normal from its three components
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            coords: Vector4::new(x, y, z, 0.0),
        }
    }

    /// Create a normal from the first three values of a slice
    pub fn from_slice(coords: &[f32]) -> Self {
        Self::new(coords[0], coords[1], coords[2])
    }

    pub(crate) fn from_homogeneous(coords: Vector4<f32>) -> Self {
        Self { coords }
    }

    /// Get the x component
    pub fn x(&self) -> f32 {
        self.coords.x
    }

    /// Get the y component
    pub fn y(&self) -> f32 {
        self.coords.y
    }

    /// Get the z component
    pub fn z(&self) -> f32 {
        self.coords.z
    }

    /// Set the x component
    pub fn set_x(&mut self, x: f32) {
        self.coords.x = x;
    }

    /// Set the y component
    pub fn set_y(&mut self, y: f32) {
        self.coords.y = y;
    }

    /// Set the z component
    pub fn set_z(&mut self, z: f32) {
        self.coords.z = z;
    }

    /// Euclidean length of the normal
    pub fn magnitude(&self) -> f32 {
        self.coords.norm()
    }

    /// Squared Euclidean length
    pub fn magnitude_squared(&self) -> f32 {
        self.coords.norm_squared()
    }

    /// Scale the normal to unit length in place.
    ///
    /// A zero-length normal degenerates to NaN components; no error is
    /// raised.
    pub fn normalize(&mut self) {
        self.coords.normalize_mut();
    }

    /// Inner product with a vector
    pub fn dot(&self, vector: &Vector) -> f32 {
        self.coords.dot(&vector.coords)
    }
}

impl Default for Normal {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Add for Normal {
    type Output = Normal;

    fn add(self, rhs: Normal) -> Normal {
        Normal::from_homogeneous(self.coords + rhs.coords)
    }
}

impl AddAssign for Normal {
    fn add_assign(&mut self, rhs: Normal) {
        self.coords += rhs.coords;
    }
}

/// Adding a vector to a normal leaves covector territory; the sum is a
/// plain displacement.
impl Add<Vector> for Normal {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::from_homogeneous(self.coords + rhs.coords)
    }
}

impl Mul<f32> for Normal {
    type Output = Normal;

    fn mul(self, scalar: f32) -> Normal {
        Normal::from_homogeneous(self.coords * scalar)
    }
}

impl Mul<Normal> for f32 {
    type Output = Normal;

    fn mul(self, normal: Normal) -> Normal {
        Normal::from_homogeneous(normal.coords * self)
    }
}

impl Neg for Normal {
    type Output = Normal;

    fn neg(self) -> Normal {
        Normal::from_homogeneous(-self.coords)
    }
}

impl From<[f32; 3]> for Normal {
    fn from(coords: [f32; 3]) -> Self {
        Self::new(coords[0], coords[1], coords[2])
    }
}

impl From<Vector> for Normal {
    fn from(vector: Vector) -> Self {
        Self {
            coords: vector.coords,
        }
    }
}

impl From<Point> for Normal {
    fn from(point: Point) -> Self {
        Self {
            coords: point.coords,
        }
    }
}

impl fmt::Display for Normal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

impl AbsDiffEq for Normal {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.coords.abs_diff_eq(&other.coords, epsilon)
    }
}

impl RelativeEq for Normal {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.coords.relative_eq(&other.coords, epsilon, max_relative)
    }
}
