//! Free displacement vectors and related functionality

use crate::normal::Normal;
use crate::point::Point;
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use nalgebra::Vector4;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A free 3D displacement stored as a homogeneous 4-tuple with `w = 0`.
///
/// Vectors are invariant under translation; an affine transform moves a
/// vector with its linear block only. The homogeneous slot is zeroed by
/// every constructor and never exposed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Vector {
    pub(crate) coords: Vector4<f32>,
}

unsafe impl Pod for Vector {}
unsafe impl Zeroable for Vector {}

impl Vector {
    /// Create a vector from its three components
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            coords: Vector4::new(x, y, z, 0.0),
        }
    }

    /// Create a vector from the first three values of a slice
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

    /// Euclidean length of the vector
    pub fn magnitude(&self) -> f32 {
        self.coords.norm()
    }

    /// Squared Euclidean length, cheaper when only comparisons are needed
    pub fn magnitude_squared(&self) -> f32 {
        self.coords.norm_squared()
    }

    /// Scale the vector to unit length in place.
    ///
    /// A zero-length vector degenerates to NaN components; no error is
    /// raised.
    pub fn normalize(&mut self) {
        self.coords.normalize_mut();
    }

    /// Standard inner product with another vector
    pub fn dot(&self, other: &Vector) -> f32 {
        self.coords.dot(&other.coords)
    }

    /// Inner product with a normal; same formula, covector operand
    pub fn dot_normal(&self, normal: &Normal) -> f32 {
        self.coords.dot(&normal.coords)
    }

    /// 3-component cross product.
    ///
    /// The homogeneous slot is ignored on both operands and the result is
    /// re-embedded with `w = 0`.
    pub fn cross(&self, other: &Vector) -> Vector {
        let product = self.coords.xyz().cross(&other.coords.xyz());
        Vector::from_homogeneous(product.push(0.0))
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::from_homogeneous(self.coords + rhs.coords)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.coords += rhs.coords;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::from_homogeneous(self.coords - rhs.coords)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.coords -= rhs.coords;
    }
}

/// Adding a normal to a vector reinterprets the normal as a displacement.
impl Add<Normal> for Vector {
    type Output = Vector;

    fn add(self, rhs: Normal) -> Vector {
        Vector::from_homogeneous(self.coords + rhs.coords)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f32) -> Vector {
        Vector::from_homogeneous(self.coords * scalar)
    }
}

impl Mul<Vector> for f32 {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Vector {
        Vector::from_homogeneous(vector.coords * self)
    }
}

impl Div<f32> for Vector {
    type Output = Vector;

    fn div(self, scalar: f32) -> Vector {
        Vector::from_homogeneous(self.coords / scalar)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::from_homogeneous(-self.coords)
    }
}

impl From<[f32; 3]> for Vector {
    fn from(coords: [f32; 3]) -> Self {
        Self::new(coords[0], coords[1], coords[2])
    }
}

impl From<Normal> for Vector {
    fn from(normal: Normal) -> Self {
        Self {
            coords: normal.coords,
        }
    }
}

impl From<Point> for Vector {
    fn from(point: Point) -> Self {
        Self {
            coords: point.coords,
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.coords.abs_diff_eq(&other.coords, epsilon)
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.coords.relative_eq(&other.coords, epsilon, max_relative)
    }
}
