//! 4x4 affine transformation utilities

use crate::normal::Normal;
use crate::point::Point;
use crate::vector::Vector;
use approx::{AbsDiffEq, RelativeEq};
use nalgebra::{Matrix3, Matrix4, Unit, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Mul, MulAssign};

/// A 4x4 affine transformation: a 3x3 linear block plus a translation
/// column. The bottom row is never projective.
///
/// Application dispatches per entity kind: points pick up translation, free
/// vectors see only the linear block, and normals go through the
/// inverse-transpose of the linear block so they stay perpendicular to
/// transformed surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub matrix: Matrix4<f32>,
}

impl AffineTransform {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a non-uniform scaling transformation
    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&Vector3::new(x, y, z)),
        }
    }

    /// Create a uniform scaling transformation
    pub fn uniform_scaling(factor: f32) -> Self {
        Self {
            matrix: Matrix4::new_scaling(factor),
        }
    }

    /// Create the inverse of [`AffineTransform::scaling`].
    ///
    /// Each factor is inverted; a zero factor yields infinities rather than
    /// an error.
    pub fn inverse_scaling(x: f32, y: f32, z: f32) -> Self {
        Self::scaling(1.0 / x, 1.0 / y, 1.0 / z)
    }

    /// Create the inverse of [`AffineTransform::uniform_scaling`]
    pub fn inverse_uniform_scaling(factor: f32) -> Self {
        Self::uniform_scaling(1.0 / factor)
    }

    /// Create a rotation of `angle` radians about an arbitrary axis.
    ///
    /// The axis is read from the vector's first three coordinates and
    /// normalized; a zero axis degenerates to NaN.
    pub fn rotation(angle: f32, axis: &Vector) -> Self {
        let axis = Unit::new_normalize(axis.coords.xyz());
        Self {
            matrix: UnitQuaternion::from_axis_angle(&axis, angle).to_homogeneous(),
        }
    }

    /// Create the inverse of [`AffineTransform::rotation`]: the same axis,
    /// negated angle
    pub fn inverse_rotation(angle: f32, axis: &Vector) -> Self {
        Self::rotation(-angle, axis)
    }

    /// Create a translation transformation
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Self {
            matrix: Matrix4::new_translation(&Vector3::new(x, y, z)),
        }
    }

    /// Create the inverse of [`AffineTransform::translation`]: each offset
    /// negated
    pub fn inverse_translation(x: f32, y: f32, z: f32) -> Self {
        Self::translation(-x, -y, -z)
    }

    /// Apply the transformation to a point.
    ///
    /// Points carry `w = 0`, so the matrix multiply contributes only the
    /// linear block; the translation column is then added back with its
    /// w slot forced to 0. Skipping that add would leave points
    /// translation-invariant.
    pub fn transform_point(&self, point: &Point) -> Point {
        let mut translation = self.matrix.column(3).into_owned();
        translation.w = 0.0;
        Point::from_homogeneous(self.matrix * point.coords + translation)
    }

    /// Apply the transformation to a free vector.
    ///
    /// Only the linear block participates; translation never moves a
    /// displacement.
    pub fn transform_vector(&self, vector: &Vector) -> Vector {
        let linear = self.matrix.fixed_view::<3, 3>(0, 0);
        Vector::from_homogeneous((linear * vector.coords.xyz()).push(0.0))
    }

    /// Apply the transformation to a surface normal.
    ///
    /// Normals go through the inverse-transpose of the linear block, which
    /// preserves perpendicularity under non-uniform scale and shear. A
    /// singular linear block yields NaN components rather than an error.
    pub fn transform_normal(&self, normal: &Normal) -> Normal {
        let linear = self.matrix.fixed_view::<3, 3>(0, 0).into_owned();
        let inverse_transpose = linear
            .try_inverse()
            .unwrap_or_else(|| Matrix3::from_element(f32::NAN))
            .transpose();
        Normal::from_homogeneous((inverse_transpose * normal.coords.xyz()).push(0.0))
    }

    /// Compose this transformation with another; `self` is applied after
    /// `other`
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Get the inverse transformation, if the matrix is invertible
    pub fn inverse(self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    /// Check if this is approximately the identity transformation
    pub fn is_identity(&self, epsilon: f32) -> bool {
        (self.matrix - Matrix4::identity()).norm() < epsilon
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// `A * B` applies `B` first, then `A`, under the matrix-times-column
/// convention. Associative, not commutative.
impl Mul for AffineTransform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl MulAssign for AffineTransform {
    fn mul_assign(&mut self, rhs: Self) {
        self.matrix *= rhs.matrix;
    }
}

impl Mul<Point> for AffineTransform {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        self.transform_point(&rhs)
    }
}

impl Mul<Vector> for AffineTransform {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        self.transform_vector(&rhs)
    }
}

impl Mul<Normal> for AffineTransform {
    type Output = Normal;

    fn mul(self, rhs: Normal) -> Normal {
        self.transform_normal(&rhs)
    }
}

impl From<Matrix4<f32>> for AffineTransform {
    fn from(matrix: Matrix4<f32>) -> Self {
        Self { matrix }
    }
}

impl fmt::Display for AffineTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            writeln!(
                f,
                "[{} {} {} {}]",
                self.matrix[(row, 0)],
                self.matrix[(row, 1)],
                self.matrix[(row, 2)],
                self.matrix[(row, 3)]
            )?;
        }
        Ok(())
    }
}

impl AbsDiffEq for AffineTransform {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.matrix.abs_diff_eq(&other.matrix, epsilon)
    }
}

impl RelativeEq for AffineTransform {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.matrix.relative_eq(&other.matrix, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity_fixes_all_kinds() {
        let t = AffineTransform::identity();
        let p = Point::new(1.0, 2.0, 3.0);
        let v = Vector::new(-1.0, 0.5, 2.0);
        let n = Normal::new(0.0, 1.0, 0.0);

        assert_relative_eq!(t * p, p);
        assert_relative_eq!(t * v, v);
        assert_relative_eq!(t * n, n);
    }

    #[test]
    fn test_translation_moves_points_only() {
        let t = AffineTransform::translation(1.0, 2.0, 3.0);
        let p = Point::new(1.0, 1.0, 1.0);
        let v = Vector::new(1.0, 1.0, 1.0);

        assert_relative_eq!(t * p, Point::new(2.0, 3.0, 4.0));
        assert_relative_eq!(t * v, v);
    }

    #[test]
    fn test_translation_inverse_round_trip() {
        let t = AffineTransform::translation(4.0, -2.0, 0.5);
        let back = AffineTransform::inverse_translation(4.0, -2.0, 0.5);
        let p = Point::new(1.0, 2.0, 3.0);
        assert_relative_eq!(back * (t * p), p, epsilon = 1e-6);
    }

    #[test]
    fn test_scaling() {
        let t = AffineTransform::scaling(2.0, 3.0, 4.0);
        assert_relative_eq!(
            t * Point::new(1.0, 1.0, 1.0),
            Point::new(2.0, 3.0, 4.0)
        );
        assert_relative_eq!(
            t * Vector::new(1.0, 1.0, 1.0),
            Vector::new(2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn test_scale_inverse_scale_round_trip() {
        let t = AffineTransform::inverse_scaling(2.0, 4.0, 0.5)
            * AffineTransform::scaling(2.0, 4.0, 0.5);
        assert!(t.is_identity(1e-6));

        let u = AffineTransform::inverse_uniform_scaling(3.0)
            * AffineTransform::uniform_scaling(3.0);
        let p = Point::new(1.0, -2.0, 3.0);
        let v = Vector::new(0.5, 0.5, 0.5);
        let n = Normal::new(0.0, 1.0, 0.0);
        assert_relative_eq!(u * p, p, epsilon = 1e-6);
        assert_relative_eq!(u * v, v, epsilon = 1e-6);
        assert_relative_eq!(u * n, n, epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_quarter_turn_about_z() {
        let t = AffineTransform::rotation(FRAC_PI_2, &Vector::new(0.0, 0.0, 1.0));
        assert_relative_eq!(
            t * Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_rotation_inverse_round_trip() {
        let axis = Vector::new(1.0, 2.0, -1.0);
        let t = AffineTransform::rotation(0.7, &axis);
        let back = AffineTransform::inverse_rotation(0.7, &axis);
        let p = Point::new(1.0, 2.0, 3.0);
        assert_relative_eq!(back * (t * p), p, epsilon = 1e-5);
    }

    #[test]
    fn test_rotation_normalizes_axis() {
        let unit = AffineTransform::rotation(0.4, &Vector::new(0.0, 0.0, 1.0));
        let scaled = AffineTransform::rotation(0.4, &Vector::new(0.0, 0.0, 10.0));
        assert_relative_eq!(unit, scaled, epsilon = 1e-6);
    }

    #[test]
    fn test_composition_applies_right_operand_first() {
        let scale = AffineTransform::scaling(2.0, 2.0, 2.0);
        let translate = AffineTransform::translation(1.0, 0.0, 0.0);
        let p = Point::new(1.0, 0.0, 0.0);

        // scale then translate
        assert_relative_eq!((translate * scale) * p, Point::new(3.0, 0.0, 0.0));
        // translate then scale
        assert_relative_eq!((scale * translate) * p, Point::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_composition_associativity() {
        let a = AffineTransform::rotation(0.3, &Vector::new(0.0, 1.0, 0.0));
        let b = AffineTransform::scaling(2.0, 1.0, 0.5);
        let c = AffineTransform::translation(1.0, 2.0, 3.0);
        let p = Point::new(0.5, -1.0, 2.0);

        assert_relative_eq!(((a * b) * c) * p, (a * (b * c)) * p, epsilon = 1e-5);
    }

    #[test]
    fn test_mul_assign_matches_mul() {
        let a = AffineTransform::translation(1.0, 2.0, 3.0);
        let b = AffineTransform::scaling(2.0, 2.0, 2.0);
        let mut c = a;
        c *= b;
        assert_relative_eq!(c, a * b);
    }

    #[test]
    fn test_normal_stays_perpendicular_under_nonuniform_scale() {
        // Plane containing v, with normal n perpendicular to it.
        let n = Normal::new(1.0, 1.0, 0.0);
        let v = Vector::new(1.0, -1.0, 0.0);
        assert_relative_eq!(n.dot(&v), 0.0);

        let t = AffineTransform::scaling(2.0, 1.0, 1.0);
        let moved_tangent = t * v;

        // The covariant rule keeps the pair perpendicular.
        let moved_normal = t * n;
        assert_relative_eq!(moved_normal.dot(&moved_tangent), 0.0, epsilon = 1e-6);

        // The plain linear rule does not; this is what distinguishes a
        // normal from a vector.
        let naive = t * Vector::from(n);
        assert!(naive.dot(&moved_tangent).abs() > 1.0);
    }

    #[test]
    fn test_normal_transform_singular_block_is_nan() {
        let t = AffineTransform::scaling(0.0, 1.0, 1.0);
        let n = t * Normal::new(1.0, 1.0, 1.0);
        assert!(n.x().is_nan() || n.x().is_infinite());
        assert!(n.magnitude().is_nan() || n.magnitude().is_infinite());
    }

    #[test]
    fn test_inverse() {
        let t = AffineTransform::translation(1.0, 2.0, 3.0)
            * AffineTransform::scaling(2.0, 4.0, 8.0);
        let inv = t.inverse().unwrap();
        assert!((inv * t).is_identity(1e-5));

        let singular = AffineTransform::scaling(0.0, 1.0, 1.0);
        assert!(singular.inverse().is_none());
    }

    #[test]
    fn test_from_matrix() {
        let m = Matrix4::new_scaling(2.0);
        let t = AffineTransform::from(m);
        assert_eq!(t.matrix, m);
    }

    #[test]
    fn test_default_is_identity() {
        assert!(AffineTransform::default().is_identity(f32::EPSILON));
    }
}
