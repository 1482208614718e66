//! Core traits for affinekit

use crate::{normal::Normal, point::Point, transform::AffineTransform, vector::Vector};

/// Trait for geometry that can be moved by an affine transform.
///
/// Each implementor applies its own transformation rule, so a normal can
/// never be pushed through the point or vector rule without an explicit
/// reinterpreting conversion first.
pub trait Transformable {
    /// Apply a transformation to the object
    fn transform(&mut self, transform: &AffineTransform);
}

impl Transformable for Point {
    fn transform(&mut self, transform: &AffineTransform) {
        *self = transform.transform_point(self);
    }
}

impl Transformable for Vector {
    fn transform(&mut self, transform: &AffineTransform) {
        *self = transform.transform_vector(self);
    }
}

impl Transformable for Normal {
    fn transform(&mut self, transform: &AffineTransform) {
        *self = transform.transform_normal(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transformable_dispatches_per_kind() {
        let t = AffineTransform::translation(1.0, 0.0, 0.0);

        let mut p = Point::origin();
        let mut v = Vector::new(1.0, 1.0, 1.0);
        let mut n = Normal::new(0.0, 1.0, 0.0);
        p.transform(&t);
        v.transform(&t);
        n.transform(&t);

        assert_relative_eq!(p, Point::new(1.0, 0.0, 0.0));
        assert_relative_eq!(v, Vector::new(1.0, 1.0, 1.0));
        assert_relative_eq!(n, Normal::new(0.0, 1.0, 0.0));
    }
}
