//! Demonstrates why normals need the inverse-transpose rule
//!
//! Squashes a tilted plane with a non-uniform scale and prints the dot
//! product of its normal against an in-plane edge under both the correct
//! covariant rule and the naive vector rule.

use affinekit_core::{AffineTransform, Normal, Point, Vector};

fn main() {
    // A plane tilted 45 degrees around z, with an edge lying inside it.
    let a = Point::new(1.0, 1.0, 0.0);
    let b = Point::new(2.0, 0.0, 0.0);
    let normal = Normal::new(1.0, 1.0, 0.0);
    println!("edge . normal before transform: {}", normal.dot(&(b - a)));

    let squash = AffineTransform::scaling(3.0, 1.0, 1.0);
    let edge = (squash * b) - (squash * a);

    let covariant = squash * normal;
    println!("covariant rule:  edge . normal = {}", covariant.dot(&edge));

    let naive = squash * Vector::from(normal);
    println!("naive rule:      edge . normal = {}", naive.dot(&edge));
}
