//! Basic usage demo for affinekit
//!
//! This demo walks through fundamental operations:
//! - Building points, vectors and normals
//! - Composing affine transforms from the named factories
//! - Applying one transform to each entity kind

use affinekit_core::{AffineTransform, Normal, Point, Vector};
use std::f32::consts::FRAC_PI_2;

fn main() {
    println!("affinekit basic usage");
    println!("=====================");

    // Build some geometry
    let p = Point::new(1.0, 0.0, 0.0);
    let v = Vector::new(1.0, 0.0, 0.0);
    let n = Normal::new(1.0, 1.0, 0.0);
    println!("point  {}", p);
    println!("vector {}", v);
    println!("normal {}", n);

    // Compose a model transform: scale, then rotate, then place
    let model = AffineTransform::translation(5.0, 0.0, 0.0)
        * AffineTransform::rotation(FRAC_PI_2, &Vector::new(0.0, 0.0, 1.0))
        * AffineTransform::scaling(2.0, 1.0, 1.0);
    println!("\nmodel transform:\n{}", model);

    // Each kind moves by its own rule
    println!("transformed point  {}", model * p);
    println!("transformed vector {} (no translation)", model * v);
    println!("transformed normal {} (inverse-transpose)", model * n);

    // Point differences are displacements
    let q = Point::new(0.0, 2.0, 0.0);
    let gaze: Vector = q - p;
    println!("\n{} - {} = {}", q, p, gaze);

    // Degenerate input degrades to IEEE-754 specials, never an error
    let mut zero = Vector::default();
    zero.normalize();
    println!("normalized zero vector: {}", zero);
}
