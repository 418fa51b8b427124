// ============================================================================
// Basic Usage Example
// ============================================================================

use vector_algebra::prelude::*;

fn main() -> Result<(), VectorError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Arithmetic ===\n");

    let a = Vector::new([8.218, -9.341])?;
    let b = Vector::new([-1.129, 2.111])?;
    println!("{} + {} = {}", a, b, a.add(&b)?);

    let a = Vector::new([7.119, 8.215])?;
    let b = Vector::new([-8.223, 0.878])?;
    println!("{} - {} = {}", a, b, a.subtract(&b)?);

    let v = Vector::new([1.671, -1.012, -0.318])?;
    println!("7.41 * {} = {}", v, v.scale(7.41)?);

    println!("\n=== Magnitude & Direction ===\n");

    for v in [
        Vector::new([-0.221, 7.437])?,
        Vector::new([8.813, -1.331, -6.247])?,
    ] {
        println!("|{}| = {:.3}", v, v.magnitude()?);
    }

    for v in [
        Vector::new([5.581, -2.136])?,
        Vector::new([1.996, 3.108, -4.554])?,
    ] {
        println!("unit({}) = {}", v, v.normalize()?);
    }

    println!("\n=== Dot Product & Angle ===\n");

    let a = Vector::new([7.887, 4.138])?;
    let b = Vector::new([-8.802, 6.776])?;
    println!("dot = {}", a.dot(&b)?);

    let a = Vector::new([-5.955, -4.904, -1.874])?;
    let b = Vector::new([-4.496, -8.755, 7.103])?;
    println!("dot = {}", a.dot(&b)?);

    let a = Vector::new([3.183, -7.627])?;
    let b = Vector::new([-2.668, 5.319])?;
    println!("angle = {:.3} rad", a.angle(&b)?);

    let a = Vector::new([7.35, 0.221, 5.188])?;
    let b = Vector::new([2.751, 8.259, 3.985])?;
    println!("angle = {:.3} deg", a.angle_degrees(&b)?);

    println!("\n=== Parallel / Orthogonal ===\n");

    let pairs = [
        (Vector::new([-7.579, -7.88])?, Vector::new([22.737, 23.64])?),
        (
            Vector::new([-2.029, 9.97, 4.172])?,
            Vector::new([-9.231, -6.639, -7.245])?,
        ),
        (
            Vector::new([-2.328, -7.284, -1.214])?,
            Vector::new([-1.821, 1.072, -2.94])?,
        ),
        (Vector::new([2.118, 4.827])?, Vector::new([0, 0])?),
    ];
    for (i, (a, b)) in pairs.iter().enumerate() {
        println!("Pair {} is {}", i + 1, a.classify(b)?);
    }

    println!("\n=== Projections ===\n");

    let v = Vector::new([3.039, 1.879])?;
    let basis = Vector::new([0.825, 2.036])?;
    println!("parallel: {}", v.parallel_projection(&basis)?);

    let v = Vector::new([-9.88, -3.264, -8.159])?;
    let basis = Vector::new([-2.155, -9.353, -9.473])?;
    println!("orthogonal: {}", v.orthogonal_projection(&basis)?);

    let v = Vector::new([3.009, -6.172, 3.692, -2.51])?;
    let basis = Vector::new([6.404, -9.144, 2.759, 8.718])?;
    let (parallel, orthogonal) = v.component_vectors(&basis)?;
    println!("components:\n  {}\n  {}", parallel, orthogonal);

    println!("\n=== Cross Product & Areas ===\n");

    let v = Vector::new([8.462, 7.893, -8.187])?;
    let w = Vector::new([6.984, -5.975, 4.778])?;
    println!("{} x {} = {}", v, w, v.cross(&w)?);

    let v = Vector::new([-8.987, -9.838, 5.031])?;
    let w = Vector::new([-4.268, -1.861, -8.866])?;
    println!("parallelogram area = {:.3}", v.parallelogram_area(&w)?);

    let v = Vector::new([1.5, 9.547, 3.691])?;
    let w = Vector::new([-6.007, 0.124, 5.772])?;
    println!("triangle area = {:.3}", v.triangle_area(&w)?);

    println!("\n=== Failure Modes ===\n");

    let zero = Vector::zero(2)?;
    match zero.normalize() {
        Err(e) => println!("normalize(zero): {}", e),
        Ok(v) => println!("unexpected: {}", v),
    }
    match Vector::new(Vec::<f64>::new()) {
        Err(e) => println!("Vector::new([]): {}", e),
        Ok(v) => println!("unexpected: {}", v),
    }

    Ok(())
}
