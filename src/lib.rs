// ============================================================================
// Vector Algebra Library
// Fixed-precision decimal vectors with algebraic and geometric operations
// ============================================================================

//! # Vector Algebra
//!
//! Immutable n-dimensional vectors over 28-digit decimals.
//!
//! ## Features
//!
//! - **Arithmetic**: addition, subtraction, scalar multiplication
//! - **Metrics**: magnitude, normalization, zero test
//! - **Relations**: dot product, angle, parallel / orthogonal classification
//! - **Decomposition**: parallel and orthogonal projection, cross product,
//!   parallelogram and triangle areas
//! - **Typed errors**: every failure is a [`numeric::VectorError`] variant
//!
//! Rounding and tolerances live in a [`domain::VectorConfig`] carried by a
//! [`engine::VectorAlgebra`]; the methods on [`domain::Vector`] use the
//! standard configuration (dot products rounded to 3 places, tolerances of
//! 1e-10).
//!
//! ## Example
//!
//! ```rust
//! use vector_algebra::prelude::*;
//!
//! let v = Vector::new([8.462, 7.893, -8.187])?;
//! let w = Vector::new([6.984, -5.975, 4.778])?;
//!
//! println!("{}", v.cross(&w)?);
//! println!("dot: {}", v.dot(&w)?);
//! println!("angle: {:.3} rad", v.angle(&w)?);
//! println!("relation: {}", v.classify(&w)?);
//!
//! // Same operations with exact dot products
//! let exact = VectorAlgebra::new(VectorConfig::exact());
//! println!("exact dot: {}", exact.dot(&v, &w)?);
//! # Ok::<(), VectorError>(())
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Relation, Vector, VectorConfig};
    pub use crate::engine::{create_from_config, AngleUnit, VectorAlgebra};
    pub use crate::numeric::{Coordinate, IntoCoordinate, VectorError, VectorResult};
}
