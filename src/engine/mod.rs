// ============================================================================
// Engine Module
// Vector operations: configured algebra, orientation, projection, cross product
// ============================================================================

pub mod algebra;
pub mod cross;
pub mod orientation;
pub mod projection;

pub use algebra::{create_from_config, AngleUnit, VectorAlgebra};
