// ============================================================================
// Domain Models Module
// The vector value type, its configuration and classification outcome
// ============================================================================

pub mod config;
pub mod relation;
pub mod vector;

pub use config::VectorConfig;
pub use relation::Relation;
pub use vector::Vector;
