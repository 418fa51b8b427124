// ============================================================================
// Vector Errors
// Error taxonomy for construction, arithmetic and geometric operations
// ============================================================================

use std::fmt;

/// Message used when a vector is built from an empty coordinate sequence.
pub const EMPTY_COORDINATES_MSG: &str = "coordinates must be non-empty";

/// Message used when input cannot be read as a sequence of numbers.
pub const NOT_A_SEQUENCE_MSG: &str = "coordinates must be an iterable of numeric values";

/// Errors that can occur while building or operating on vectors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VectorError {
    /// Malformed constructor input (empty, not a sequence, or non-numeric)
    InvalidArgument(String),
    /// Operands of a binary operation have different dimensions
    DimensionMismatch { expected: usize, found: usize },
    /// Normalization of a zero-magnitude vector
    ZeroVector,
    /// Angle requested with a zero-magnitude operand
    AngleUndefined,
    /// Parallel projection onto a zero-magnitude basis
    NoUniqueParallelComponent,
    /// Orthogonal projection onto a zero-magnitude basis
    NoUniqueOrthogonalComponent,
    /// Cross product outside {2D, 3D} or of mixed dimension
    UnsupportedDimension { left: usize, right: usize },
    /// Result exceeded the decimal range
    Overflow,
    /// Configuration value out of range
    InvalidConfig(String),
}

impl VectorError {
    /// Shorthand for the empty-input construction error.
    pub fn empty_coordinates() -> Self {
        VectorError::InvalidArgument(EMPTY_COORDINATES_MSG.to_string())
    }

    /// Shorthand for the not-a-sequence construction error.
    pub fn not_a_sequence() -> Self {
        VectorError::InvalidArgument(NOT_A_SEQUENCE_MSG.to_string())
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            VectorError::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected {} coordinates, found {}",
                expected, found
            ),
            VectorError::ZeroVector => write!(f, "cannot normalize the zero vector"),
            VectorError::AngleUndefined => {
                write!(f, "cannot compute an angle with the zero vector")
            },
            VectorError::NoUniqueParallelComponent => {
                write!(f, "no unique parallel component exists")
            },
            VectorError::NoUniqueOrthogonalComponent => {
                write!(f, "no unique orthogonal component exists")
            },
            VectorError::UnsupportedDimension { left, right } => write!(
                f,
                "cross product only defined for 2D or 3D vectors (got {}D x {}D)",
                left, right
            ),
            VectorError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded decimal range")
            },
            VectorError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for VectorError {}

/// Result type alias for vector operations
pub type VectorResult<T> = Result<T, VectorError>;
