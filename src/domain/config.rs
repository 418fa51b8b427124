// ============================================================================
// Vector Algebra Configuration
// Rounding and tolerance settings threaded into every configured operation
// ============================================================================

use crate::numeric::{VectorError, VectorResult};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default decimal places the dot product is rounded to
pub const DEFAULT_DOT_SCALE: u32 = 3;

/// Default threshold below which a magnitude or dot product counts as zero (1e-10)
pub const DEFAULT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 10);

/// Largest scale a 96-bit decimal can carry
pub const MAX_DOT_SCALE: u32 = 28;

/// Default ε for comparing an angle against 0 or π, in radians
pub const DEFAULT_ANGLE_TOLERANCE: f64 = 1e-10;

/// Settings for the tolerance- and rounding-dependent operations.
///
/// There is no process-wide precision state: coordinates always carry
/// 28 significant digits, and everything configurable lives here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VectorConfig {
    /// Decimal places `dot` rounds to (banker's rounding).
    /// None returns the exact sum of products.
    pub dot_scale: Option<u32>,

    /// `is_zero` holds when the magnitude is strictly below this value
    pub zero_tolerance: Decimal,

    /// `is_orthogonal` holds when |dot| is strictly below this value
    pub orthogonal_tolerance: Decimal,

    /// Angles within this many radians of 0 or π count as parallel
    pub angle_tolerance: f64,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            dot_scale: Some(DEFAULT_DOT_SCALE),
            zero_tolerance: DEFAULT_TOLERANCE,
            orthogonal_tolerance: DEFAULT_TOLERANCE,
            angle_tolerance: DEFAULT_ANGLE_TOLERANCE,
        }
    }
}

impl VectorConfig {
    /// Builder method: Round dot products to `scale` decimal places
    pub fn with_dot_scale(mut self, scale: u32) -> Self {
        self.dot_scale = Some(scale);
        self
    }

    /// Builder method: Keep dot products exact
    pub fn without_dot_rounding(mut self) -> Self {
        self.dot_scale = None;
        self
    }

    /// Builder method: Set the zero-magnitude threshold
    pub fn with_zero_tolerance(mut self, tolerance: Decimal) -> Self {
        self.zero_tolerance = tolerance;
        self
    }

    /// Builder method: Set the orthogonality threshold
    pub fn with_orthogonal_tolerance(mut self, tolerance: Decimal) -> Self {
        self.orthogonal_tolerance = tolerance;
        self
    }

    /// Builder method: Set the parallel-angle ε (radians)
    pub fn with_angle_tolerance(mut self, tolerance: f64) -> Self {
        self.angle_tolerance = tolerance;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> VectorResult<()> {
        if let Some(scale) = self.dot_scale {
            if scale > MAX_DOT_SCALE {
                return Err(VectorError::InvalidConfig(format!(
                    "dot scale {} exceeds maximum of {}",
                    scale, MAX_DOT_SCALE
                )));
            }
        }

        if self.zero_tolerance.is_sign_negative() {
            return Err(VectorError::InvalidConfig(
                "zero tolerance cannot be negative".to_string(),
            ));
        }

        if self.orthogonal_tolerance.is_sign_negative() {
            return Err(VectorError::InvalidConfig(
                "orthogonal tolerance cannot be negative".to_string(),
            ));
        }

        if !self.angle_tolerance.is_finite() || self.angle_tolerance < 0.0 {
            return Err(VectorError::InvalidConfig(
                "angle tolerance must be a finite, non-negative number".to_string(),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl VectorConfig {
    /// Dot products are not rounded; tolerances keep their defaults.
    pub fn exact() -> Self {
        Self::default().without_dot_rounding()
    }
}
