// ============================================================================
// Vector Algebra
// Configured entry point for rounding- and tolerance-dependent operations
// ============================================================================

use crate::domain::{Vector, VectorConfig};
use crate::numeric::{round_to_scale, to_f64, VectorError, VectorResult};
use rust_decimal::Decimal;

/// Unit an angle is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// Vector operations bound to a [`VectorConfig`].
///
/// The config replaces any global precision setting: two algebras with
/// different configs can be used side by side.
///
/// # Example
/// ```
/// use vector_algebra::prelude::*;
///
/// let algebra = VectorAlgebra::new(VectorConfig::exact());
/// let a = Vector::new([7.887, 4.138])?;
/// let b = Vector::new([-8.802, 6.776])?;
/// assert_eq!(algebra.dot(&a, &b)?.to_string(), "-41.382286");
/// # Ok::<(), VectorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VectorAlgebra {
    config: VectorConfig,
}

impl VectorAlgebra {
    /// Create an algebra from a trusted configuration.
    ///
    /// Use [`create_from_config`] when the configuration comes from outside.
    pub fn new(config: VectorConfig) -> Self {
        Self { config }
    }

    /// Algebra with the default configuration (dot rounded to 3 places,
    /// tolerances of 1e-10).
    pub fn standard() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &VectorConfig {
        &self.config
    }

    // ========================================================================
    // Dot Product & Angle
    // ========================================================================

    /// Sum of element-wise products, rounded to `config.dot_scale` places.
    ///
    /// # Errors
    /// `DimensionMismatch` if dimensions differ.
    pub fn dot(&self, a: &Vector, b: &Vector) -> VectorResult<Decimal> {
        let exact = a.dot_exact(b)?;
        Ok(match self.config.dot_scale {
            Some(scale) => round_to_scale(exact, scale),
            None => exact,
        })
    }

    /// Angle between `a` and `b`: `acos(dot(unit(a), unit(b)))`.
    ///
    /// The dot product is rounded per the config before `acos`, then clamped
    /// to [-1, 1].
    ///
    /// # Errors
    /// - `DimensionMismatch` if dimensions differ
    /// - `AngleUndefined` if either operand is the zero vector
    pub fn angle_in(&self, a: &Vector, b: &Vector, unit: AngleUnit) -> VectorResult<f64> {
        a.ensure_same_dimension(b)?;
        let unit_a = a
            .normalize()
            .map_err(|e| relabel_zero_vector(e, VectorError::AngleUndefined))?;
        let unit_b = b
            .normalize()
            .map_err(|e| relabel_zero_vector(e, VectorError::AngleUndefined))?;

        let cosine = to_f64(self.dot(&unit_a, &unit_b)?)?.clamp(-1.0, 1.0);
        let radians = cosine.acos();

        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        })
    }

    /// Angle in radians.
    pub fn angle(&self, a: &Vector, b: &Vector) -> VectorResult<f64> {
        self.angle_in(a, b, AngleUnit::Radians)
    }

    /// Angle in degrees.
    pub fn angle_degrees(&self, a: &Vector, b: &Vector) -> VectorResult<f64> {
        self.angle_in(a, b, AngleUnit::Degrees)
    }

    /// True when the magnitude is below `config.zero_tolerance`.
    pub fn is_zero(&self, v: &Vector) -> bool {
        v.is_zero_within(self.config.zero_tolerance)
    }
}

/// Validate `config` and build an algebra from it.
///
/// # Example
/// ```
/// use vector_algebra::prelude::*;
///
/// let algebra = create_from_config(VectorConfig::default().with_dot_scale(6)).unwrap();
/// assert_eq!(algebra.config().dot_scale, Some(6));
/// ```
pub fn create_from_config(config: VectorConfig) -> VectorResult<VectorAlgebra> {
    config.validate()?;
    Ok(VectorAlgebra::new(config))
}

/// Replace a `ZeroVector` failure with the caller's error; other errors pass
/// through unchanged.
pub(crate) fn relabel_zero_vector(err: VectorError, to: VectorError) -> VectorError {
    match err {
        VectorError::ZeroVector => to,
        other => other,
    }
}

// ============================================================================
// Vector Shorthands (standard configuration)
// ============================================================================

impl Vector {
    /// Dot product rounded to 3 decimal places.
    pub fn dot(&self, other: &Vector) -> VectorResult<Decimal> {
        VectorAlgebra::standard().dot(self, other)
    }

    /// Angle to `other` in radians.
    pub fn angle(&self, other: &Vector) -> VectorResult<f64> {
        VectorAlgebra::standard().angle(self, other)
    }

    /// Angle to `other` in degrees.
    pub fn angle_degrees(&self, other: &Vector) -> VectorResult<f64> {
        VectorAlgebra::standard().angle_degrees(self, other)
    }

    /// Magnitude below 1e-10.
    pub fn is_zero(&self) -> bool {
        VectorAlgebra::standard().is_zero(self)
    }
}
