// ============================================================================
// Orientation Checks
// Orthogonality, parallelism and the combined classification
// ============================================================================

use super::algebra::VectorAlgebra;
use crate::domain::{Relation, Vector, VectorConfig};
use crate::numeric::VectorResult;
use rust_decimal::Decimal;
use std::f64::consts::PI;

impl VectorAlgebra {
    /// True when |dot(a, b)| is below `config.orthogonal_tolerance`.
    ///
    /// Uses the rounded dot product, so with the default 3 places any
    /// |dot| < 0.0005 counts as orthogonal.
    pub fn is_orthogonal(&self, a: &Vector, b: &Vector) -> VectorResult<bool> {
        Ok(self.dot(a, b)?.abs() < self.config().orthogonal_tolerance)
    }

    /// True when either vector is zero, or the angle between them is within
    /// `config.angle_tolerance` of 0 or π.
    ///
    /// # Errors
    /// `DimensionMismatch` if dimensions differ, checked before the zero test.
    pub fn is_parallel(&self, a: &Vector, b: &Vector) -> VectorResult<bool> {
        a.ensure_same_dimension(b)?;
        if self.is_zero(a) || self.is_zero(b) {
            return Ok(true);
        }

        let angle = self.angle(a, b)?;
        let epsilon = self.config().angle_tolerance;
        Ok(angle.abs() < epsilon || (angle - PI).abs() < epsilon)
    }

    /// Combine [`is_parallel`](Self::is_parallel) and
    /// [`is_orthogonal`](Self::is_orthogonal).
    pub fn classify(&self, a: &Vector, b: &Vector) -> VectorResult<Relation> {
        let parallel = self.is_parallel(a, b)?;
        let orthogonal = self.is_orthogonal(a, b)?;
        Ok(Relation::from_checks(parallel, orthogonal))
    }
}

impl Vector {
    /// Orthogonality with the default tolerance (1e-10).
    pub fn is_orthogonal(&self, other: &Vector) -> VectorResult<bool> {
        VectorAlgebra::standard().is_orthogonal(self, other)
    }

    /// Orthogonality with an explicit tolerance on the rounded dot product.
    pub fn is_orthogonal_within(&self, other: &Vector, tolerance: Decimal) -> VectorResult<bool> {
        VectorAlgebra::new(VectorConfig::default().with_orthogonal_tolerance(tolerance))
            .is_orthogonal(self, other)
    }

    pub fn is_parallel(&self, other: &Vector) -> VectorResult<bool> {
        VectorAlgebra::standard().is_parallel(self, other)
    }

    pub fn classify(&self, other: &Vector) -> VectorResult<Relation> {
        VectorAlgebra::standard().classify(self, other)
    }
}
