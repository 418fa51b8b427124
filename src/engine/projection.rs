// ============================================================================
// Projection
// Decomposition of a vector along and across a basis direction
// ============================================================================

use super::algebra::{relabel_zero_vector, VectorAlgebra};
use crate::domain::Vector;
use crate::numeric::{VectorError, VectorResult};

impl VectorAlgebra {
    /// Component of `v` along `basis`: `dot(v, unit(basis)) * unit(basis)`.
    ///
    /// # Errors
    /// - `DimensionMismatch` if dimensions differ
    /// - `NoUniqueParallelComponent` if `basis` is the zero vector
    pub fn parallel_projection(&self, v: &Vector, basis: &Vector) -> VectorResult<Vector> {
        v.ensure_same_dimension(basis)?;
        let unit = basis
            .normalize()
            .map_err(|e| relabel_zero_vector(e, VectorError::NoUniqueParallelComponent))?;
        let coefficient = self.dot(v, &unit)?;
        unit.scale_by(coefficient)
    }

    /// Component of `v` perpendicular to `basis`: `v - parallel_projection`.
    ///
    /// # Errors
    /// - `DimensionMismatch` if dimensions differ
    /// - `NoUniqueOrthogonalComponent` if `basis` is the zero vector
    pub fn orthogonal_projection(&self, v: &Vector, basis: &Vector) -> VectorResult<Vector> {
        let parallel = self
            .parallel_projection(v, basis)
            .map_err(|e| match e {
                VectorError::ZeroVector | VectorError::NoUniqueParallelComponent => {
                    VectorError::NoUniqueOrthogonalComponent
                },
                other => other,
            })?;
        v.subtract(&parallel)
    }

    /// `(parallel_projection, orthogonal_projection)` of `v` onto `basis`.
    ///
    /// A zero basis fails with `NoUniqueParallelComponent`, the parallel
    /// step running first.
    pub fn component_vectors(&self, v: &Vector, basis: &Vector) -> VectorResult<(Vector, Vector)> {
        let parallel = self.parallel_projection(v, basis)?;
        let orthogonal = v.subtract(&parallel)?;
        Ok((parallel, orthogonal))
    }
}

impl Vector {
    pub fn parallel_projection(&self, basis: &Vector) -> VectorResult<Vector> {
        VectorAlgebra::standard().parallel_projection(self, basis)
    }

    pub fn orthogonal_projection(&self, basis: &Vector) -> VectorResult<Vector> {
        VectorAlgebra::standard().orthogonal_projection(self, basis)
    }

    pub fn component_vectors(&self, basis: &Vector) -> VectorResult<(Vector, Vector)> {
        VectorAlgebra::standard().component_vectors(self, basis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn v(coords: &[f64]) -> Vector {
        Vector::new(coords.iter().copied()).unwrap()
    }

    fn assert_close(actual: &Vector, expected: &[f64]) {
        assert_eq!(actual.dimension(), expected.len());
        let expected = v(expected);
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((*a - *e).abs() < Decimal::new(1, 3), "{} vs {}", actual, expected);
        }
    }

    #[test]
    fn test_parallel_projection() {
        let projection = v(&[3.039, 1.879])
            .parallel_projection(&v(&[0.825, 2.036]))
            .unwrap();
        assert_close(&projection, &[1.0827, 2.6720]);
    }

    #[test]
    fn test_orthogonal_projection() {
        let projection = v(&[-9.88, -3.264, -8.159])
            .orthogonal_projection(&v(&[-2.155, -9.353, -9.473]))
            .unwrap();
        assert_close(&projection, &[-8.3501, 3.3761, -1.4337]);
    }

    #[test]
    fn test_component_vectors_4d() {
        let (parallel, orthogonal) = v(&[3.009, -6.172, 3.692, -2.51])
            .component_vectors(&v(&[6.404, -9.144, 2.759, 8.718]))
            .unwrap();
        assert_close(&parallel, &[1.9686, -2.8109, 0.8481, 2.6800]);
        assert_close(&orthogonal, &[1.0404, -3.3611, 2.8439, -5.1900]);
    }

    #[test]
    fn test_components_recompose() {
        let vector = v(&[3.009, -6.172, 3.692, -2.51]);
        let basis = v(&[6.404, -9.144, 2.759, 8.718]);
        let (parallel, orthogonal) = vector.component_vectors(&basis).unwrap();
        let recomposed = parallel.add(&orthogonal).unwrap();
        for (r, x) in recomposed.iter().zip(vector.iter()) {
            assert!((*r - *x).abs() < Decimal::new(1, 20));
        }
    }

    #[test]
    fn test_projection_onto_tiny_basis() {
        let vector = v(&[1.0, 1.0]);
        let basis = Vector::new(["0.000000000000001", "0.000000000000001"]).unwrap();

        let parallel = vector.parallel_projection(&basis).unwrap();
        assert_close(&parallel, &[1.0, 1.0]);

        let orthogonal = vector.orthogonal_projection(&basis).unwrap();
        assert_close(&orthogonal, &[0.0, 0.0]);
    }

    #[test]
    fn test_zero_basis_relabels_errors() {
        let vector = v(&[1.0, 2.0]);
        let zero = Vector::zero(2).unwrap();

        assert_eq!(
            vector.parallel_projection(&zero),
            Err(VectorError::NoUniqueParallelComponent)
        );
        assert_eq!(
            vector.orthogonal_projection(&zero),
            Err(VectorError::NoUniqueOrthogonalComponent)
        );
        assert_eq!(
            vector.component_vectors(&zero),
            Err(VectorError::NoUniqueParallelComponent)
        );
    }

    #[test]
    fn test_projection_dimension_mismatch() {
        let vector = v(&[1.0, 2.0]);
        let basis = v(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            vector.orthogonal_projection(&basis),
            Err(VectorError::DimensionMismatch { .. })
        ));
    }
}
