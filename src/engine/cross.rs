// ============================================================================
// Cross Product & Areas
// Defined for 3D vectors; 2D operands are lifted into the z = 0 plane
// ============================================================================

use crate::domain::Vector;
use crate::numeric::{overflow, VectorError, VectorResult};
use rust_decimal::Decimal;

impl Vector {
    /// Cross product of two 3D vectors, or of two 2D vectors treated as
    /// 3D with a zero third coordinate.
    ///
    /// For 2D operands the result is 3D with zero x and y; its z is the
    /// scalar 2D cross product.
    ///
    /// # Errors
    /// `UnsupportedDimension` for any other pair of dimensions, including
    /// mixed 2D/3D operands.
    ///
    /// # Example
    /// ```
    /// use vector_algebra::prelude::*;
    ///
    /// let x = Vector::new([1, 0, 0])?;
    /// let y = Vector::new([0, 1, 0])?;
    /// assert_eq!(x.cross(&y)?, Vector::new([0, 0, 1])?);
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn cross(&self, other: &Vector) -> VectorResult<Vector> {
        let (a, b) = match (self.coordinates(), other.coordinates()) {
            ([ax, ay, az], [bx, by, bz]) => ([*ax, *ay, *az], [*bx, *by, *bz]),
            ([ax, ay], [bx, by]) => {
                tracing::trace!("lifting 2D operands into 3D for cross product");
                (
                    [*ax, *ay, Decimal::ZERO],
                    [*bx, *by, Decimal::ZERO],
                )
            },
            _ => {
                tracing::debug!(
                    left = self.dimension(),
                    right = other.dimension(),
                    "cross product only defined for 2D or 3D vectors"
                );
                return Err(VectorError::UnsupportedDimension {
                    left: self.dimension(),
                    right: other.dimension(),
                });
            },
        };

        let [ax, ay, az] = a;
        let [bx, by, bz] = b;
        let coordinates = [
            difference_of_products(ay, bz, by, az)?,
            -difference_of_products(ax, bz, bx, az)?,
            difference_of_products(ax, by, bx, ay)?,
        ];
        Vector::new(coordinates)
    }

    /// Area of the parallelogram spanned by the two vectors: `|a x b|`.
    pub fn parallelogram_area(&self, other: &Vector) -> VectorResult<Decimal> {
        self.cross(other)?.magnitude()
    }

    /// Half the parallelogram area.
    pub fn triangle_area(&self, other: &Vector) -> VectorResult<Decimal> {
        self.parallelogram_area(other)?
            .checked_div(Decimal::TWO)
            .ok_or_else(|| overflow("triangle_area"))
    }
}

/// `p * q - r * s`, checked.
fn difference_of_products(p: Decimal, q: Decimal, r: Decimal, s: Decimal) -> VectorResult<Decimal> {
    let left = p.checked_mul(q).ok_or_else(|| overflow("cross"))?;
    let right = r.checked_mul(s).ok_or_else(|| overflow("cross"))?;
    left.checked_sub(right).ok_or_else(|| overflow("cross"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(coords: &[f64]) -> Vector {
        Vector::new(coords.iter().copied()).unwrap()
    }

    #[test]
    fn test_cross_3d() {
        let a = v(&[8.462, 7.893, -8.187]);
        let b = v(&[6.984, -5.975, 4.778]);
        assert_eq!(
            a.cross(&b).unwrap(),
            Vector::new(["-11.204571", "-97.609444", "-105.685162"]).unwrap()
        );
    }

    #[test]
    fn test_cross_is_anticommutative() {
        let a = v(&[8.462, 7.893, -8.187]);
        let b = v(&[6.984, -5.975, 4.778]);
        let ab = a.cross(&b).unwrap();
        let ba = b.cross(&a).unwrap();
        assert_eq!(ab, ba.scale(-1).unwrap());
    }

    #[test]
    fn test_cross_2d_lifts_both_operands() {
        let a = v(&[3.0, 1.0]);
        let b = v(&[1.0, 2.0]);
        let c = a.cross(&b).unwrap();
        assert_eq!(c.dimension(), 3);
        assert_eq!(c, Vector::new([0, 0, 5]).unwrap());
    }

    #[test]
    fn test_cross_of_parallel_vectors_is_zero() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[2.0, 4.0, 6.0]);
        assert_eq!(a.cross(&b).unwrap().magnitude().unwrap(), Decimal::ZERO);
        assert_eq!(a.parallelogram_area(&b).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_cross_unsupported_dimensions() {
        let one = v(&[1.0]);
        let two = v(&[1.0, 2.0]);
        let three = v(&[1.0, 2.0, 3.0]);
        let four = v(&[1.0, 2.0, 3.0, 4.0]);

        assert_eq!(
            one.cross(&one),
            Err(VectorError::UnsupportedDimension { left: 1, right: 1 })
        );
        assert_eq!(
            four.cross(&four),
            Err(VectorError::UnsupportedDimension { left: 4, right: 4 })
        );
        assert_eq!(
            two.cross(&three),
            Err(VectorError::UnsupportedDimension { left: 2, right: 3 })
        );
    }

    #[test]
    fn test_parallelogram_area() {
        let a = v(&[-8.987, -9.838, 5.031]);
        let b = v(&[-4.268, -1.861, -8.866]);
        let area = a.parallelogram_area(&b).unwrap();
        assert!((area - Decimal::new(142122, 3)).abs() < Decimal::new(1, 3));
    }

    #[test]
    fn test_triangle_area() {
        let a = v(&[1.5, 9.547, 3.691]);
        let b = v(&[-6.007, 0.124, 5.772]);
        let area = a.triangle_area(&b).unwrap();
        assert!((area - Decimal::new(42565, 3)).abs() < Decimal::new(1, 3));
    }
}
