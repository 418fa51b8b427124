// ============================================================================
// Vector Domain Model
// Immutable n-dimensional vector of decimal coordinates
// ============================================================================

use crate::numeric::{
    decimal_sqrt, overflow, Coordinate, IntoCoordinate, VectorError, VectorResult,
};
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::fmt;
use std::ops::{Index, Neg};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coordinate storage; 2D, 3D and 4D vectors stay inline.
pub(crate) type Coordinates = SmallVec<[Coordinate; 4]>;

/// An immutable vector in n-dimensional space.
///
/// Every operation returns a new `Vector` (or a scalar); the coordinate
/// sequence is never mutated after construction. Equality is structural:
/// two vectors are equal iff they have the same dimension and equal
/// coordinates (by decimal value, so `7.23 == 7.230`).
///
/// # Example
/// ```
/// use vector_algebra::prelude::*;
///
/// let a = Vector::new([8.218, -9.341])?;
/// let b = Vector::new([-1.129, 2.111])?;
/// assert_eq!(a.add(&b)?, Vector::new(["7.089", "-7.230"])?);
/// # Ok::<(), VectorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Decimal>", into = "Vec<Decimal>")
)]
pub struct Vector {
    coordinates: Coordinates,
}

impl Vector {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a vector from any sequence of numeric-like values.
    ///
    /// # Errors
    /// - `InvalidArgument` if the sequence is empty
    /// - `InvalidArgument` naming the index and text of the first element
    ///   that is not a finite decimal number
    pub fn new<I>(coordinates: I) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: IntoCoordinate,
    {
        let coordinates = coordinates
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                value.into_coordinate().map_err(|raw| {
                    VectorError::InvalidArgument(format!(
                        "coordinate {} is not a decimal number: {}",
                        index, raw
                    ))
                })
            })
            .collect::<VectorResult<Coordinates>>()?;

        Self::from_coordinates(coordinates)
    }

    /// The zero vector of the given dimension.
    pub fn zero(dimension: usize) -> VectorResult<Self> {
        Self::from_coordinates(SmallVec::from_elem(Decimal::ZERO, dimension))
    }

    pub(crate) fn from_coordinates(coordinates: Coordinates) -> VectorResult<Self> {
        if coordinates.is_empty() {
            return Err(VectorError::empty_coordinates());
        }
        Ok(Self { coordinates })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The coordinate sequence, in component order.
    #[inline]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Number of coordinates (always at least 1).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.coordinates.iter()
    }

    /// Fails with `DimensionMismatch` unless both vectors have the same
    /// dimension.
    pub(crate) fn ensure_same_dimension(&self, other: &Vector) -> VectorResult<()> {
        if self.dimension() == other.dimension() {
            Ok(())
        } else {
            tracing::debug!(
                expected = self.dimension(),
                found = other.dimension(),
                "dimension mismatch"
            );
            Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            })
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Element-wise sum.
    ///
    /// # Errors
    /// `DimensionMismatch` if dimensions differ, `Overflow` if a coordinate
    /// leaves the decimal range.
    pub fn add(&self, other: &Vector) -> VectorResult<Vector> {
        self.zip_with(other, "add", Decimal::checked_add)
    }

    /// Element-wise difference `self - other`.
    pub fn subtract(&self, other: &Vector) -> VectorResult<Vector> {
        self.zip_with(other, "subtract", Decimal::checked_sub)
    }

    /// Multiply every coordinate by `factor`.
    ///
    /// A factor of zero yields the zero vector of the same dimension.
    pub fn scale<C: IntoCoordinate>(&self, factor: C) -> VectorResult<Vector> {
        let factor = factor.into_coordinate().map_err(|raw| {
            VectorError::InvalidArgument(format!("scale factor is not a decimal number: {}", raw))
        })?;
        self.scale_by(factor)
    }

    pub(crate) fn scale_by(&self, factor: Decimal) -> VectorResult<Vector> {
        let coordinates = self
            .coordinates
            .iter()
            .map(|x| x.checked_mul(factor).ok_or_else(|| overflow("scale")))
            .collect::<VectorResult<Coordinates>>()?;
        Ok(Vector { coordinates })
    }

    fn zip_with(
        &self,
        other: &Vector,
        op: &'static str,
        f: fn(Decimal, Decimal) -> Option<Decimal>,
    ) -> VectorResult<Vector> {
        self.ensure_same_dimension(other)?;
        let coordinates = self
            .coordinates
            .iter()
            .zip(&other.coordinates)
            .map(|(x, y)| f(*x, *y).ok_or_else(|| overflow(op)))
            .collect::<VectorResult<Coordinates>>()?;
        Ok(Vector { coordinates })
    }

    // ========================================================================
    // Magnitude & Normalization
    // ========================================================================

    /// Euclidean length: `sqrt(sum of squares)` at working precision.
    ///
    /// Coordinates are divided by the largest |xᵢ| before squaring
    /// (`m · sqrt(Σ(xᵢ/m)²)`), so squares neither overflow nor round to
    /// zero while the length itself is representable.
    ///
    /// # Errors
    /// `Overflow` only if the length exceeds the decimal range.
    pub fn magnitude(&self) -> VectorResult<Decimal> {
        let largest = self
            .coordinates
            .iter()
            .map(|x| x.abs())
            .max()
            .unwrap_or(Decimal::ZERO);
        if largest.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let ratios = self.divided_by(largest, "magnitude")?;
        let sum_of_squares = crate::numeric::checked_dot(&ratios, &ratios)?;
        largest
            .checked_mul(decimal_sqrt(sum_of_squares)?)
            .ok_or_else(|| overflow("magnitude"))
    }

    /// Unit vector in the same direction.
    ///
    /// # Errors
    /// `ZeroVector` if the magnitude is exactly zero.
    pub fn normalize(&self) -> VectorResult<Vector> {
        let magnitude = self.magnitude()?;
        if magnitude.is_zero() {
            tracing::debug!(dimension = self.dimension(), "cannot normalize the zero vector");
            return Err(VectorError::ZeroVector);
        }
        Ok(Vector {
            coordinates: self.divided_by(magnitude, "normalize")?,
        })
    }

    fn divided_by(&self, divisor: Decimal, op: &'static str) -> VectorResult<Coordinates> {
        self.coordinates
            .iter()
            .map(|x| x.checked_div(divisor).ok_or_else(|| overflow(op)))
            .collect()
    }

    /// True when the magnitude is below `tolerance`.
    ///
    /// A magnitude too large to represent is never zero.
    pub fn is_zero_within(&self, tolerance: Decimal) -> bool {
        self.magnitude().map(|m| m < tolerance).unwrap_or(false)
    }

    /// Exact sum of element-wise products, without display rounding.
    pub fn dot_exact(&self, other: &Vector) -> VectorResult<Decimal> {
        self.ensure_same_dimension(other)?;
        crate::numeric::checked_dot(&self.coordinates, &other.coordinates)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Index<usize> for Vector {
    type Output = Coordinate;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Vector {
            coordinates: self.coordinates.iter().map(|x| -*x).collect(),
        }
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Decimal>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<Decimal>) -> Result<Self, Self::Error> {
        Self::from_coordinates(SmallVec::from_vec(coordinates))
    }
}

impl From<Vector> for Vec<Decimal> {
    fn from(vector: Vector) -> Self {
        vector.coordinates.into_vec()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, x) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, ")")
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Vector {
    type Err = VectorError;

    /// Parse a comma separated coordinate list.
    ///
    /// # Examples
    /// - "1, 2.5, -3"
    /// - "(1, 2.5, -3)" or "[1, 2.5, -3]"
    /// - "Vector: (1, 2.5, -3)" (the `Display` form)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("Vector:").map(str::trim).unwrap_or(s);

        let body = match (s.chars().next(), s.chars().last()) {
            (Some('('), Some(')')) | (Some('['), Some(']')) if s.len() >= 2 => {
                &s[1..s.len() - 1]
            },
            (Some('(' | '['), _) | (_, Some(')' | ']')) => {
                return Err(VectorError::not_a_sequence());
            },
            _ => s,
        };

        if body.trim().is_empty() {
            return Err(VectorError::empty_coordinates());
        }
        if body.contains(['(', ')', '[', ']']) {
            return Err(VectorError::not_a_sequence());
        }

        Vector::new(body.split(',').map(str::trim))
    }
}

// ============================================================================
// Tests
// ============================================================================
