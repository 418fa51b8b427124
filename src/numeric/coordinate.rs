// ============================================================================
// Coordinates
// Conversion of numeric-like input into decimal coordinates, plus the
// checked decimal helpers the vector operations are built on
// ============================================================================

use super::errors::{VectorError, VectorResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use std::str::FromStr;

/// Coordinate scalar type: a 96-bit decimal with 28 significant digits.
pub type Coordinate = Decimal;

/// Values that can become a vector coordinate.
///
/// On failure the implementation returns the raw text of the offending
/// value; the caller attaches position information.
///
/// # Example
/// ```
/// use vector_algebra::numeric::IntoCoordinate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(8.218_f64.into_coordinate(), Ok(Decimal::new(8218, 3)));
/// assert_eq!("-0.5".into_coordinate(), Ok(Decimal::new(-5, 1)));
/// assert!("abc".into_coordinate().is_err());
/// ```
pub trait IntoCoordinate {
    fn into_coordinate(self) -> Result<Coordinate, String>;
}

macro_rules! impl_into_coordinate_int {
    ($($t:ty),*) => {
        $(
            impl IntoCoordinate for $t {
                #[inline]
                fn into_coordinate(self) -> Result<Coordinate, String> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_coordinate_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl IntoCoordinate for Decimal {
    #[inline]
    fn into_coordinate(self) -> Result<Coordinate, String> {
        Ok(self)
    }
}

impl IntoCoordinate for &Decimal {
    #[inline]
    fn into_coordinate(self) -> Result<Coordinate, String> {
        Ok(*self)
    }
}

impl IntoCoordinate for f64 {
    /// Converts through the shortest round-trip representation, so the
    /// literal `8.218` becomes exactly `8.218` rather than its binary
    /// expansion.
    fn into_coordinate(self) -> Result<Coordinate, String> {
        if !self.is_finite() {
            return Err(self.to_string());
        }
        Decimal::from_str(&self.to_string())
            .ok()
            .or_else(|| Decimal::from_f64(self))
            .ok_or_else(|| self.to_string())
    }
}

impl IntoCoordinate for f32 {
    fn into_coordinate(self) -> Result<Coordinate, String> {
        if !self.is_finite() {
            return Err(self.to_string());
        }
        Decimal::from_str(&self.to_string())
            .ok()
            .or_else(|| Decimal::from_f32(self))
            .ok_or_else(|| self.to_string())
    }
}

impl IntoCoordinate for &str {
    /// Accepts plain (`-1.25`) and scientific (`1.5e-3`) notation.
    fn into_coordinate(self) -> Result<Coordinate, String> {
        parse_decimal(self).ok_or_else(|| self.to_string())
    }
}

impl IntoCoordinate for String {
    fn into_coordinate(self) -> Result<Coordinate, String> {
        parse_decimal(&self).ok_or(self)
    }
}

impl IntoCoordinate for &String {
    fn into_coordinate(self) -> Result<Coordinate, String> {
        self.as_str().into_coordinate()
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}

// ============================================================================
// Checked Decimal Helpers
// ============================================================================

#[inline]
pub(crate) fn overflow(op: &'static str) -> VectorError {
    tracing::debug!(op, "decimal overflow");
    VectorError::Overflow
}

/// Sum of element-wise products, without rounding.
///
/// Callers guarantee equal lengths.
pub(crate) fn checked_dot(a: &[Decimal], b: &[Decimal]) -> VectorResult<Decimal> {
    a.iter().zip(b).try_fold(Decimal::ZERO, |acc, (x, y)| {
        x.checked_mul(*y)
            .and_then(|p| acc.checked_add(p))
            .ok_or_else(|| overflow("dot"))
    })
}

/// Round to `scale` decimal places, midpoint to even.
#[inline]
pub fn round_to_scale(value: Decimal, scale: u32) -> Decimal {
    value.round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven)
}

/// Square root of a non-negative decimal at working precision.
pub fn decimal_sqrt(value: Decimal) -> VectorResult<Decimal> {
    value.sqrt().ok_or_else(|| {
        VectorError::InvalidArgument(format!("square root of negative value {}", value))
    })
}

/// Lossy conversion for the trigonometric functions decimals lack.
#[inline]
pub fn to_f64(value: Decimal) -> VectorResult<f64> {
    value.to_f64().ok_or_else(|| overflow("to_f64"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_conversion() {
        assert_eq!(42i32.into_coordinate(), Ok(Decimal::from(42)));
        assert_eq!((-7i64).into_coordinate(), Ok(Decimal::from(-7)));
        assert_eq!(0u8.into_coordinate(), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_float_conversion_is_shortest() {
        let x = 8.218f64.into_coordinate().unwrap();
        assert_eq!(x, Decimal::new(8218, 3));
        assert_eq!(x.to_string(), "8.218");

        let y = (-9.341f64).into_coordinate().unwrap();
        assert_eq!(y, Decimal::new(-9341, 3));
    }

    #[test]
    fn test_non_finite_floats_rejected() {
        assert_eq!(f64::NAN.into_coordinate(), Err("NaN".to_string()));
        assert_eq!(f64::INFINITY.into_coordinate(), Err("inf".to_string()));
        assert!(f32::NEG_INFINITY.into_coordinate().is_err());
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!("123.456".into_coordinate(), Ok(Decimal::new(123456, 3)));
        assert_eq!(" -0.001 ".into_coordinate(), Ok(Decimal::new(-1, 3)));
        assert_eq!("1.5e-3".into_coordinate(), Ok(Decimal::new(15, 4)));
        assert_eq!(
            String::from("2.5").into_coordinate(),
            Ok(Decimal::new(25, 1))
        );
    }

    #[test]
    fn test_string_conversion_invalid() {
        assert_eq!(
            "not_a_number".into_coordinate(),
            Err("not_a_number".to_string())
        );
        assert!("".into_coordinate().is_err());
        assert!("1.2.3".into_coordinate().is_err());
    }

    #[test]
    fn test_round_to_scale_is_bankers() {
        assert_eq!(
            round_to_scale(Decimal::new(-41382286, 6), 3),
            Decimal::new(-41382, 3)
        );
        assert_eq!(round_to_scale(Decimal::new(12345, 4), 3), Decimal::new(1234, 3));
        assert_eq!(round_to_scale(Decimal::new(12355, 4), 3), Decimal::new(1236, 3));
    }

    #[test]
    fn test_checked_dot() {
        let a = [Decimal::from(1), Decimal::from(2), Decimal::from(3)];
        let b = [Decimal::from(4), Decimal::from(-5), Decimal::from(6)];
        assert_eq!(checked_dot(&a, &b).unwrap(), Decimal::from(12));
    }

    #[test]
    fn test_checked_dot_overflow() {
        let a = [Decimal::MAX, Decimal::MAX];
        assert_eq!(checked_dot(&a, &a), Err(VectorError::Overflow));
    }

    #[test]
    fn test_decimal_sqrt() {
        let root = decimal_sqrt(Decimal::from(16)).unwrap();
        assert!((root - Decimal::from(4)).abs() < Decimal::new(1, 20));
        assert_eq!(decimal_sqrt(Decimal::ZERO).unwrap(), Decimal::ZERO);
        assert!(decimal_sqrt(Decimal::from(-1)).is_err());
    }
}
