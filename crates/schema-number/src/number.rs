//! Working numeric form of a JSON number
//!
//! A JSON number keeps the kind it was written in: integral literals stay
//! exact as [`Numeric::Int`], everything else is a [`Numeric::Float`].
//! Comparisons between two integers are exact; any comparison involving a
//! float goes through `f64`.

use std::cmp::Ordering;

use serde_json::Number;

/// A numeric candidate or bound, in the form used for comparisons.
#[derive(Debug, Clone, Copy)]
pub enum Numeric {
    /// Written without fraction or exponent (`4`, `-17`, `18446744073709551615`).
    Int(i128),
    /// Written with a fraction or exponent (`4.0`, `0.1`, `1e3`).
    Float(f64),
}

impl Numeric {
    /// Converts a JSON number, keeping its representation kind.
    pub fn from_json(number: &Number) -> Self {
        if let Some(i) = number.as_i64() {
            Self::Int(i128::from(i))
        } else if let Some(u) = number.as_u64() {
            Self::Int(i128::from(u))
        } else {
            Self::Float(number.as_f64().unwrap_or(f64::NAN))
        }
    }

    /// Returns true if the number was written as an integer literal.
    ///
    /// `4.0` is *not* integral here even though its value is whole.
    pub const fn is_integral_kind(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Converts to `f64`, possibly losing precision for very large integers.
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Int(i) => *i as f64,
            Self::Float(f) => *f,
        }
    }

    /// Splits the magnitude into an exact `mantissa * 10^exponent`.
    ///
    /// Floats are read from their shortest round-trip decimal text, so `0.1`
    /// becomes exactly `1 * 10^-1` rather than the binary approximation.
    /// Returns `None` for non-finite floats.
    pub fn to_decimal_parts(&self) -> Option<DecimalParts> {
        match self {
            Self::Int(i) => Some(DecimalParts::normalized(i.unsigned_abs(), 0)),
            Self::Float(f) if f.is_finite() => DecimalParts::parse_exp(&format!("{f:e}")),
            Self::Float(_) => None,
        }
    }
}

/// The magnitude of a number as `mantissa * 10^exponent`, with no trailing
/// zeros left in the mantissa. Zero is `0 * 10^0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalParts {
    /// Significant digits.
    pub mantissa: u128,
    /// Power of ten applied to the mantissa.
    pub exponent: i32,
}

impl DecimalParts {
    fn normalized(mut mantissa: u128, mut exponent: i32) -> Self {
        if mantissa == 0 {
            return Self {
                mantissa: 0,
                exponent: 0,
            };
        }
        while mantissa % 10 == 0 {
            mantissa /= 10;
            exponent += 1;
        }
        Self { mantissa, exponent }
    }

    /// Parses `LowerExp` output such as `-1.25e-3`.
    fn parse_exp(text: &str) -> Option<Self> {
        let text = text.trim_start_matches('-');
        let (digits, exponent) = text.split_once('e')?;
        let exponent: i32 = exponent.parse().ok()?;
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

        let mut mantissa: u128 = 0;
        for c in whole.chars().chain(fraction.chars()) {
            let digit = c.to_digit(10)?;
            mantissa = mantissa.checked_mul(10)?.checked_add(u128::from(digit))?;
        }
        let fraction_len = i32::try_from(fraction.len()).ok()?;
        Some(Self::normalized(mantissa, exponent.checked_sub(fraction_len)?))
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl From<&Number> for Numeric {
    fn from(number: &Number) -> Self {
        Self::from_json(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn numeric(value: serde_json::Value) -> Numeric {
        match value {
            serde_json::Value::Number(n) => Numeric::from_json(&n),
            other => panic!("not a number: {other}"),
        }
    }

    #[test]
    fn kind_follows_literal() {
        assert!(numeric(json!(4)).is_integral_kind());
        assert!(numeric(json!(u64::MAX)).is_integral_kind());
        assert!(!numeric(json!(4.0)).is_integral_kind());
    }

    #[test]
    fn integers_compare_exactly() {
        let a = numeric(json!(9_007_199_254_740_993_i64));
        let b = numeric(json!(9_007_199_254_740_992_i64));
        assert!(a > b);
        assert!(numeric(json!(u64::MAX)) > numeric(json!(i64::MAX)));
    }

    #[test]
    fn mixed_kinds_compare_by_value() {
        assert_eq!(numeric(json!(5)), numeric(json!(5.0)));
        assert!(numeric(json!(4.999)) < numeric(json!(5)));
        assert!(numeric(json!(5.0001)) > numeric(json!(5)));
    }

    fn parts(mantissa: u128, exponent: i32) -> Option<DecimalParts> {
        Some(DecimalParts { mantissa, exponent })
    }

    #[test]
    fn float_parts_follow_shortest_text() {
        assert_eq!(numeric(json!(0.1)).to_decimal_parts(), parts(1, -1));
        assert_eq!(numeric(json!(-19.99)).to_decimal_parts(), parts(1999, -2));
        assert_eq!(numeric(json!(1.5e300)).to_decimal_parts(), parts(15, 299));
        assert_eq!(numeric(json!(3e-30)).to_decimal_parts(), parts(3, -30));
        assert_eq!(numeric(json!(5e-324)).to_decimal_parts(), parts(5, -324));
    }

    #[test]
    fn trailing_zeros_move_to_exponent() {
        assert_eq!(numeric(json!(1200)).to_decimal_parts(), parts(12, 2));
        assert_eq!(numeric(json!(4.0)).to_decimal_parts(), parts(4, 0));
        assert_eq!(numeric(json!(0)).to_decimal_parts(), parts(0, 0));
        assert_eq!(numeric(json!(-0.0)).to_decimal_parts(), parts(0, 0));
    }

    #[test]
    fn large_integers_stay_exact() {
        assert_eq!(
            numeric(json!(u64::MAX)).to_decimal_parts(),
            parts(u128::from(u64::MAX), 0)
        );
        assert_eq!(Numeric::Int(i128::MIN).to_decimal_parts().map(|p| p.exponent), Some(0));
    }

    #[test]
    fn non_finite_has_no_parts() {
        assert_eq!(Numeric::Float(f64::NAN).to_decimal_parts(), None);
        assert_eq!(Numeric::Float(f64::INFINITY).to_decimal_parts(), None);
    }
}
