//! Divisibility test for `multipleOf`.

use crate::number::{DecimalParts, Numeric};

/// Returns true if `value` is an exact multiple of `divisor`.
///
/// Both sides are taken as exact decimals (integers as written, floats from
/// their shortest round-trip text), so `0.3` is a multiple of `0.1` and
/// `1e30` is not a multiple of `7`. The remainder is computed on the
/// mantissas after aligning the exponents, without ever materialising the
/// aligned values.
pub(crate) fn is_multiple_of(value: Numeric, divisor: Numeric) -> bool {
    let (Some(value), Some(divisor)) = (value.to_decimal_parts(), divisor.to_decimal_parts())
    else {
        return false;
    };
    if divisor.mantissa == 0 {
        return false;
    }
    if value.mantissa == 0 {
        return true;
    }

    if value.exponent >= divisor.exponent {
        shifted_remainder(value, divisor) == 0
    } else {
        // Divides only if the value mantissa is a multiple of
        // `divisor.mantissa * 10^shift`; a product past `u128` cannot be.
        let shift = divisor.exponent.abs_diff(value.exponent);
        10u128
            .checked_pow(shift)
            .and_then(|scale| scale.checked_mul(divisor.mantissa))
            .is_some_and(|scaled| value.mantissa % scaled == 0)
    }
}

/// `(value.mantissa * 10^(value.exponent - divisor.exponent)) % divisor.mantissa`
fn shifted_remainder(value: DecimalParts, divisor: DecimalParts) -> u128 {
    let modulus = divisor.mantissa;
    let mut remainder = value.mantissa % modulus;
    for _ in 0..value.exponent.abs_diff(divisor.exponent) {
        if remainder == 0 {
            break;
        }
        remainder = times_ten_mod(remainder, modulus);
    }
    remainder
}

/// `(remainder * 10) % modulus` for `remainder < modulus`, without overflow.
fn times_ten_mod(remainder: u128, modulus: u128) -> u128 {
    let mut acc = 0u128;
    for _ in 0..10 {
        acc = if acc >= modulus - remainder {
            acc - (modulus - remainder)
        } else {
            acc + remainder
        };
    }
    acc
}
