//! Floor division and modulo.
//!
//! Every formula in this crate is written in terms of these two operations. Rust's `/` and `%`
//! truncate toward zero, which disagrees with the mathematical convention for negative operands
//! (`-1 / 4 == 0` while the floor is `-1`).

use crate::{Error, Year};

/// Floor division, `floor(a / b)`.
///
/// ```
/// assert_eq!(jalaali::div_floor(-1, 4), Ok(-1));
/// assert_eq!(jalaali::div_floor(7, -2), Ok(-4));
/// assert_eq!(jalaali::div_floor(1, 0), Err(jalaali::Error::DivisionByZero));
/// ```
#[doc(alias = "divFloor")]
pub const fn div_floor(a: i64, b: i64) -> Result<i64, Error> {
    match a.checked_div(b) {
        Some(q) if a % b != 0 && (a < 0) != (b < 0) => Ok(q - 1),
        Some(q) => Ok(q),
        None if b == 0 => Err(Error::DivisionByZero),
        None => Err(Error::Overflow),
    }
}

/// Floor modulo, `a - b * floor(a / b)`; the result takes the sign of `b`.
///
/// ```
/// assert_eq!(jalaali::mod_floor(-1, 4), Ok(3));
/// assert_eq!(jalaali::mod_floor(1, -4), Ok(-3));
/// ```
#[doc(alias = "modFloor")]
pub const fn mod_floor(a: i64, b: i64) -> Result<i64, Error> {
    match a.checked_rem(b) {
        Some(r) if r != 0 && (r < 0) != (b < 0) => Ok(r + b),
        Some(r) => Ok(r),
        None if b == 0 => Err(Error::DivisionByZero),
        // i64::MIN % -1
        None => Ok(0),
    }
}

/// [`div_floor`] for a non-zero constant divisor.
pub(crate) const fn div(a: i64, b: i64) -> i64 {
    let (q, r) = (a / b, a % b);
    if r != 0 && (r < 0) != (b < 0) { q - 1 } else { q }
}

/// [`mod_floor`] for a non-zero constant divisor.
pub(crate) const fn rem(a: i64, b: i64) -> i64 {
    let r = a % b;
    if r != 0 && (r < 0) != (b < 0) { r + b } else { r }
}

/// Narrow a year to [`Year`], saturating at its bounds.
pub(crate) const fn saturate_year(v: i64) -> Year {
    if v > Year::MAX as i64 {
        Year::MAX
    } else if v < Year::MIN as i64 {
        Year::MIN
    } else {
        v as Year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_rounds_toward_negative_infinity() {
        assert_eq!(div_floor(-1, 4), Ok(-1));
        assert_eq!(div_floor(-4, 4), Ok(-1));
        assert_eq!(div_floor(-5, 4), Ok(-2));
        assert_eq!(div_floor(5, 4), Ok(1));
        assert_eq!(div_floor(5, -4), Ok(-2));
        assert_eq!(div_floor(-5, -4), Ok(1));
        assert_eq!(div_floor(0, -3), Ok(0));
    }

    #[test]
    fn test_mod_takes_sign_of_divisor() {
        assert_eq!(mod_floor(-1, 4), Ok(3));
        assert_eq!(mod_floor(-8, 4), Ok(0));
        assert_eq!(mod_floor(5, -4), Ok(-3));
        assert_eq!(mod_floor(-5, -4), Ok(-1));
        assert_eq!(mod_floor(i64::MIN, -1), Ok(0));
    }

    #[test]
    fn test_zero_divisor() {
        assert_eq!(div_floor(10, 0), Err(Error::DivisionByZero));
        assert_eq!(mod_floor(10, 0), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_min_over_minus_one_overflows() {
        assert_eq!(div_floor(i64::MIN, -1), Err(Error::Overflow));
    }

    #[test]
    fn test_saturate_year() {
        assert_eq!(saturate_year(1403), 1403);
        assert_eq!(saturate_year(i64::MAX), Year::MAX);
        assert_eq!(saturate_year(i64::MIN), Year::MIN);
    }

    #[test]
    fn test_checked_and_constant_variants_agree() {
        for a in -100..=100 {
            for b in [-33, -7, -4, -1, 1, 4, 6, 7, 33, 146097] {
                assert_eq!(div_floor(a, b), Ok(div(a, b)), "div({}, {})", a, b);
                assert_eq!(mod_floor(a, b), Ok(rem(a, b)), "mod({}, {})", a, b);
                assert_eq!(a, b * div(a, b) + rem(a, b), "identity for ({}, {})", a, b);
            }
        }
    }
}
