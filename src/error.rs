//! The error type shared by every fallible conversion.

use crate::{Day, JALAALI_YEAR_MAX, JALAALI_YEAR_MIN, Month, Year};

/// Why a conversion could not produce a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// The Jalaali year lies outside the break-point table.
    #[error(
        "invalid Jalaali year {0} (supported years are {min} to {max})",
        min = JALAALI_YEAR_MIN,
        max = JALAALI_YEAR_MAX
    )]
    InvalidJalaaliYear(Year),
    /// A floor division or modulo was asked to divide by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The quotient does not fit the integer type (`i64::MIN / -1`).
    #[error("integer overflow in floor division")]
    Overflow,
    /// A month number outside 1 to 12.
    #[error("invalid month {0}")]
    InvalidMonth(Month),
    /// The day does not exist in the Jalaali calendar.
    #[error("invalid Jalaali date {0}/{1}/{2}")]
    InvalidJalaaliDate(Year, Month, Day),
    /// The day does not exist in the proleptic Gregorian calendar.
    #[error("invalid Gregorian date {0}-{1:02}-{2:02}")]
    InvalidGregorianDate(Year, Month, Day),
}
