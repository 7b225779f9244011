//! Proleptic Gregorian dates to and from Julian Day Numbers.
//!
//! Closed-form integer formulas, tested good from 1 March -100100 (JDN -34839655) to a few million
//! years ahead. Neither direction validates its input: an out of range month or day still yields a
//! number derived from the formula. Use [`GregorianDate::new`] to reject such dates first.

use crate::{
    Day, GregorianDate, Jdn, Month, Year,
    utility::{div, rem, saturate_year},
};

/// Offset of the formulas' internal year count, keeping every operand non-negative.
const YEAR_SHIFT: i64 = 100100;

/// Calculate the JDN of a proleptic Gregorian date (years BC numbered 0, -1, -2, ...).
///
/// The result refers to noon of that day.
///
/// ```
/// assert_eq!(jalaali::gregorian_to_jdn(2000, 1, 1), 2451545);
/// assert_eq!(jalaali::gregorian_to_jdn(2024, 3, 20), 2460390);
/// ```
#[doc(alias = "g2d")]
pub const fn gregorian_to_jdn(gy: Year, gm: Month, gd: Day) -> Jdn {
    let (gy, gm, gd) = (gy as i64, gm as i64, gd as i64);
    // -1 for January and February, which count toward the previous March-based year; this
    // quotient truncates toward zero
    let shift = (gm - 8) / 6;

    let jdn = div((gy + shift + YEAR_SHIFT) * 1461, 4) + div(153 * rem(gm + 9, 12) + 2, 5) + gd
        - 34840408;
    jdn - div(div(gy + YEAR_SHIFT + shift, 100) * 3, 4) + 752
}

/// Calculate the proleptic Gregorian date of a JDN (valid from JDN -34839655 onward).
///
/// Years past the range of [`Year`] saturate.
///
/// ```
/// use jalaali::{GregorianDate, jdn_to_gregorian};
///
/// assert_eq!(jdn_to_gregorian(2451545), GregorianDate::from((2000, 1, 1)));
/// ```
#[doc(alias = "d2g")]
pub const fn jdn_to_gregorian(jdn: Jdn) -> GregorianDate {
    let (gy, gm, gd) = gregorian_parts(jdn);
    GregorianDate::from_ymd_unchecked(saturate_year(gy), gm as Month, gd as Day)
}

/// Largest JDN magnitude the formula handles without overflow; its year is far past [`Year`].
const JDN_LIMIT: Jdn = Jdn::MAX / 8;

/// Year, month and day of a JDN before narrowing the year to [`Year`].
pub(crate) const fn gregorian_parts(jdn: Jdn) -> (i64, i64, i64) {
    let jdn = if jdn > JDN_LIMIT {
        JDN_LIMIT
    } else if jdn < -JDN_LIMIT {
        -JDN_LIMIT
    } else {
        jdn
    };
    let mut j = 4 * jdn + 139361631;
    j += div(div(4 * jdn + 183187720, 146097) * 3, 4) * 4 - 3908;
    let i = div(rem(j, 1461), 4) * 5 + 308;

    let gd = div(rem(i, 153), 5) + 1;
    let gm = rem(div(i, 153), 12) + 1;
    // truncated like the shift of `gregorian_to_jdn`: +1 for January and February
    let gy = div(j, 1461) - YEAR_SHIFT + (8 - gm) / 6;

    (gy, gm, gd)
}

/// Is this a leap year in the proleptic Gregorian calendar.
pub const fn is_leap_gregorian_year(gy: Year) -> bool {
    let gy = gy as i64;
    rem(gy, 4) == 0 && (rem(gy, 100) != 0 || rem(gy, 400) == 0)
}
