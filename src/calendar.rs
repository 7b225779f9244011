//! The Jalaali leap rule and conversions between Jalaali dates and JDNs.
//!
//! Leap years follow the astronomical timing of the vernal equinox, approximated by 33-year cycles
//! (8 leap years each, spaced 4 and once 5 apart) whose phase changes at the years of [`BREAKS`].

use crate::{
    BREAKS, CalendarInfo, Day, ESFAND_NON_LEAP_DOM, Error, FIRST_HALF_MAX_DOM, FIRST_HALF_MAX_DOY,
    GREGORIAN_YEAR_OFFSET, GregorianDate, JalaaliDate, Jdn, Month, SECOND_HALF_MAX_DOM, Year,
    gregorian_to_jdn, jdn_to_gregorian, julian_day,
    utility::{div, rem, saturate_year},
};

/// Find the leap state of a Jalaali year and the Gregorian day its Farvardin 1st falls on.
///
/// Supports years from -61 to 3177 and fails with [`Error::InvalidJalaaliYear`] otherwise.
///
/// ```
/// let info = jalaali::jalaali_calendar_info(1403).unwrap();
/// assert_eq!((info.leap_offset, info.gregorian_year, info.march_day), (0, 2024, 20));
/// ```
#[doc(alias = "jalCal")]
pub const fn jalaali_calendar_info(jy: Year) -> Result<CalendarInfo, Error> {
    let last = BREAKS.len() - 1;
    if jy < BREAKS[0] || jy >= BREAKS[last] {
        return Err(Error::InvalidJalaaliYear(jy));
    }

    let year = jy as i64;
    let gy = year + GREGORIAN_YEAR_OFFSET as i64;

    // leap days of the Jalaali calendar since AD 621, accumulated over every passed bracket
    let mut leap_j: i64 = -14;
    let mut jp = BREAKS[0] as i64;
    let mut jump = 0;
    let mut i = 1;
    while i <= last {
        let jm = BREAKS[i] as i64;
        jump = jm - jp;
        if year < jm {
            break;
        }
        leap_j += div(jump, 33) * 8 + div(rem(jump, 33), 4);
        jp = jm;
        i += 1;
    }

    let mut n = year - jp;
    leap_j += div(n, 33) * 8 + div(rem(n, 33) + 3, 4);
    if rem(jump, 33) == 4 && jump - n == 4 {
        leap_j += 1;
    }

    // and the same in the Gregorian calendar until `gy`
    let leap_g = div(gy, 4) - div((div(gy, 100) + 1) * 3, 4) - 150;
    let march = 20 + leap_j - leap_g;

    // near the end of a bracket the phase is taken from the next cycle
    if jump - n < 6 {
        n = n - jump + div(jump + 4, 33) * 33;
    }
    // -1 is the last year of a cycle, four years after its last leap year
    let phase = rem(n + 1, 33) - 1;
    let leap_offset = if phase == -1 { 4 } else { rem(phase, 4) };

    Ok(CalendarInfo {
        leap_offset: leap_offset as u8,
        gregorian_year: gy as Year,
        march_day: march as Day,
    })
}

/// Is this Jalaali year leap (366 days).
///
/// ```
/// assert_eq!(jalaali::is_leap_jalaali_year(1403), Ok(true));
/// assert_eq!(jalaali::is_leap_jalaali_year(1404), Ok(false));
/// ```
#[doc(alias = "isLeapYear")]
pub const fn is_leap_jalaali_year(jy: Year) -> Result<bool, Error> {
    match jalaali_calendar_info(jy) {
        Ok(info) => Ok(info.is_leap()),
        Err(e) => Err(e),
    }
}

/// The number of days in a month of a Jalaali year.
pub const fn days_in_month(jy: Year, jm: Month) -> Result<Day, Error> {
    match jm {
        1..=6 => Ok(FIRST_HALF_MAX_DOM),
        7..=11 => Ok(SECOND_HALF_MAX_DOM),
        12 => match is_leap_jalaali_year(jy) {
            Ok(true) => Ok(SECOND_HALF_MAX_DOM),
            Ok(false) => Ok(ESFAND_NON_LEAP_DOM),
            Err(e) => Err(e),
        },
        _ => Err(Error::InvalidMonth(jm)),
    }
}

/// The number of days in a Jalaali year (365 or 366).
pub const fn days_in_year(jy: Year) -> Result<Day, Error> {
    match is_leap_jalaali_year(jy) {
        Ok(true) => Ok(366),
        Ok(false) => Ok(365),
        Err(e) => Err(e),
    }
}

/// Calculate the JDN of a Jalaali date.
///
/// The month and day are not checked; use [`JalaaliDate::new`] to reject impossible dates.
///
/// ```
/// assert_eq!(jalaali::jalaali_to_jdn(1403, 1, 1), Ok(2460390));
/// ```
#[doc(alias = "j2d")]
pub const fn jalaali_to_jdn(jy: Year, jm: Month, jd: Day) -> Result<Jdn, Error> {
    let info = match jalaali_calendar_info(jy) {
        Ok(v) => v,
        Err(e) => return Err(e),
    };
    let (jm, jd) = (jm as i64, jd as i64);
    // 31 days per month, less one for each month past the sixth
    Ok(info.new_year_jdn() + (jm - 1) * 31 - div(jm, 7) * (jm - 7) + jd - 1)
}

/// Calculate the Jalaali date of a JDN.
///
/// Fails with [`Error::InvalidJalaaliYear`] when the Gregorian year of the JDN is outside 560 to
/// 3798, the years whose Jalaali counterparts are supported, or when the JDN precedes Farvardin
/// 1st of the first supported year.
///
/// ```
/// use jalaali::{JalaaliDate, jdn_to_jalaali};
///
/// assert_eq!(jdn_to_jalaali(2460390), Ok(JalaaliDate::from((1403, 1, 1))));
/// ```
#[doc(alias = "d2j")]
pub const fn jdn_to_jalaali(jdn: Jdn) -> Result<JalaaliDate, Error> {
    let (gy, _, _) = julian_day::gregorian_parts(jdn);
    let candidate = gy - GREGORIAN_YEAR_OFFSET as i64;
    if candidate < BREAKS[0] as i64 || candidate >= BREAKS[BREAKS.len() - 1] as i64 {
        return Err(Error::InvalidJalaaliYear(saturate_year(candidate)));
    }

    let (gy, mut jy) = (gy as Year, candidate as Year);
    let info = match jalaali_calendar_info(jy) {
        Ok(v) => v,
        Err(e) => return Err(e),
    };

    let first_half = FIRST_HALF_MAX_DOY as i64;
    // days passed since Farvardin 1st
    let mut k = jdn - gregorian_to_jdn(gy, 3, info.march_day);
    if k >= 0 {
        if k < first_half {
            let dom = FIRST_HALF_MAX_DOM as i64;
            return Ok(JalaaliDate::from_ymd_unchecked(
                jy,
                (1 + div(k, dom)) as Month,
                (rem(k, dom) + 1) as Day,
            ));
        }
        k -= first_half;
    } else {
        // the tail of the previous year, counted from its Mehr 1st; one day longer when the
        // previous year is leap, which is when this one is a year past the leap
        jy -= 1;
        if jy < BREAKS[0] {
            return Err(Error::InvalidJalaaliYear(jy));
        }
        k += 179;
        if info.leap_offset == 1 {
            k += 1;
        }
    }

    let dom = SECOND_HALF_MAX_DOM as i64;
    Ok(JalaaliDate::from_ymd_unchecked(
        jy,
        (7 + div(k, dom)) as Month,
        (rem(k, dom) + 1) as Day,
    ))
}

/// Convert a proleptic Gregorian date to Jalaali.
///
/// ```
/// use jalaali::{JalaaliDate, gregorian_to_jalaali};
///
/// assert_eq!(gregorian_to_jalaali(1970, 1, 1), Ok(JalaaliDate::from((1348, 10, 11))));
/// ```
pub const fn gregorian_to_jalaali(gy: Year, gm: Month, gd: Day) -> Result<JalaaliDate, Error> {
    jdn_to_jalaali(gregorian_to_jdn(gy, gm, gd))
}

/// Convert a Jalaali date to proleptic Gregorian.
pub const fn jalaali_to_gregorian(jy: Year, jm: Month, jd: Day) -> Result<GregorianDate, Error> {
    match jalaali_to_jdn(jy, jm, jd) {
        Ok(jdn) => Ok(jdn_to_gregorian(jdn)),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{JALAALI_YEAR_MAX, JALAALI_YEAR_MIN};

    fn info(jy: Year) -> (u8, Year, Day) {
        let v = jalaali_calendar_info(jy).unwrap();
        (v.leap_offset, v.gregorian_year, v.march_day)
    }

    #[test]
    fn test_calendar_info_near_present() {
        assert_eq!(info(1395), (0, 2016, 20));
        assert_eq!(info(1398), (3, 2019, 21));
        assert_eq!(info(1403), (0, 2024, 20));
        assert_eq!(info(1404), (1, 2025, 21));
        assert_eq!(info(1407), (4, 2028, 20));
        assert_eq!(info(1408), (0, 2029, 20));
        assert_eq!(info(1348), (2, 1969, 21));
    }

    #[test]
    fn test_calendar_info_at_bounds() {
        assert_eq!(info(-61), (0, 560, 20));
        assert_eq!(info(3177), (4, 3798, 20));
        assert_eq!(
            jalaali_calendar_info(-62),
            Err(Error::InvalidJalaaliYear(-62))
        );
        assert_eq!(
            jalaali_calendar_info(3178),
            Err(Error::InvalidJalaaliYear(3178))
        );
    }

    #[test]
    fn test_leap_offset_counts_years_since_leap() {
        let mut since = None;
        for jy in JALAALI_YEAR_MIN..=JALAALI_YEAR_MAX {
            let offset = jalaali_calendar_info(jy).unwrap().leap_offset;
            assert!(offset <= 4, "year {} has offset {}", jy, offset);
            if let Some(prev) = since {
                if offset != 0 {
                    assert_eq!(offset, prev + 1, "year {} skips an offset", jy);
                }
            }
            since = Some(offset);
        }
    }

    #[test]
    fn test_leap_years_are_4_or_5_apart() {
        let leaps = (JALAALI_YEAR_MIN..=JALAALI_YEAR_MAX)
            .filter(|&y| is_leap_jalaali_year(y).unwrap())
            .collect::<Vec<_>>();
        for w in leaps.windows(2) {
            let gap = w[1] - w[0];
            assert!(gap == 4 || gap == 5, "{} and {} are {} apart", w[0], w[1], gap);
        }
    }

    #[test]
    fn test_leap_aligns_with_wikipedia_list_of_33() {
        const LIST: [Year; 71] = [
            1210, 1214, 1218, 1222, 1226, 1230, 1234, 1238, 1243, 1247, 1251, 1255, 1259, 1263,
            1267, 1271, 1276, 1280, 1284, 1288, 1292, 1296, 1300, 1304, 1309, 1313, 1317, 1321,
            1325, 1329, 1333, 1337, 1342, 1346, 1350, 1354, 1358, 1362, 1366, 1370, 1375, 1379,
            1383, 1387, 1391, 1395, 1399, 1403, 1408, 1412, 1416, 1420, 1424, 1428, 1432, 1436,
            1441, 1445, 1449, 1453, 1457, 1461, 1465, 1469, 1474, 1478, 1482, 1486, 1490, 1494,
            1498,
        ];
        for i in 1210..=1500 {
            let is_leap = is_leap_jalaali_year(i).unwrap();
            let in_list = LIST.binary_search(&i).is_ok();
            assert_eq!(
                is_leap, in_list,
                "year {} is miscalculated (guessed as leap: {}, is actually leap: {})",
                i, is_leap, in_list
            );
        }
    }

    #[test]
    fn test_month_lengths() {
        assert_eq!(days_in_month(1403, 1), Ok(31));
        assert_eq!(days_in_month(1403, 6), Ok(31));
        assert_eq!(days_in_month(1403, 7), Ok(30));
        assert_eq!(days_in_month(1403, 11), Ok(30));
        assert_eq!(days_in_month(1403, 12), Ok(30));
        assert_eq!(days_in_month(1404, 12), Ok(29));
        assert_eq!(days_in_month(1404, 13), Err(Error::InvalidMonth(13)));
        assert_eq!(days_in_month(1404, 0), Err(Error::InvalidMonth(0)));
        assert_eq!(days_in_month(3178, 12), Err(Error::InvalidJalaaliYear(3178)));
        assert_eq!(days_in_year(1403), Ok(366));
        assert_eq!(days_in_year(1404), Ok(365));
    }

    #[test]
    fn test_year_length_matches_new_years() {
        for jy in JALAALI_YEAR_MIN..JALAALI_YEAR_MAX {
            let this = jalaali_to_jdn(jy, 1, 1).unwrap();
            let next = jalaali_to_jdn(jy + 1, 1, 1).unwrap();
            assert_eq!(
                (next - this) as Day,
                days_in_year(jy).unwrap(),
                "length of year {}",
                jy
            );
        }
    }

    #[test]
    fn test_known_new_years() {
        assert_eq!(jalaali_to_jdn(1403, 1, 1), Ok(gregorian_to_jdn(2024, 3, 20)));
        assert_eq!(jdn_to_jalaali(2460390).unwrap().ymd(), (1403, 1, 1));
        assert_eq!(jalaali_to_gregorian(1400, 1, 1).unwrap().ymd(), (2021, 3, 21));
        assert_eq!(gregorian_to_jalaali(2021, 3, 20).unwrap().ymd(), (1399, 12, 30));
        assert_eq!(jalaali_to_gregorian(1403, 12, 30).unwrap().ymd(), (2025, 3, 20));
        assert_eq!(gregorian_to_jalaali(622, 3, 22).unwrap().ymd(), (1, 1, 1));
    }

    #[test]
    fn test_half_year_boundary() {
        assert_eq!(jalaali_to_gregorian(1404, 6, 31).unwrap().ymd(), (2025, 9, 22));
        assert_eq!(gregorian_to_jalaali(2025, 9, 23).unwrap().ymd(), (1404, 7, 1));
    }

    #[test]
    fn test_round_trip_and_monotonic_over_supported_range() {
        let mut prev = jalaali_to_jdn(JALAALI_YEAR_MIN, 1, 1).unwrap() - 1;
        for jy in JALAALI_YEAR_MIN..=JALAALI_YEAR_MAX {
            for jm in 1..=12 {
                for jd in 1..=days_in_month(jy, jm).unwrap() {
                    let jdn = jalaali_to_jdn(jy, jm, jd).unwrap();
                    assert_eq!(jdn, prev + 1, "{}/{}/{} does not follow its previous day", jy, jm, jd);
                    prev = jdn;
                    // the tail of 3177 lies in Gregorian 3799 which maps to the unsupported 3178
                    if jdn_to_gregorian(jdn).year() > 3798 {
                        assert_eq!(jdn_to_jalaali(jdn), Err(Error::InvalidJalaaliYear(3178)));
                        continue;
                    }
                    assert_eq!(
                        jdn_to_jalaali(jdn).unwrap().ymd(),
                        (jy, jm, jd),
                        "{}/{}/{} does not round trip",
                        jy,
                        jm,
                        jd
                    );
                }
            }
        }
    }

    #[test]
    fn test_extreme_jdns_are_rejected() {
        assert!(matches!(jdn_to_jalaali(Jdn::MAX), Err(Error::InvalidJalaaliYear(_))));
        assert!(matches!(jdn_to_jalaali(Jdn::MAX / 2), Err(Error::InvalidJalaaliYear(_))));
        assert!(matches!(jdn_to_jalaali(Jdn::MIN), Err(Error::InvalidJalaaliYear(_))));
    }

    #[test]
    fn test_last_convertible_day() {
        assert_eq!(gregorian_to_jalaali(3798, 12, 31).unwrap().ymd(), (3177, 10, 11));
        assert_eq!(
            gregorian_to_jalaali(3799, 1, 1),
            Err(Error::InvalidJalaaliYear(3178))
        );
    }

    #[test]
    fn test_gregorian_year_before_first_break() {
        // Gregorian 560 starts in the unsupported Jalaali -62
        assert_eq!(
            gregorian_to_jalaali(560, 3, 19),
            Err(Error::InvalidJalaaliYear(-62))
        );
        assert_eq!(
            gregorian_to_jalaali(560, 1, 1),
            Err(Error::InvalidJalaaliYear(-62))
        );
        assert_eq!(gregorian_to_jalaali(560, 3, 20).unwrap().ymd(), (-61, 1, 1));
        assert_eq!(
            jdn_to_jalaali(jalaali_to_jdn(JALAALI_YEAR_MIN, 1, 1).unwrap() - 1),
            Err(Error::InvalidJalaaliYear(-62))
        );
        assert_eq!(
            gregorian_to_jalaali(559, 12, 31),
            Err(Error::InvalidJalaaliYear(-62))
        );
    }
}
