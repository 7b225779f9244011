//! Holds the value types of the conversions and their utilities.

use crate::{
    Day, Error, Jdn, Month, Year, days_in_month, gregorian_to_jdn, is_leap_gregorian_year,
    is_leap_jalaali_year, jalaali_to_jdn, jdn_to_gregorian, jdn_to_jalaali,
};

ymd_type! {
    /// A date of the proleptic Gregorian calendar (astronomical years, year 0 is 1 BC).
    ///
    /// Displays as `YYYY-MM-DD`.
    ident: GregorianDate,
    display: "{}-{:02}-{:02}",
}

impl GregorianDate {
    /// Create a date if the month and day exist in that year.
    pub const fn new(y: Year, m: Month, d: Day) -> Result<Self, Error> {
        let max_dom = match m {
            2 if is_leap_gregorian_year(y) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            1..=12 => 31,
            _ => return Err(Error::InvalidGregorianDate(y, m, d)),
        };
        if d < 1 || d > max_dom {
            return Err(Error::InvalidGregorianDate(y, m, d));
        }
        Ok(Self { y, m, d })
    }

    /// The date of a JDN (see [`jdn_to_gregorian`]).
    pub const fn from_jdn(jdn: Jdn) -> Self {
        jdn_to_gregorian(jdn)
    }

    /// The JDN of this date (see [`gregorian_to_jdn`]).
    pub const fn to_jdn(&self) -> Jdn {
        gregorian_to_jdn(self.y, self.m, self.d)
    }

    /// The Jalaali date of the same day.
    pub const fn to_jalaali(&self) -> Result<JalaaliDate, Error> {
        jdn_to_jalaali(self.to_jdn())
    }

    /// Is the year of this date leap.
    pub const fn is_leap_year(&self) -> bool {
        is_leap_gregorian_year(self.y)
    }
}

ymd_type! {
    /// A date of the Jalaali (Persian solar Hijri) calendar.
    ///
    /// Months 1 to 6 have 31 days, 7 to 11 have 30 and Esfand (12) has 29, or 30 in leap years.
    /// Displays as `Y/M/D`.
    ident: JalaaliDate,
    display: "{}/{}/{}",
}

impl JalaaliDate {
    /// Create a date if the year is supported and the month and day exist in it.
    pub const fn new(y: Year, m: Month, d: Day) -> Result<Self, Error> {
        let max_dom = match days_in_month(y, m) {
            Ok(v) => v,
            Err(Error::InvalidMonth(_)) => return Err(Error::InvalidJalaaliDate(y, m, d)),
            Err(e) => return Err(e),
        };
        if d < 1 || d > max_dom {
            return Err(Error::InvalidJalaaliDate(y, m, d));
        }
        Ok(Self { y, m, d })
    }

    /// The date of a JDN (see [`jdn_to_jalaali`]).
    pub const fn from_jdn(jdn: Jdn) -> Result<Self, Error> {
        jdn_to_jalaali(jdn)
    }

    /// The JDN of this date (see [`jalaali_to_jdn`]).
    pub const fn to_jdn(&self) -> Result<Jdn, Error> {
        jalaali_to_jdn(self.y, self.m, self.d)
    }

    /// The Gregorian date of the same day.
    pub const fn to_gregorian(&self) -> Result<GregorianDate, Error> {
        match self.to_jdn() {
            Ok(jdn) => Ok(jdn_to_gregorian(jdn)),
            Err(e) => Err(e),
        }
    }

    /// Is the year of this date leap (see [`is_leap_jalaali_year`]).
    pub const fn is_leap_year(&self) -> Result<bool, Error> {
        is_leap_jalaali_year(self.y)
    }
}

/// Where a Jalaali year stands in the leap cycle and where it starts in the Gregorian calendar.
///
/// Returned by [`crate::jalaali_calendar_info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarInfo {
    /// Years passed since the last leap year (0 to 4); 0 is a leap year.
    pub leap_offset: u8,
    /// The Gregorian year in which this Jalaali year begins.
    pub gregorian_year: Year,
    /// The day of March of Farvardin 1st in [`Self::gregorian_year`] (over 31 spills into April).
    pub march_day: Day,
}

impl CalendarInfo {
    /// Is this a leap year (366 days, Esfand has 30 days).
    pub const fn is_leap(&self) -> bool {
        self.leap_offset == 0
    }

    /// The JDN of Farvardin 1st of this year.
    pub const fn new_year_jdn(&self) -> Jdn {
        gregorian_to_jdn(self.gregorian_year, 3, self.march_day)
    }
}
