#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
mod r#macro;

mod calendar;
mod error;
mod julian_day;
mod primitive;
pub mod traits;
pub mod utility;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use calendar::{
    days_in_month, days_in_year, gregorian_to_jalaali, is_leap_jalaali_year,
    jalaali_calendar_info, jalaali_to_gregorian, jalaali_to_jdn, jdn_to_jalaali,
};
pub use error::Error;
pub use julian_day::{gregorian_to_jdn, is_leap_gregorian_year, jdn_to_gregorian};
pub use primitive::{CalendarInfo, GregorianDate, JalaaliDate};
pub use utility::{div_floor, mod_floor};

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "py")]
#[pymodule]
fn jalaali(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::div_floor, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::mod_floor, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::gregorian_to_jdn, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::jdn_to_gregorian, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::jalaali_calendar_info, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::jalaali_to_jdn, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::jdn_to_jalaali, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::is_leap_jalaali_year, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::days_in_month, m)?)?;
    m.add_class::<ffi::FfiInt>()?;
    m.add_class::<ffi::FfiDate>()?;
    m.add_class::<ffi::FfiCalendarInfo>()?;
    Ok(())
}

#[cfg(all(not(test), not(feature = "std")))] // the std runtime brings its own
#[panic_handler]
fn panic_handler(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

/// Counter for years (astronomical numbering for Gregorian, year 0 is 1 BC).
pub type Year = i32;

/// Counter for months of a year (1 to 12 when valid).
pub type Month = i32;

/// Counter for days of a month (1 to 31 when valid).
pub type Day = i32;

/// Julian Day Number, a running count of days referenced to noon.
pub type Jdn = i64;

/// Jalaali years where the intercalation pattern of the 33-year rule changes.
///
/// The last entry is exclusive: [`jalaali_calendar_info`] accepts years from `BREAKS[0]` up to
/// (but not including) the last break. Based on the work of Kazimierz M. Borkowski,
/// <http://www.astro.uni.torun.pl/~kb/Papers/EMP/PersianC-EMP.htm>.
pub const BREAKS: [Year; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// The first supported Jalaali year.
pub const JALAALI_YEAR_MIN: Year = BREAKS[0];

/// The last supported Jalaali year (inclusive).
pub const JALAALI_YEAR_MAX: Year = BREAKS[BREAKS.len() - 1] - 1;

/// The difference between a Jalaali year and the Gregorian year its New Year falls in.
pub const GREGORIAN_YEAR_OFFSET: Year = 621;

/// JDN of the Unix Epoch (1970-01-01), Jalaali 1348/10/11.
pub const UNIX_EPOCH_JDN: Jdn = 2440588;

/// Days in the first half of the year (months 1 to 6).
pub const FIRST_HALF_MAX_DOY: Day = 186;

/// Days of month in months up to and including the sixth (last month before new half).
pub const FIRST_HALF_MAX_DOM: Day = 31;

/// Days of month in months seven to eleven, and in Esfand (12) of leap years.
pub const SECOND_HALF_MAX_DOM: Day = 30;

/// Days in the last month (Esfand) when the year is not leap.
pub const ESFAND_NON_LEAP_DOM: Day = 29;
