//! Holds all the FFI related code when the respective configurations are in place.
//!
//! Each function here mirrors one entry point of the crate root with primitive arguments. Since
//! `Result` does not cross the boundaries, the outputs are plain structs with a `valid` flag which
//! is `false` (and the other fields zero) whenever the Rust function returned an error.
//!
//! - `c`: every function is `extern "C"` and unmangled, the structs are `repr(C)`.
//! - `wasm`: functions and structs are exported through `wasm-bindgen`.
//! - `py`: functions and classes are collected in the `jalaali` Python module.

#[cfg(feature = "c")]
use jalaali_proc::fn_attr;

#[cfg(feature = "py")]
use jalaali_proc::py_attr;

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{CalendarInfo, Day, Error, GregorianDate, JalaaliDate, Jdn, Month, Year};

/// A checked integer result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "c", repr(C))]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(get_all))]
pub struct FfiInt {
    pub valid: bool,
    pub value: i64,
}

impl From<Result<i64, Error>> for FfiInt {
    fn from(value: Result<i64, Error>) -> Self {
        match value {
            Ok(value) => Self { valid: true, value },
            Err(_) => Self::default(),
        }
    }
}

/// A checked date result of either calendar (the function decides which).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "c", repr(C))]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(get_all))]
pub struct FfiDate {
    pub valid: bool,
    pub y: Year,
    pub m: Month,
    pub d: Day,
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", py_attr(pymethods, new))]
impl FfiDate {
    /// Wrap a year, month and day as a valid (unchecked) value.
    #[cfg_attr(feature = "wasm", wasm_bindgen(constructor))]
    pub fn new(y: Year, m: Month, d: Day) -> Self {
        Self { valid: true, y, m, d }
    }
}

impl From<GregorianDate> for FfiDate {
    fn from(value: GregorianDate) -> Self {
        let (y, m, d) = value.ymd();
        Self::new(y, m, d)
    }
}

impl From<Result<JalaaliDate, Error>> for FfiDate {
    fn from(value: Result<JalaaliDate, Error>) -> Self {
        match value {
            Ok(v) => Self::new(v.year(), v.month(), v.day()),
            Err(_) => Self::default(),
        }
    }
}

/// A checked [`CalendarInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "c", repr(C))]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(get_all))]
pub struct FfiCalendarInfo {
    pub valid: bool,
    pub leap_offset: u8,
    pub gregorian_year: Year,
    pub march_day: Day,
}

impl From<Result<CalendarInfo, Error>> for FfiCalendarInfo {
    fn from(value: Result<CalendarInfo, Error>) -> Self {
        match value {
            Ok(v) => Self {
                valid: true,
                leap_offset: v.leap_offset,
                gregorian_year: v.gregorian_year,
                march_day: v.march_day,
            },
            Err(_) => Self::default(),
        }
    }
}

/// See [`crate::div_floor`].
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = divFloor))]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn div_floor(a: i64, b: i64) -> FfiInt {
    crate::div_floor(a, b).into()
}

/// See [`crate::mod_floor`].
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = modFloor))]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn mod_floor(a: i64, b: i64) -> FfiInt {
    crate::mod_floor(a, b).into()
}

/// See [`crate::gregorian_to_jdn`]; always valid.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = gregorianToJdn))]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn gregorian_to_jdn(gy: Year, gm: Month, gd: Day) -> Jdn {
    crate::gregorian_to_jdn(gy, gm, gd)
}

/// See [`crate::jdn_to_gregorian`]; always valid.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = jdnToGregorian))]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn jdn_to_gregorian(jdn: Jdn) -> FfiDate {
    crate::jdn_to_gregorian(jdn).into()
}

/// See [`crate::jalaali_calendar_info`].
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = jalaaliCalendarInfo))]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn jalaali_calendar_info(jy: Year) -> FfiCalendarInfo {
    crate::jalaali_calendar_info(jy).into()
}

/// See [`crate::jalaali_to_jdn`].
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = jalaaliToJdn))]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn jalaali_to_jdn(jy: Year, jm: Month, jd: Day) -> FfiInt {
    crate::jalaali_to_jdn(jy, jm, jd).into()
}

/// See [`crate::jdn_to_jalaali`].
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = jdnToJalaali))]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn jdn_to_jalaali(jdn: Jdn) -> FfiDate {
    crate::jdn_to_jalaali(jdn).into()
}

/// See [`crate::is_leap_jalaali_year`]; unsupported years are not leap.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = isLeapJalaaliYear))]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn is_leap_jalaali_year(jy: Year) -> bool {
    matches!(crate::is_leap_jalaali_year(jy), Ok(true))
}

/// See [`crate::days_in_month`].
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = daysInMonth))]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn days_in_month(jy: Year, jm: Month) -> FfiInt {
    crate::days_in_month(jy, jm).map(i64::from).into()
}
