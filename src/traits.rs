//! Holds traits and their implementation for Rust usage.

use crate::{Error, GregorianDate, JalaaliDate, Jdn, UNIX_EPOCH_JDN, jdn_to_gregorian, jdn_to_jalaali};

/// Seconds in a whole day.
const DAY_SECS: u64 = 86400;

/// Convert a time difference in compare to the Unix Epoch to a day of the calendars.
///
/// Only whole days count: the time of day is dropped and the Epoch is taken in UTC.
pub trait ToJdn {
    /// Days since 1970-01-01, negative before it, rounded toward the past.
    ///
    /// This must be saturating.
    fn days_since_epoch(&self) -> i64;

    /// The JDN of the day.
    fn jdn(&self) -> Jdn {
        UNIX_EPOCH_JDN.saturating_add(self.days_since_epoch())
    }

    /// The proleptic Gregorian date of the day.
    fn to_gregorian(&self) -> GregorianDate {
        jdn_to_gregorian(self.jdn())
    }

    /// The Jalaali date of the day.
    fn to_jalaali(&self) -> Result<JalaaliDate, Error> {
        jdn_to_jalaali(self.jdn())
    }
}

/// Treated as the time passed since the Epoch.
impl ToJdn for core::time::Duration {
    fn days_since_epoch(&self) -> i64 {
        (self.as_secs() / DAY_SECS).min(i64::MAX as u64) as i64
    }
}

#[cfg(feature = "std")]
impl ToJdn for std::time::SystemTime {
    fn days_since_epoch(&self) -> i64 {
        match self.duration_since(std::time::UNIX_EPOCH) {
            Ok(d) => d.days_since_epoch(),
            Err(e) => {
                // a partial day before the Epoch belongs to the day before
                let d = e.duration();
                let secs = d.as_secs().saturating_add((d.subsec_nanos() > 0) as u64);
                -(secs.div_ceil(DAY_SECS).min(i64::MAX as u64) as i64)
            }
        }
    }
}
