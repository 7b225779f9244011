//! Private macros specific to this crate.

/// Create a year/month/day value type with getters, tuple conversions and a [`Display`] format.
///
/// The derived [`Ord`] compares year, then month, then day, which is chronological for any pair of
/// valid dates of the same calendar.
///
/// The format literal receives year, month and day in that order.
///
/// [`Display`]: core::fmt::Display
macro_rules! ymd_type {
    (
        $(#[$meta:meta])*
        ident: $ident:ident,
        display: $fmt:literal,
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $ident {
            y: $crate::Year,
            m: $crate::Month,
            d: $crate::Day,
        }

        impl $ident {
            /// Create a value without checking the month or day.
            ///
            /// The conversion formulas accept any triple, see the crate documentation on out of
            /// range inputs.
            pub const fn from_ymd_unchecked(y: $crate::Year, m: $crate::Month, d: $crate::Day) -> Self {
                Self { y, m, d }
            }

            /// Getter for the year.
            pub const fn year(&self) -> $crate::Year {
                self.y
            }

            /// Getter for the month (1 to 12).
            pub const fn month(&self) -> $crate::Month {
                self.m
            }

            /// Getter for the day of month.
            pub const fn day(&self) -> $crate::Day {
                self.d
            }

            /// All three fields as a tuple.
            pub const fn ymd(&self) -> ($crate::Year, $crate::Month, $crate::Day) {
                (self.y, self.m, self.d)
            }
        }

        impl From<($crate::Year, $crate::Month, $crate::Day)> for $ident {
            fn from((y, m, d): ($crate::Year, $crate::Month, $crate::Day)) -> Self {
                Self::from_ymd_unchecked(y, m, d)
            }
        }

        impl From<$ident> for ($crate::Year, $crate::Month, $crate::Day) {
            fn from(value: $ident) -> Self {
                value.ymd()
            }
        }

        impl core::fmt::Display for $ident {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, $fmt, self.y, self.m, self.d)
            }
        }
    };
}
