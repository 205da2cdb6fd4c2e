//! Static per-year date tables for the lunisolar holidays
//!
//! These dates are not derivable from the Gregorian calendar alone, so they are
//! tabulated for a window of years. Years outside the window degrade to a fixed
//! month/day approximation. This is intentional: the widget prefers a roughly
//! right date over shipping a Hebrew/Hindu/Chinese calendar implementation.

use std::error::Error;

use chrono::NaiveDate;

/// A per-year date table with an approximate fallback for uncovered years.
///
/// The tables themselves are static configuration, the resolver does not care
/// which holiday they describe.
pub struct LookupTable {
    /// `(year, month, day)` entries
    entries: &'static [(i32, u32, u32)],
    fallback_month: u32,
    fallback_day: u32,
}

impl LookupTable {
    pub const fn new(entries: &'static [(i32, u32, u32)], fallback_month: u32, fallback_day: u32) -> Self {
        Self { entries, fallback_month, fallback_day }
    }

    /// Returns the tabulated date for this year, or the fallback approximation
    /// when the year is not covered. A table miss is not an error.
    pub fn resolve(&self, year: i32) -> Result<NaiveDate, Box<dyn Error>> {
        for &(y, month, day) in self.entries {
            if y == year {
                return NaiveDate::from_ymd_opt(y, month, day)
                    .ok_or_else(|| format!("Invalid table entry: {}-{:02}-{:02}", y, month, day).into());
            }
        }

        log::debug!("Year {} is not tabulated, falling back to {:02}-{:02}", year, self.fallback_month, self.fallback_day);
        NaiveDate::from_ymd_opt(year, self.fallback_month, self.fallback_day)
            .ok_or_else(|| format!("Invalid fallback date for year {}", year).into())
    }
}

/// Rosh Hashanah usually falls between early September and early October
pub const ROSH_HASHANAH: LookupTable = LookupTable::new(&[
    (2024, 10, 3),
    (2025, 9, 23),
    (2026, 9, 12),
    (2027, 10, 2),
    (2028, 9, 21),
    (2029, 9, 10),
    (2030, 9, 28),
], 9, 15);

/// First day of Hanukkah, late November to late December
pub const HANUKKAH: LookupTable = LookupTable::new(&[
    (2024, 12, 25),
    (2025, 12, 14),
    (2026, 12, 4),
    (2027, 12, 24),
    (2028, 12, 12),
    (2029, 12, 1),
    (2030, 12, 20),
], 12, 10);

/// Diwali, October or November
pub const DIWALI: LookupTable = LookupTable::new(&[
    (2024, 11, 1),
    (2025, 10, 20),
    (2026, 11, 8),
    (2027, 10, 29),
    (2028, 10, 18),
    (2029, 11, 5),
    (2030, 10, 26),
], 11, 1);

/// Chinese New Year, between January 21 and February 20
pub const CHINESE_NEW_YEAR: LookupTable = LookupTable::new(&[
    (2024, 2, 10),
    (2025, 1, 29),
    (2026, 2, 17),
    (2027, 2, 6),
    (2028, 1, 26),
    (2029, 2, 13),
    (2030, 2, 3),
], 2, 1);
