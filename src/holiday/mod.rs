//! Per-year computation of the widget's holiday entries
//!
//! Holidays come in four flavours:
//! * fixed-date holidays (e.g. Christmas),
//! * weekday-rule holidays ("the Nth/last weekday W of month M", e.g. Thanksgiving),
//! * Easter and the holidays at a fixed day-offset from it (e.g. Good Friday),
//! * lunisolar holidays, read from the per-year tables in [`tables`] (e.g. Diwali).
//!
//! Everything here is a pure function of the year: no state, no I/O, and the same
//! year always yields the exact same records. Callers can therefore regenerate the
//! records at every startup and rely on [`merge_holidays`] to keep the task list
//! free of duplicates.

pub mod rules;
pub mod tables;

use std::collections::HashSet;
use std::error::Error;

use chrono::{Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::holiday::rules::{easter, last_weekday_of_month, nth_weekday_of_month};
use crate::holiday::tables::{CHINESE_NEW_YEAR, DIWALI, HANUKKAH, ROSH_HASHANAH};

/// Years before the Gregorian reform make no sense for these rules
pub const MIN_YEAR: i32 = 1583;
/// Four-digit years only, the ids and the persisted date strings assume them
pub const MAX_YEAR: i32 = 9999;

/// A dated, labelled, immutable holiday entry.
///
/// Serializes to the JSON shape the widget persists its task list in
/// (`isHoliday: true` is what tells the task tracker to refuse completion,
/// edition and deletion of the entry).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRecord {
    /// The civil date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// The display name
    pub label: String,
    /// Deterministic per (year, holiday): recomputing the same year always yields
    /// the same id, so re-insertion is idempotent
    pub id: String,
    pub is_holiday: bool,
    pub completed: bool,
}

impl HolidayRecord {
    /// A fixed-date holiday. Its id embeds the date itself, like the original
    /// widget did (`holiday-2024-12-25`).
    fn fixed(year: i32, month: u32, day: u32, label: &str) -> Result<Self, Box<dyn Error>> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(format!("No such date: {}-{:02}-{:02}", year, month, day))?;
        Ok(Self::new(date, label, format!("holiday-{}-{:02}-{:02}", year, month, day)))
    }

    /// A computed holiday. The date varies per year, so the id embeds a stable
    /// slug instead (`holiday-2024-thanksgiving`).
    fn computed(year: i32, date: NaiveDate, slug: &str, label: &str) -> Self {
        Self::new(date, label, format!("holiday-{}-{}", year, slug))
    }

    fn new(date: NaiveDate, label: &str, id: String) -> Self {
        Self {
            date,
            label: label.to_string(),
            id,
            is_holiday: true,
            completed: false,
        }
    }
}

/// Day offsets from Easter Sunday
const EASTER_OFFSETS: &[(i64, &str, &str)] = &[
    (-46, "ashwednesday", "Ash Wednesday"),
    ( -7, "palmsunday", "Palm Sunday"),
    ( -3, "maundythursday", "Maundy Thursday"),
    ( -2, "goodfriday", "Good Friday"),
    ( -1, "holysaturday", "Holy Saturday"),
    (  0, "easter", "Easter Sunday"),
    ( 40, "ascension", "Ascension Day"),
    ( 50, "pentecost", "Pentecost"),
];

/// Computes every holiday record for a year.
///
/// The records come grouped: fixed-date, then weekday-rule, then Easter-anchored,
/// then lookup-table holidays. Either the complete set is returned or the call
/// fails, there are no partial results.
pub fn holidays_for_year(year: i32) -> Result<Vec<HolidayRecord>, Box<dyn Error>> {
    if year < MIN_YEAR || year > MAX_YEAR {
        return Err(format!("Year {} is outside the supported range [{}, {}]", year, MIN_YEAR, MAX_YEAR).into());
    }

    let mut holidays = Vec::new();

    // Fixed-date holidays
    holidays.push(HolidayRecord::fixed(year, 1, 1, "New Year's Day")?);
    holidays.push(HolidayRecord::fixed(year, 7, 4, "Independence Day")?);
    holidays.push(HolidayRecord::fixed(year, 12, 25, "Christmas Day")?);
    holidays.push(HolidayRecord::fixed(year, 11, 11, "Veterans Day")?);
    holidays.push(HolidayRecord::fixed(year, 10, 31, "Halloween")?);
    holidays.push(HolidayRecord::fixed(year, 2, 14, "Valentine's Day")?);
    holidays.push(HolidayRecord::fixed(year, 12, 31, "New Year's Eve")?);
    holidays.push(HolidayRecord::fixed(year, 3, 17, "St. Patrick's Day")?);
    holidays.push(HolidayRecord::fixed(year, 1, 6, "Epiphany")?);
    holidays.push(HolidayRecord::fixed(year, 11, 1, "All Saints' Day")?);

    // Weekday-rule holidays
    holidays.push(HolidayRecord::computed(year, nth_weekday_of_month(year, 1, Weekday::Mon, 3)?, "mlk", "Martin Luther King Jr. Day"));
    holidays.push(HolidayRecord::computed(year, nth_weekday_of_month(year, 2, Weekday::Mon, 3)?, "presidents", "Presidents' Day"));
    holidays.push(HolidayRecord::computed(year, last_weekday_of_month(year, 5, Weekday::Mon)?, "memorial", "Memorial Day"));
    holidays.push(HolidayRecord::computed(year, nth_weekday_of_month(year, 9, Weekday::Mon, 1)?, "labor", "Labor Day"));
    holidays.push(HolidayRecord::computed(year, nth_weekday_of_month(year, 10, Weekday::Mon, 2)?, "columbus", "Columbus Day"));
    holidays.push(HolidayRecord::computed(year, nth_weekday_of_month(year, 11, Weekday::Thu, 4)?, "thanksgiving", "Thanksgiving"));
    holidays.push(HolidayRecord::computed(year, nth_weekday_of_month(year, 5, Weekday::Sun, 2)?, "mothers", "Mother's Day"));
    holidays.push(HolidayRecord::computed(year, nth_weekday_of_month(year, 6, Weekday::Sun, 3)?, "fathers", "Father's Day"));

    // Easter-anchored holidays
    let easter_sunday = easter(year)?;
    for &(offset, slug, label) in EASTER_OFFSETS {
        holidays.push(HolidayRecord::computed(year, easter_sunday + Duration::days(offset), slug, label));
    }

    // Lookup-table holidays
    let rosh_hashanah = ROSH_HASHANAH.resolve(year)?;
    holidays.push(HolidayRecord::computed(year, rosh_hashanah, "roshhashanah", "Rosh Hashanah"));
    // Yom Kippur is an offset on top of the Rosh Hashanah lookup, not a table of its own
    holidays.push(HolidayRecord::computed(year, rosh_hashanah + Duration::days(10), "yomkippur", "Yom Kippur"));
    holidays.push(HolidayRecord::computed(year, HANUKKAH.resolve(year)?, "hanukkah", "Hanukkah (First Day)"));
    holidays.push(HolidayRecord::computed(year, DIWALI.resolve(year)?, "diwali", "Diwali"));
    holidays.push(HolidayRecord::computed(year, CHINESE_NEW_YEAR.resolve(year)?, "chinesenewyear", "Chinese New Year"));

    Ok(holidays)
}

/// Computes the holiday records for every year of the inclusive range
pub fn holidays_for_years(start_year: i32, end_year: i32) -> Result<Vec<HolidayRecord>, Box<dyn Error>> {
    if start_year > end_year {
        return Err(format!("Invalid year range: {} > {}", start_year, end_year).into());
    }

    let mut all = Vec::new();
    for year in start_year..=end_year {
        all.extend(holidays_for_year(year)?);
    }
    Ok(all)
}

/// Keeps only the records whose id is not already present in the task list.
///
/// This is what makes seeding idempotent: the widget regenerates the holidays at
/// every startup and merges them into whatever it had persisted.
pub fn merge_holidays(existing_ids: &HashSet<String>, new_records: Vec<HolidayRecord>) -> Vec<HolidayRecord> {
    let mut merged = Vec::new();
    for record in new_records {
        if existing_ids.contains(&record.id) {
            log::debug!("Holiday {} is already in the task list, skipping it", record.id);
            continue;
        }
        merged.push(record);
    }
    merged
}
