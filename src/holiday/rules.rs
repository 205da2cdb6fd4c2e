//! Date-rule primitives: weekday-of-month resolution and the Easter computus

use std::error::Error;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Returns the date of the Nth occurrence of `weekday` in the given month.
///
/// `occurrence` is 1-based. Asking for an occurrence that does not exist in this
/// month (e.g. a 5th Monday in a 4-Monday month) is an error, it never wraps into
/// the next month.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, occurrence: u32) -> Result<NaiveDate, Box<dyn Error>> {
    if occurrence == 0 {
        return Err("Occurrences are numbered from 1".into());
    }

    let mut date = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(format!("No such month: {}-{:02}", year, month))?;
    while date.weekday() != weekday {
        date = date.succ_opt().ok_or("Date out of range")?;
    }

    let date = date + Duration::days((occurrence as i64 - 1) * 7);
    if date.month() != month {
        return Err(format!("There are fewer than {} {}s in {}-{:02}", occurrence, weekday, year, month).into());
    }
    Ok(date)
}

/// Returns the date of the last occurrence of `weekday` in the given month
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Result<NaiveDate, Box<dyn Error>> {
    let mut date = last_day_of_month(year, month)?;
    while date.weekday() != weekday {
        date = date.pred_opt().ok_or("Date out of range")?;
    }
    Ok(date)
}

fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate, Box<dyn Error>> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .ok_or_else(|| format!("No such month: {}-{:02}", year, month).into())
}

/// Gregorian Easter Sunday, via the anonymous Gregorian algorithm.
///
/// A fixed closed-form sequence of integer modular arithmetic over the year, with
/// floor division throughout. No iteration, no table.
pub fn easter(year: i32) -> Result<NaiveDate, Box<dyn Error>> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .ok_or_else(|| format!("Easter computus produced an invalid date for year {}", year).into())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_nth_weekday() {
        // January 2024 starts on a Monday
        assert_eq!(nth_weekday_of_month(2024, 1, Weekday::Mon, 1).unwrap(), ymd(2024, 1, 1));
        assert_eq!(nth_weekday_of_month(2024, 1, Weekday::Mon, 3).unwrap(), ymd(2024, 1, 15));
        // 4th Thursday of November 2024
        assert_eq!(nth_weekday_of_month(2024, 11, Weekday::Thu, 4).unwrap(), ymd(2024, 11, 28));
        // 2nd Sunday of May 2024
        assert_eq!(nth_weekday_of_month(2024, 5, Weekday::Sun, 2).unwrap(), ymd(2024, 5, 12));
    }

    #[test]
    fn test_nth_weekday_out_of_range() {
        // February 2024 only has four Mondays
        assert!(nth_weekday_of_month(2024, 2, Weekday::Mon, 5).is_err());
        assert!(nth_weekday_of_month(2024, 2, Weekday::Mon, 0).is_err());
        assert!(nth_weekday_of_month(2024, 13, Weekday::Mon, 1).is_err());
    }

    #[test]
    fn test_last_weekday() {
        assert_eq!(last_weekday_of_month(2024, 5, Weekday::Mon).unwrap(), ymd(2024, 5, 27));
        // December: the month+1 rollover must land in January of the next year
        assert_eq!(last_weekday_of_month(2024, 12, Weekday::Tue).unwrap(), ymd(2024, 12, 31));
        // Leap February
        assert_eq!(last_weekday_of_month(2024, 2, Weekday::Thu).unwrap(), ymd(2024, 2, 29));
    }

    #[test]
    fn test_easter_known_years() {
        assert_eq!(easter(2008).unwrap(), ymd(2008, 3, 23));
        assert_eq!(easter(2011).unwrap(), ymd(2011, 4, 24));
        assert_eq!(easter(2024).unwrap(), ymd(2024, 3, 31));
        assert_eq!(easter(2025).unwrap(), ymd(2025, 4, 20));
        // The latest possible Easter
        assert_eq!(easter(1943).unwrap(), ymd(1943, 4, 25));
    }
}
