use chrono::offset::LocalResult;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt::{Display, Formatter};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RangeError {
    MonthIndex(u32),
    WeekdayIndex(u32),
    Year(i32),
    Day(u32),
}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeError::MonthIndex(index) => {
                write!(f, "Month index {} is outside 0..=11", index)
            }
            RangeError::WeekdayIndex(index) => {
                write!(f, "Weekday index {} is outside 0..=6", index)
            }
            RangeError::Year(year) => write!(f, "Year {} can't be represented", year),
            RangeError::Day(day) => write!(f, "Day {} doesn't exist in that month", day),
        }
    }
}

impl std::error::Error for RangeError {}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month0: u32) -> Result<u32, RangeError> {
    Ok(match month0 {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 if is_leap_year(year) => 29,
        1 => 28,
        _ => return Err(RangeError::MonthIndex(month0)),
    })
}

/// 0 is Sunday, 6 is Saturday
pub fn first_weekday_of_month(year: i32, month0: u32) -> Result<u32, RangeError> {
    Ok(first_day_of_month(year, month0)?
        .weekday()
        .num_days_from_sunday())
}

pub fn first_day_of_month(year: i32, month0: u32) -> Result<NaiveDate, RangeError> {
    validate_month(month0)?;

    NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or(RangeError::Year(year))
}

pub fn validate_month(month0: u32) -> Result<u32, RangeError> {
    if month0 < 12 {
        Ok(month0)
    } else {
        Err(RangeError::MonthIndex(month0))
    }
}

/// January rolls back to December of the previous year
pub fn previous_month(year: i32, month0: u32) -> Result<(i32, u32), RangeError> {
    Ok(match validate_month(month0)? {
        0 => (year - 1, 11),
        month0 => (year, month0 - 1),
    })
}

/// December rolls forward to January of the next year
pub fn next_month(year: i32, month0: u32) -> Result<(i32, u32), RangeError> {
    Ok(match validate_month(month0)? {
        11 => (year + 1, 0),
        month0 => (year, month0 + 1),
    })
}

pub fn month_abbreviation(month0: u32) -> Result<&'static str, RangeError> {
    MONTH_ABBREVIATIONS
        .get(month0 as usize)
        .copied()
        .ok_or(RangeError::MonthIndex(month0))
}

pub fn weekday_abbreviation(weekday0: u32) -> Result<&'static str, RangeError> {
    WEEKDAY_ABBREVIATIONS
        .get(weekday0 as usize)
        .copied()
        .ok_or(RangeError::WeekdayIndex(weekday0))
}

/// Month tabs starting at `start_month0`, wrapping past December
pub fn visible_months(start_month0: u32, count: u32) -> Result<Vec<&'static str>, RangeError> {
    validate_month(start_month0)?;

    (0..count)
        .map(|offset| month_abbreviation((start_month0 + offset % 12) % 12))
        .collect()
}

/**
Formats when an event happens, collapsing what both ends share.
* `June 15, 2024` for a single day (or no `end`)
* `June 15 - 17, 2024` within a month
* `June 15 - July 2, 2024` within a year
* `December 30, 2024 - January 2, 2025` otherwise

Ends given in reverse are put back in order.
*/
pub fn format_date_range<Tz: TimeZone>(start: &DateTime<Tz>, end: Option<&DateTime<Tz>>) -> String {
    let first = start.date_naive();
    let last = end.map(DateTime::date_naive).unwrap_or(first);
    let (start, end) = if last < first {
        (last, first)
    } else {
        (first, last)
    };

    if start == end {
        format!("{} {}, {}", month_name(&start), start.day(), start.year())
    } else if start.year() == end.year() && start.month() == end.month() {
        format!(
            "{} {} - {}, {}",
            month_name(&start),
            start.day(),
            end.day(),
            end.year()
        )
    } else if start.year() == end.year() {
        format!(
            "{} {} - {} {}, {}",
            month_name(&start),
            start.day(),
            month_name(&end),
            end.day(),
            end.year()
        )
    } else {
        format!(
            "{} {}, {} - {} {}, {}",
            month_name(&start),
            start.day(),
            start.year(),
            month_name(&end),
            end.day(),
            end.year()
        )
    }
}

fn month_name(date: &NaiveDate) -> String {
    date.format("%B").to_string()
}

/// 12-hour clock, e.g. `6:00 PM`
pub fn format_clock_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.naive_local().format("%-I:%M %p").to_string()
}

/// Date parts shown on an event card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBadge {
    pub day: u32,
    pub month: String,
    pub weekday: String,
    pub time: String,
}

impl DateBadge {
    pub fn new<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        let local = instant.naive_local();

        Self {
            day: local.day(),
            month: local.format("%b").to_string(),
            weekday: local.format("%a").to_string(),
            time: format_clock_time(instant),
        }
    }
}

/// Places a wall-clock time in `tz`:
/// - ambiguous times (DST fall back) take the earlier instant;
/// - non-existent times (DST spring forward) are read as UTC.
pub fn local_instant<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => tz.from_utc_datetime(&naive),
    }
}
