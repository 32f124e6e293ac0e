use super::date_utils::{days_in_month, first_weekday_of_month, previous_month, RangeError};
use tracing::trace;

/// 6 weeks of 7 days, so every month renders at the same height
pub const GRID_CELLS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub day_of_month: u32,
    pub belongs_to_target_month: bool,
}

impl CalendarCell {
    fn target(day_of_month: u32) -> Self {
        Self {
            day_of_month,
            belongs_to_target_month: true,
        }
    }

    fn adjacent(day_of_month: u32) -> Self {
        Self {
            day_of_month,
            belongs_to_target_month: false,
        }
    }
}

/**
Builds the Sunday-first month view for `month0` of `year`.
* Leading cells are the last days of the previous month
* Trailing cells are the next month's days, counted from 1
*/
#[tracing::instrument(level = "trace")]
pub fn build_grid(year: i32, month0: u32) -> Result<Vec<CalendarCell>, RangeError> {
    let first_weekday = first_weekday_of_month(year, month0)?;
    let days = days_in_month(year, month0)?;

    let (previous_year, previous_month0) = previous_month(year, month0)?;
    let days_in_previous = days_in_month(previous_year, previous_month0)?;

    let trailing = (GRID_CELLS - first_weekday as usize - days as usize) as u32;

    let cells = (days_in_previous - first_weekday + 1..=days_in_previous)
        .map(CalendarCell::adjacent)
        .chain((1..=days).map(CalendarCell::target))
        .chain((1..=trailing).map(CalendarCell::adjacent))
        .collect::<Vec<CalendarCell>>();

    trace!(
        "{} leading, {} target and {} trailing cells",
        first_weekday,
        days,
        trailing
    );

    Ok(cells)
}

/// Splits a grid into rows of a week each
pub fn weeks(cells: &[CalendarCell]) -> impl Iterator<Item = &[CalendarCell]> {
    cells.chunks(DAYS_PER_WEEK)
}
