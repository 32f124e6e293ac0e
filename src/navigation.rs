use crate::calendar::date_utils::{validate_month, RangeError};
use crate::calendar::grid::CalendarCell;
use crate::catalog::model::Event;
use chrono::NaiveDate;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const EVENT_ROUTE: &str = "/event/";
const DAY_ROUTE: &str = "/day/";
const DAY_FORMAT: &str = "%Y-%m-%d";

/// What the detail views get opened with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    EventDetail { id: String },
    Day { date: NaiveDate },
}

impl Destination {
    pub fn event(event: &Event) -> Self {
        Destination::EventDetail {
            id: event.id.clone(),
        }
    }

    /// Cells of the adjacent months can't be selected
    pub fn day(year: i32, month0: u32, cell: &CalendarCell) -> Result<Option<Self>, RangeError> {
        if !cell.belongs_to_target_month {
            return Ok(None);
        }

        let month0 = validate_month(month0)?;
        let date = NaiveDate::from_ymd_opt(year, month0 + 1, cell.day_of_month)
            .ok_or(RangeError::Day(cell.day_of_month))?;

        Ok(Some(Destination::Day { date }))
    }
}

impl Display for Destination {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::EventDetail { id } => write!(f, "{}{}", EVENT_ROUTE, id),
            Destination::Day { date } => write!(f, "{}{}", DAY_ROUTE, date.format(DAY_FORMAT)),
        }
    }
}

impl FromStr for Destination {
    type Err = NavigationError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        if let Some(id) = path.strip_prefix(EVENT_ROUTE).filter(|id| !id.is_empty()) {
            return Ok(Destination::EventDetail { id: id.to_string() });
        }

        if let Some(date) = path.strip_prefix(DAY_ROUTE) {
            return NaiveDate::parse_from_str(date, DAY_FORMAT)
                .map(|date| Destination::Day { date })
                .map_err(|_| NavigationError::InvalidDate(date.to_string()));
        }

        Err(NavigationError::UnknownRoute(path.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    UnknownRoute(String),
    InvalidDate(String),
}

impl Display for NavigationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NavigationError::UnknownRoute(path) => write!(f, "No view for '{}'", path),
            NavigationError::InvalidDate(date) => {
                write!(f, "'{}' is not a date. Expected YYYY-MM-DD", date)
            }
        }
    }
}

impl std::error::Error for NavigationError {}
