use crate::calendar::date_utils::{days_in_month, local_instant};
use crate::catalog::model::Event;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;

const FREE_PRICE: &str = "free";

lazy_static! {
    static ref PRICE_AMOUNT: Regex =
        Regex::new(r"(\d+(?:\.\d+)?)").expect("Failed to create price regex");
}

/// Category pills shown above the results
#[derive(
    strum::IntoStaticStr,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(try_from = "String")]
pub enum Category {
    All,
    Concert,
    Sport,
    #[strum(to_string = "Stand Up", serialize = "stand_up", serialize = "StandUp")]
    StandUp,
    Electronic,
}

impl TryFrom<String> for Category {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Category::from_str(&value)
    }
}

/// Tags that make an event belong to each category.
/// There's no built-in mapping, it has to be configured.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct CategoryMapping {
    tags: HashMap<Category, Vec<String>>,
}

impl CategoryMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: Category, tags: &[&str]) -> Self {
        self.tags
            .insert(category, tags.iter().map(|tag| tag.to_string()).collect());
        self
    }

    pub fn tags_for(&self, category: Category) -> Option<&[String]> {
        self.tags.get(&category).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Inclusive range of start instants
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DateWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateWindow {
    pub fn new<Tz: TimeZone>(from: DateTime<Tz>, to: DateTime<Tz>) -> Self {
        Self {
            from: from.with_timezone(&Utc),
            to: to.with_timezone(&Utc),
        }
    }

    pub fn contains<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        let instant = instant.with_timezone(&Utc);

        self.from <= instant && instant <= self.to
    }

    /// From the first to the last instant of the given days, in `tz`
    pub fn days<Tz: TimeZone>(first: NaiveDate, last: NaiveDate, tz: &Tz) -> Self {
        Self::new(
            local_instant(tz, NaiveDateTime::new(first, NaiveTime::default())),
            local_instant(tz, NaiveDateTime::new(last, end_of_day())),
        )
    }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::default() - Duration::nanoseconds(1)
}

/// The date choices of the filter screen
#[derive(strum::EnumString, strum::Display, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[strum(ascii_case_insensitive)]
pub enum DateRangePreset {
    #[strum(serialize = "today")]
    Today,
    #[strum(serialize = "week")]
    ThisWeek,
    #[strum(serialize = "month")]
    ThisMonth,
    #[default]
    #[strum(serialize = "all")]
    AllTime,
}

impl DateRangePreset {
    /**
    Resolves the preset around `now`, in its timezone.
    * Weeks go from Sunday to Saturday, like the calendar
    * `AllTime` has no window
    */
    pub fn window<Tz: TimeZone>(self, now: &DateTime<Tz>) -> Option<DateWindow> {
        let tz = now.timezone();
        let today = now.date_naive();

        match self {
            DateRangePreset::Today => Some(DateWindow::days(today, today, &tz)),
            DateRangePreset::ThisWeek => {
                let sunday = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
                let saturday = sunday + Duration::days(6);

                Some(DateWindow::days(sunday, saturday, &tz))
            }
            DateRangePreset::ThisMonth => {
                let first = today.with_day(1)?;
                let last = today.with_day(days_in_month(today.year(), today.month0()).ok()?)?;

                Some(DateWindow::days(first, last, &tz))
            }
            DateRangePreset::AllTime => None,
        }
    }
}

/// The price choices of the filter screen
#[derive(strum::EnumString, strum::Display, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[strum(ascii_case_insensitive)]
pub enum PriceFilter {
    #[strum(serialize = "free")]
    Free,
    #[strum(serialize = "under10")]
    Under10,
    #[strum(serialize = "under20")]
    Under20,
    #[default]
    #[strum(serialize = "any")]
    Any,
}

impl PriceFilter {
    /// Events whose price has no amount only show up for `Any`
    pub fn matches(self, price: &str) -> bool {
        if self == PriceFilter::Any {
            return true;
        }

        match parse_price_amount(price) {
            None => false,
            Some(amount) => match self {
                PriceFilter::Free => amount == 0.0,
                PriceFilter::Under10 => amount < 10.0,
                PriceFilter::Under20 => amount < 20.0,
                PriceFilter::Any => true,
            },
        }
    }
}

/// First amount in a display price like `£12.50`, ignoring the currency
pub fn parse_price_amount(price: &str) -> Option<f64> {
    if price.trim().eq_ignore_ascii_case(FREE_PRICE) {
        return Some(0.0);
    }

    PRICE_AMOUNT
        .captures(price)
        .and_then(|captures| captures[1].parse().ok())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySpec {
    pub text: String,
    pub category: Option<Category>,
    pub date_window: Option<DateWindow>,
    pub price: Option<PriceFilter>,
    /// Any of these genres, or every genre when empty
    pub genres: Vec<String>,
}

impl QuerySpec {
    pub fn text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn within(mut self, window: DateWindow) -> Self {
        self.date_window = Some(window);
        self
    }

    pub fn priced(mut self, price: PriceFilter) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_genres(mut self, genres: &[&str]) -> Self {
        self.genres = genres.iter().map(|genre| genre.to_string()).collect();
        self
    }

    pub(crate) fn matches_genres(&self, event: &Event) -> bool {
        self.genres.is_empty() || self.genres.iter().any(|genre| event.has_tag(genre))
    }
}
