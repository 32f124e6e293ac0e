use crate::calendar::date_utils::local_instant;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt::{Display, Formatter};

const FLOATING_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub venue_name: String,
    pub address: String,
    /// Start instant, as supplied by the catalog
    pub date: String,
    pub price: String,
    pub description: String,
    pub genre_tags: Vec<String>,
    pub image_url: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub ticket_url: Option<String>,
}

impl Event {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        title: String,
        venue_name: String,
        address: String,
        date: String,
        price: String,
        description: String,
        genre_tags: Vec<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id,
            title,
            venue_name,
            address,
            date,
            price,
            description,
            genre_tags,
            image_url: None,
            latitude,
            longitude,
            ticket_url: None,
        }
    }

    /**
    Parses the start instant.
    * `2024-06-15T18:00:00Z` (RFC 3339) keeps its offset
    * `2024-06-15T18:00:00` and `2024-06-15` are read in the host's local calendar
    */
    pub fn starts_at(&self) -> Result<DateTime<FixedOffset>, MalformedDate> {
        parse_instant(&self.date).ok_or_else(|| MalformedDate {
            event_id: self.id.clone(),
            value: self.date.clone(),
        })
    }

    pub fn starts_at_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Tz>, MalformedDate> {
        Ok(self.starts_at()?.with_timezone(tz))
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();

        self.genre_tags
            .iter()
            .any(|genre| genre.to_lowercase() == tag)
    }
}

fn parse_instant(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant);
    }

    let naive = NaiveDateTime::parse_from_str(value, FLOATING_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_ONLY_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    Some(local_instant(&Local, naive).fixed_offset())
}

/// The event's `date` is not an instant we can place on a calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedDate {
    pub event_id: String,
    pub value: String,
}

impl Display for MalformedDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Event '{}' has a malformed date '{}'",
            self.event_id, self.value
        )
    }
}

impl std::error::Error for MalformedDate {}
