use super::date_utils::{validate_month, RangeError};
use crate::catalog::model::Event;
use chrono::{Datelike, Local, NaiveDate, TimeZone};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Events keyed by day of month, each list in catalog order
pub type DayBucket<'a> = BTreeMap<u32, Vec<&'a Event>>;

/// Groups the events of `month0` of `year` by day, in the host's local calendar
pub fn group_by_day(
    catalog: &[Event],
    year: i32,
    month0: u32,
) -> Result<DayBucket<'_>, RangeError> {
    group_by_day_in(catalog, year, month0, &Local)
}

#[tracing::instrument(skip(catalog, tz), fields(catalog_size = catalog.len()))]
pub fn group_by_day_in<'a, Tz: TimeZone>(
    catalog: &'a [Event],
    year: i32,
    month0: u32,
    tz: &Tz,
) -> Result<DayBucket<'a>, RangeError> {
    validate_month(month0)?;

    let mut buckets = DayBucket::new();

    for event in catalog {
        let starts_at = match event.starts_at_in(tz) {
            Ok(starts_at) => starts_at,
            Err(err) => {
                warn!("Not placing event on the calendar: {}", err);
                continue;
            }
        };

        if starts_at.year() == year && starts_at.month0() == month0 {
            buckets.entry(starts_at.day()).or_default().push(event);
        }
    }

    debug!("{} days with events", buckets.len());

    Ok(buckets)
}

pub fn has_event(bucket: &DayBucket, day: u32) -> bool {
    bucket.contains_key(&day)
}

/// Events happening on `date`, as the day view lists them
#[tracing::instrument(skip(catalog, tz), fields(catalog_size = catalog.len()))]
pub fn events_on_date<'a, Tz: TimeZone>(
    catalog: &'a [Event],
    date: NaiveDate,
    tz: &Tz,
) -> Vec<&'a Event> {
    catalog
        .iter()
        .filter(|event| match event.starts_at_in(tz) {
            Ok(starts_at) => starts_at.date_naive() == date,
            Err(err) => {
                warn!("Leaving event out of the day: {}", err);
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn event(id: &str, date: &str) -> Event {
        Event::new(
            id.to_string(),
            format!("Event {}", id),
            "The Flapper".to_string(),
            "Cambrian Wharf, Birmingham".to_string(),
            date.to_string(),
            "£15".to_string(),
            String::new(),
            vec!["Rock".to_string()],
            52.48,
            -1.9,
        )
    }

    fn ids(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    #[test_log::test]
    fn should_keep_catalog_order_within_a_day() {
        let catalog = vec![
            event("late", "2024-06-15T22:00:00Z"),
            event("early", "2024-06-15T10:00:00Z"),
            event("other", "2024-06-16T10:00:00Z"),
        ];

        let buckets = group_by_day_in(&catalog, 2024, 5, &Utc).unwrap();

        assert_eq!(buckets.len(), 2);
        assert_eq!(ids(&buckets[&15]), vec!["late", "early"]);
        assert_eq!(ids(&buckets[&16]), vec!["other"]);
    }

    #[test_log::test]
    fn should_leave_out_other_months_and_years() {
        let catalog = vec![
            event("may", "2024-05-15T10:00:00Z"),
            event("june", "2024-06-15T10:00:00Z"),
            event("next-june", "2025-06-15T10:00:00Z"),
        ];

        let buckets = group_by_day_in(&catalog, 2024, 5, &Utc).unwrap();

        assert_eq!(buckets.keys().copied().collect::<Vec<_>>(), vec![15]);
        assert!(has_event(&buckets, 15));
        assert!(!has_event(&buckets, 16));
    }

    #[test_log::test]
    fn should_bucket_by_the_day_in_the_given_timezone() {
        let catalog = vec![event("1", "2024-06-30T23:30:00Z")];
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

        assert!(group_by_day_in(&catalog, 2024, 5, &plus_two)
            .unwrap()
            .is_empty());
        assert!(has_event(
            &group_by_day_in(&catalog, 2024, 6, &plus_two).unwrap(),
            1
        ));
    }

    #[test_log::test]
    fn when_a_date_is_malformed_should_skip_only_that_event() {
        let catalog = vec![
            event("broken", "someday"),
            event("fine", "2024-06-15T10:00:00Z"),
        ];

        let buckets = group_by_day_in(&catalog, 2024, 5, &Utc).unwrap();

        assert_eq!(ids(&buckets[&15]), vec!["fine"]);
    }

    #[test_log::test]
    fn when_nothing_happens_should_be_empty() {
        let buckets = group_by_day_in(&[], 2024, 5, &Utc).unwrap();

        assert!(buckets.is_empty());
    }

    #[test_log::test]
    fn when_month_is_out_of_range_should_fail() {
        assert_eq!(
            group_by_day_in(&[], 2024, 12, &Utc),
            Err(RangeError::MonthIndex(12))
        );
    }

    #[test_log::test]
    fn should_list_events_on_a_date() {
        let catalog = vec![
            event("1", "2024-06-15T10:00:00Z"),
            event("2", "2024-06-16T10:00:00Z"),
            event("3", "2024-06-15T21:00:00Z"),
            event("4", "not a date"),
        ];
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        assert_eq!(ids(&events_on_date(&catalog, date, &Utc)), vec!["1", "3"]);
    }
}
