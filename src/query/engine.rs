use super::model::{Category, CategoryMapping, DateWindow, QuerySpec};
use crate::catalog::model::Event;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use tracing::{debug, warn};

/**
Filters the catalog, keeping its order.
Text, category, genres, price and date window must all match.
*/
#[tracing::instrument(
    skip(catalog, spec, categories),
    fields(catalog_size = catalog.len(), text = %spec.text, category = ?spec.category)
)]
pub fn search<'a>(
    catalog: &'a [Event],
    spec: &QuerySpec,
    categories: &CategoryMapping,
) -> Vec<&'a Event> {
    let needle = spec.text.to_lowercase();
    let category_tags = category_tags(spec.category, categories);

    let results = catalog
        .iter()
        .filter(|event| matches_text(event, &needle))
        .filter(|event| {
            category_tags.map_or(true, |tags| tags.iter().any(|tag| event.has_tag(tag)))
        })
        .filter(|event| spec.matches_genres(event))
        .filter(|event| spec.price.map_or(true, |price| price.matches(&event.price)))
        .filter(|event| spec.date_window.map_or(true, |window| is_within(event, &window)))
        .collect::<Vec<&Event>>();

    debug!("Matched {} of {} events", results.len(), catalog.len());

    results
}

/// `None` when every event is in the category
fn category_tags(category: Option<Category>, categories: &CategoryMapping) -> Option<&[String]> {
    match category {
        None | Some(Category::All) => None,
        Some(category) => Some(categories.tags_for(category).unwrap_or_else(|| {
            warn!("Category '{}' has no tags configured, nothing will match", category);
            &[][..]
        })),
    }
}

fn matches_text(event: &Event, needle: &str) -> bool {
    needle.is_empty()
        || event.title.to_lowercase().contains(needle)
        || event.venue_name.to_lowercase().contains(needle)
        || event.address.to_lowercase().contains(needle)
        || event
            .genre_tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

fn is_within(event: &Event, window: &DateWindow) -> bool {
    match event.starts_at() {
        Ok(starts_at) => window.contains(&starts_at),
        Err(err) => {
            warn!("Leaving event out of the date window: {}", err);
            false
        }
    }
}

/// The next `limit` events starting at or after `now`, soonest first
#[tracing::instrument(skip(catalog), fields(catalog_size = catalog.len()))]
pub fn upcoming(catalog: &[Event], now: DateTime<Utc>, limit: usize) -> Vec<&Event> {
    catalog
        .iter()
        .filter_map(|event| match event.starts_at() {
            Ok(starts_at) => Some((starts_at.with_timezone(&Utc), event)),
            Err(err) => {
                warn!("Leaving event out of upcoming: {}", err);
                None
            }
        })
        .filter(|(starts_at, _)| *starts_at >= now)
        .sorted_by_key(|(starts_at, _)| *starts_at)
        .take(limit)
        .map(|(_, event)| event)
        .collect()
}

pub fn find_by_id<'a>(catalog: &'a [Event], id: &str) -> Option<&'a Event> {
    catalog.iter().find(|event| event.id == id)
}

/// Every genre tag in the catalog, sorted. Tags differing only in case are
/// listed once, spelled as they first appear.
pub fn all_genres(catalog: &[Event]) -> Vec<&str> {
    catalog
        .iter()
        .flat_map(|event| event.genre_tags.iter().map(String::as_str))
        .unique_by(|genre| genre.to_lowercase())
        .sorted()
        .collect()
}
