use super::model::Event;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

// Note: optional fields go through the custom deserializers, since catalogs
// send them missing, null or as empty strings
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub venue_name: String,
    pub address: String,
    /// Left empty when it isn't text, so only date-based views skip the event
    #[serde(default, deserialize_with = "deserialize_date")]
    pub date: String,
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub genre_tags: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_optional_str")]
    pub image_url: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, deserialize_with = "deserialize_optional_str")]
    pub ticket_url: Option<String>,
}

impl EventRecord {
    pub fn to_model(self) -> Event {
        Event {
            id: self.id,
            title: self.title,
            venue_name: self.venue_name,
            address: self.address,
            date: self.date,
            price: self.price,
            description: self.description,
            genre_tags: self.genre_tags,
            image_url: self.image_url,
            latitude: self.latitude,
            longitude: self.longitude,
            ticket_url: self.ticket_url,
        }
    }
}

fn deserialize_tags<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(tag) => Some(tag),
                other => {
                    warn!("Ignoring non-text genre tag: {}", other);
                    None
                }
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn deserialize_date<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(date) => date,
        other => {
            warn!("Ignoring event date that is not text: {}", other);
            String::new()
        }
    })
}

fn deserialize_optional_str<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}
