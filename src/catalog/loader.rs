use super::dto::EventRecord;
use super::model::Event;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::{fs, io};
use tracing::info;

const SAMPLE_CATALOG: &str = include_str!("../../data/events.json");

/// Reads a full catalog snapshot, keeping the order of the records
pub fn parse_catalog(json: &str) -> Result<Vec<Event>, CatalogError> {
    let records = serde_json::from_str::<Vec<EventRecord>>(json)?;

    Ok(records.into_iter().map(EventRecord::to_model).collect())
}

#[tracing::instrument]
pub fn load_catalog(path: &Path) -> Result<Vec<Event>, CatalogError> {
    let json = fs::read_to_string(path)?;
    let catalog = parse_catalog(&json)?;

    info!("Loaded {} events", catalog.len());

    Ok(catalog)
}

/// The seven Birmingham events bundled with the app
pub fn sample_catalog() -> Result<Vec<Event>, CatalogError> {
    parse_catalog(SAMPLE_CATALOG)
}

#[derive(Debug)]
pub enum CatalogError {
    Io(io::Error),
    InvalidJson(serde_json::Error),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "Couldn't read the catalog: {}", err),
            CatalogError::InvalidJson(err) => write!(f, "Catalog is not valid: {}", err),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::InvalidJson(err) => Some(err),
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::InvalidJson(err)
    }
}
