use crate::config::model::{CalendarConfig, Config, SearchConfig};
use crate::query::model::CategoryMapping;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, fs, io};
use tracing::{info, warn};

const DEFAULT_UPCOMING_LIMIT: usize = 3;
const DEFAULT_VISIBLE_MONTHS: u32 = 4;
const POSITIVE_NUMBER: &str = "a number greater than 0";

pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(|name| env::var(name).ok())
}

pub fn load_config_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
    let catalog_path = lookup("CATALOG_PATH").map(PathBuf::from);
    let category_mapping_path = lookup("CATEGORY_MAPPING_PATH").map(PathBuf::from);

    let search_config = SearchConfig {
        text: lookup("SEARCH_TEXT").unwrap_or_default(),
        category: load_parsed_config(&lookup, "SEARCH_CATEGORY", "a category like 'Concert'")?,
        date_range: load_parsed_config(&lookup, "SEARCH_DATE_RANGE", "today, week, month or all")?
            .unwrap_or_default(),
        price: load_parsed_config(&lookup, "SEARCH_PRICE", "free, under10, under20 or any")?
            .unwrap_or_default(),
        upcoming_limit: load_positive_config(&lookup, "UPCOMING_LIMIT")?
            .unwrap_or(DEFAULT_UPCOMING_LIMIT),
    };

    let month: Option<u32> = load_parsed_config(&lookup, "CALENDAR_MONTH", "a month from 1 to 12")?;
    let month0 = match month {
        Some(month @ 1..=12) => Some(month - 1),
        Some(month) => {
            return Err(ConfigError::Invalid {
                name: "CALENDAR_MONTH",
                value: month.to_string(),
                expected: "a month from 1 to 12",
            })
        }
        None => None,
    };

    let calendar_config = CalendarConfig {
        year: load_parsed_config(&lookup, "CALENDAR_YEAR", "a year like 2024")?,
        month0,
        visible_months: load_positive_config(&lookup, "VISIBLE_MONTHS")?
            .unwrap_or(DEFAULT_VISIBLE_MONTHS),
    };

    Ok(Config {
        catalog_path,
        category_mapping_path,
        search_config,
        calendar_config,
    })
}

fn load_parsed_config<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                name,
                value,
                expected,
            }),
    }
}

fn load_positive_config<T: FromStr + Default + PartialEq + Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match load_parsed_config::<T>(lookup, name, POSITIVE_NUMBER)? {
        Some(value) if value == T::default() => Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
            expected: POSITIVE_NUMBER,
        }),
        parsed => Ok(parsed),
    }
}

/// Categories only match events once they're mapped to tags, so an unset
/// mapping leaves every category but `All` empty
#[tracing::instrument(skip(config))]
pub fn load_category_mapping(config: &Config) -> Result<CategoryMapping, ConfigError> {
    match &config.category_mapping_path {
        None => {
            warn!("No category mapping provided. Categories won't match any event.");
            Ok(CategoryMapping::new())
        }
        Some(path) => {
            let mapping = read_category_mapping(path)?;

            info!("Loaded category mapping from {}", path.display());

            Ok(mapping)
        }
    }
}

fn read_category_mapping(path: &Path) -> Result<CategoryMapping, ConfigError> {
    let json = fs::read_to_string(path).map_err(ConfigError::MappingIo)?;

    serde_json::from_str(&json).map_err(ConfigError::MappingJson)
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    MappingIo(io::Error),
    MappingJson(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid {
                name,
                value,
                expected,
            } => write!(
                f,
                "Invalid config '{}' ('{}'). Expected {}.",
                name, value, expected
            ),
            ConfigError::MappingIo(err) => {
                write!(f, "Couldn't read the category mapping: {}", err)
            }
            ConfigError::MappingJson(err) => {
                write!(f, "Category mapping is not valid: {}", err)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
