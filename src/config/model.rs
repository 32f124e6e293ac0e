use crate::query::model::{Category, DateRangePreset, PriceFilter};
use std::path::PathBuf;

#[derive(Debug)]
pub struct Config {
    /// Bundled sample catalog when not set
    pub catalog_path: Option<PathBuf>,
    pub category_mapping_path: Option<PathBuf>,
    pub search_config: SearchConfig,
    pub calendar_config: CalendarConfig,
}

#[derive(Debug, Default)]
pub struct SearchConfig {
    pub text: String,
    pub category: Option<Category>,
    pub date_range: DateRangePreset,
    pub price: PriceFilter,
    pub upcoming_limit: usize,
}

#[derive(Debug)]
pub struct CalendarConfig {
    pub year: Option<i32>,
    /// 0 is January
    pub month0: Option<u32>,
    pub visible_months: u32,
}
