pub mod calendar;
pub mod catalog;
pub mod config;
pub mod navigation;
pub mod query;
pub mod tracing;
