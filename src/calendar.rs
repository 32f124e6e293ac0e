pub mod date_utils;
pub mod grid;
pub mod grouping;
