pub mod dto;
pub mod loader;
pub mod model;
