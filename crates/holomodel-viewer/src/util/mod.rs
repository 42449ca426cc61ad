pub mod config;
pub mod datasets;
