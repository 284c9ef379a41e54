//! Data module - metadata CSV loading and cleaning

mod cleaner;
mod loader;

pub use cleaner::{clean_metadata, CleanError, REQUIRED_COLUMNS, UNKNOWN_JOURNAL};
pub use loader::{LoaderError, MetadataLoader};
