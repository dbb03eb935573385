//! Data loading and persistence for the modulo dashboard
//!
//! One-shot CSV dataset loading with row validation, plus the JSON file
//! store backing session state.

pub mod error;
pub mod loader;
pub mod store;

pub use error::LoadError;
pub use loader::{load, parse_rows, DEFAULT_DATASET_PATH};
pub use store::JsonFileStore;
