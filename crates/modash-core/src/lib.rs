//! Core state and derivation logic for the modulo dashboard
//!
//! This crate holds everything the UI layer derives its frames from: the
//! dataset types, the per-column filter selections and their persistence,
//! the pure derivation of filtered rows and option sets, and pagination.

pub mod data;
pub mod derive;
pub mod filter;
pub mod pager;

pub use data::{Dataset, LoadState, ModColumn, Row};
pub use derive::{derive, DerivationCache, DerivedView, OptionSets};
pub use filter::{FilterState, FilterStore, MemoryStore, StateStore, FILTERS_KEY};
pub use pager::Pager;
