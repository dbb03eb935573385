//! Filter selections and their persistence.
//!
//! Selections live in a [`FilterState`]: one ordered set of chosen class
//! values per modulo column, where an empty set means "no restriction".
//! The [`FilterStore`] owns the session's state, restores it from a
//! [`StateStore`] on startup and writes it back after every mutation, so a
//! crash can never lose more than the in-flight change.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::data::{ModColumn, Row};

/// Key under which the filter state is persisted. Fixed across sessions and
/// versions; changing it would orphan previously saved selections.
pub const FILTERS_KEY: &str = "dashboardFilters";

/// Per-column selected class values; empty means the column admits all rows.
///
/// The serialized shape is a JSON object with exactly the three column keys,
/// each mapping to an array of integers. Unknown keys are rejected so that a
/// persisted state from some other scheme resets cleanly instead of being
/// half-understood.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterState {
    pub mod350: Vec<i64>,
    pub mod8000: Vec<i64>,
    pub mod20002: Vec<i64>,
}

impl FilterState {
    /// Selected values for `column`, in insertion order.
    pub fn selection(&self, column: ModColumn) -> &[i64] {
        match column {
            ModColumn::Mod350 => &self.mod350,
            ModColumn::Mod8000 => &self.mod8000,
            ModColumn::Mod20002 => &self.mod20002,
        }
    }

    fn selection_mut(&mut self, column: ModColumn) -> &mut Vec<i64> {
        match column {
            ModColumn::Mod350 => &mut self.mod350,
            ModColumn::Mod8000 => &mut self.mod8000,
            ModColumn::Mod20002 => &mut self.mod20002,
        }
    }

    /// True when no column restricts anything.
    pub fn is_unfiltered(&self) -> bool {
        ModColumn::ALL.iter().all(|&c| self.selection(c).is_empty())
    }

    /// True when `row` passes every column's selection.
    ///
    /// Conjunctive across columns, disjunctive within one: the row's class
    /// must be among the selected values for each restricted column.
    pub fn matches(&self, row: &Row) -> bool {
        ModColumn::ALL.iter().all(|&c| {
            let selected = self.selection(c);
            selected.is_empty() || selected.contains(&c.value(row))
        })
    }
}

/// Key-value persistence seam for session state.
///
/// Deliberately minimal: the dashboard stores one JSON document under one
/// well-known key. Implementations decide where the bytes live.
pub trait StateStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-memory store; state evaporates with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: AHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Owns the session's filter selections and keeps them persisted.
///
/// There is exactly one per session, reached through the dashboard context
/// rather than any global. Every mutating call writes the new state to the
/// backing store before returning.
pub struct FilterStore {
    state: FilterState,
    store: Box<dyn StateStore>,
}

impl FilterStore {
    /// Restore persisted selections from `store`, falling back to the
    /// all-empty default when nothing was persisted or the persisted shape
    /// is incompatible with the current one.
    pub fn new(store: Box<dyn StateStore>) -> Self {
        let state = match store.get(FILTERS_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(state) => state,
                Err(err) => {
                    warn!(%err, "persisted filter state is incompatible, resetting");
                    FilterState::default()
                }
            },
            None => FilterState::default(),
        };
        Self { state, store }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Selected values for `column`.
    pub fn selection(&self, column: ModColumn) -> &[i64] {
        self.state.selection(column)
    }

    /// Replace `column`'s selection with the complete new set supplied by
    /// its control, leaving other columns untouched, then persist.
    pub fn set_selection(&mut self, column: ModColumn, values: Vec<i64>) {
        *self.state.selection_mut(column) = values;
        self.persist();
    }

    /// Clear every column's selection, then persist.
    pub fn reset(&mut self) {
        self.state = FilterState::default();
        self.persist();
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.state) {
            Ok(json) => self.store.set(FILTERS_KEY, json),
            Err(err) => warn!(%err, "failed to serialize filter state"),
        }
    }
}
