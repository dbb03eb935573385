//! Dataset types shared across the dashboard.

use std::sync::Arc;

/// One validated record: a number and its three modulo classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub number: i64,
    pub mod350: i64,
    pub mod8000: i64,
    pub mod20002: i64,
}

/// The three filterable modulo-class columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModColumn {
    Mod350,
    Mod8000,
    Mod20002,
}

impl ModColumn {
    pub const ALL: [ModColumn; 3] = [ModColumn::Mod350, ModColumn::Mod8000, ModColumn::Mod20002];

    /// Column key as it appears in the CSV header and in persisted state.
    pub fn key(self) -> &'static str {
        match self {
            ModColumn::Mod350 => "mod350",
            ModColumn::Mod8000 => "mod8000",
            ModColumn::Mod20002 => "mod20002",
        }
    }

    /// Label shown above the filter control for this column.
    pub fn label(self) -> &'static str {
        match self {
            ModColumn::Mod350 => "Modulo 350",
            ModColumn::Mod8000 => "Modulo 8000",
            ModColumn::Mod20002 => "Modulo 20002",
        }
    }

    /// Value of this column in `row`.
    pub fn value(self, row: &Row) -> i64 {
        match self {
            ModColumn::Mod350 => row.mod350,
            ModColumn::Mod8000 => row.mod8000,
            ModColumn::Mod20002 => row.mod20002,
        }
    }
}

/// The full ordered sequence of valid rows for a session.
///
/// Built once by the loader and immutable afterwards; shared between views
/// behind an `Arc`. Row order is file order and every index into it stays
/// valid for the life of the session.
#[derive(Debug, Default)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Status of the session's one-shot dataset load.
///
/// `Loading` is the only transient state; the other three are terminal.
/// There is no refresh path, so once a terminal state is published it never
/// changes again.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    /// Loaded with at least one valid row.
    Ready(Arc<Dataset>),
    /// Loaded, but zero rows survived validation. Not an error.
    Empty,
    /// Load failed; holds the generic user-facing message.
    Error(String),
}
