//! One-shot CSV dataset loading
//!
//! Read the whole file, parse it with headers, coerce the four named
//! columns to integers and silently drop any row that fails validation.
//! A structural CSV error abandons the load outright; there is no partial
//! acceptance and no refresh path afterwards.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::{debug, info, warn};

use modash_core::{ModColumn, Row};

use crate::error::LoadError;

/// Location of the dataset, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "data/dataset_large.csv";

/// Load and validate the dataset at `path`.
///
/// File and parse work runs on the blocking pool; the caller maps the
/// outcome onto the session's [`LoadState`](modash_core::LoadState).
pub async fn load(path: PathBuf) -> Result<Vec<Row>, LoadError> {
    tokio::task::spawn_blocking(move || load_sync(&path)).await?
}

fn load_sync(path: &Path) -> Result<Vec<Row>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Transport {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "dataset file read");

    parse_rows(&text)
}

/// Parse CSV text into validated rows.
///
/// Columns are located by header name, so their order in the file is
/// irrelevant and extra columns are ignored. A row survives only if all
/// four required cells coerce to integers; everything else is dropped
/// without individual reporting. A missing required header therefore drops
/// every row rather than failing the parse.
pub fn parse_rows(text: &str) -> Result<Vec<Row>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let find = |name: &str| headers.iter().position(|h| h == name);
    let number_col = find("number");
    let mod350_col = find(ModColumn::Mod350.key());
    let mod8000_col = find(ModColumn::Mod8000.key());
    let mod20002_col = find(ModColumn::Mod20002.key());

    let mut rows = Vec::new();
    let mut parsed = 0usize;

    for record in reader.records() {
        // structural error: abandon the whole load
        let record = record?;
        parsed += 1;

        let cell = |col: Option<usize>| col.and_then(|i| record.get(i)).and_then(coerce_integer);

        if let (Some(number), Some(mod350), Some(mod8000), Some(mod20002)) = (
            cell(number_col),
            cell(mod350_col),
            cell(mod8000_col),
            cell(mod20002_col),
        ) {
            rows.push(Row {
                number,
                mod350,
                mod8000,
                mod20002,
            });
        }
    }

    let dropped = parsed - rows.len();
    info!(parsed, valid = rows.len(), dropped, "dataset rows validated");
    if rows.is_empty() && parsed > 0 {
        warn!("no rows survived validation");
    }

    Ok(rows)
}

/// Numeric coercion for one cell: accepted iff it holds a finite number
/// with no fractional part that fits in an `i64`.
fn coerce_integer(cell: &str) -> Option<i64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    // "42.0" and "1e3" still count as integers after coercion
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value >= -(2f64.powi(63)) && value < 2f64.powi(63)
    {
        Some(value as i64)
    } else {
        None
    }
}
