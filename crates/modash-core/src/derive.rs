//! Pure derivation of the filtered row set and the filter option sets.
//!
//! Everything a frame shows is a function of exactly two inputs: the
//! immutable dataset and the current [`FilterState`]. [`derive`] computes
//! that function; [`DerivationCache`] memoizes it so the per-frame cost is
//! a pointer comparison and a state equality check.

use std::sync::Arc;

use ahash::AHashSet;

use crate::data::{Dataset, ModColumn, Row};
use crate::filter::FilterState;

/// Result of one derivation pass.
#[derive(Debug, Clone)]
pub struct DerivedView {
    /// Rows passing every column's selection, in dataset order.
    pub filtered: Arc<Vec<Row>>,
    /// Values offered by each filter control.
    pub options: OptionSets,
}

/// Distinct values per column over the entire dataset, ascending.
///
/// Computed from the full dataset rather than the filtered rows, so
/// narrowing one column never shrinks the choices offered anywhere,
/// including in that same column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSets {
    pub mod350: Vec<i64>,
    pub mod8000: Vec<i64>,
    pub mod20002: Vec<i64>,
}

impl OptionSets {
    pub fn for_column(&self, column: ModColumn) -> &[i64] {
        match column {
            ModColumn::Mod350 => &self.mod350,
            ModColumn::Mod8000 => &self.mod8000,
            ModColumn::Mod20002 => &self.mod20002,
        }
    }

    fn for_column_mut(&mut self, column: ModColumn) -> &mut Vec<i64> {
        match column {
            ModColumn::Mod350 => &mut self.mod350,
            ModColumn::Mod8000 => &mut self.mod8000,
            ModColumn::Mod20002 => &mut self.mod20002,
        }
    }
}

/// Compute the derived view for one (dataset, filters) pair.
///
/// Pure: same inputs, same output, no side effects. Row order of the input
/// is preserved; the filtered set is always a subsequence of the dataset.
pub fn derive(dataset: &Dataset, filters: &FilterState) -> DerivedView {
    let filtered: Vec<Row> = dataset
        .rows()
        .iter()
        .filter(|row| filters.matches(row))
        .copied()
        .collect();

    let mut options = OptionSets::default();
    for column in ModColumn::ALL {
        let mut distinct = AHashSet::new();
        for row in dataset.rows() {
            distinct.insert(column.value(row));
        }
        let mut values: Vec<i64> = distinct.into_iter().collect();
        values.sort_unstable();
        *options.for_column_mut(column) = values;
    }

    DerivedView {
        filtered: Arc::new(filtered),
        options,
    }
}

/// Single-entry memo over [`derive`].
///
/// The dataset is set once per session, so `Arc` identity plus filter
/// state equality fully determine the result. Holding the `Arc` in the
/// entry is free; the dataset outlives every cache anyway.
#[derive(Default)]
pub struct DerivationCache {
    entry: Option<CacheEntry>,
}

struct CacheEntry {
    dataset: Arc<Dataset>,
    filters: FilterState,
    view: DerivedView,
}

impl DerivationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The derived view for the given inputs, recomputed only when either
    /// input changed since the previous call.
    pub fn get(&mut self, dataset: &Arc<Dataset>, filters: &FilterState) -> DerivedView {
        if let Some(entry) = &self.entry {
            if Arc::ptr_eq(&entry.dataset, dataset) && entry.filters == *filters {
                return entry.view.clone();
            }
        }

        let view = derive(dataset, filters);
        self.entry = Some(CacheEntry {
            dataset: Arc::clone(dataset),
            filters: filters.clone(),
            view: view.clone(),
        });
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Numbers 1..=10 with alternating mod350 parity, as a small stand-in
    /// for the real dataset shape.
    fn alternating_dataset() -> Dataset {
        let rows = (1..=10)
            .map(|number| Row {
                number,
                mod350: number % 2,
                mod8000: number % 3,
                mod20002: number % 5,
            })
            .collect();
        Dataset::new(rows)
    }

    #[test]
    fn test_empty_filters_pass_every_row() {
        let dataset = alternating_dataset();
        let view = derive(&dataset, &FilterState::default());
        assert_eq!(view.filtered.len(), 10);
    }

    #[test]
    fn test_filtered_rows_keep_dataset_order() {
        let dataset = alternating_dataset();
        let filters = FilterState {
            mod350: vec![1],
            ..Default::default()
        };
        let view = derive(&dataset, &filters);
        let numbers: Vec<i64> = view.filtered.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_and_semantics_across_columns() {
        let dataset = alternating_dataset();
        let filters = FilterState {
            mod350: vec![1],
            mod8000: vec![0],
            ..Default::default()
        };
        let view = derive(&dataset, &filters);
        let numbers: Vec<i64> = view.filtered.iter().map(|r| r.number).collect();
        // odd and divisible by three
        assert_eq!(numbers, vec![3, 9]);
    }

    #[test]
    fn test_options_are_sorted_distinct() {
        let dataset = alternating_dataset();
        let view = derive(&dataset, &FilterState::default());
        assert_eq!(view.options.mod350, vec![0, 1]);
        assert_eq!(view.options.mod8000, vec![0, 1, 2]);
        assert_eq!(view.options.mod20002, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_options_do_not_cascade() {
        let dataset = alternating_dataset();
        let unfiltered = derive(&dataset, &FilterState::default());

        let filters = FilterState {
            mod350: vec![1],
            ..Default::default()
        };
        let narrowed = derive(&dataset, &filters);

        assert_eq!(narrowed.options, unfiltered.options);
    }

    #[test]
    fn test_zero_match_combination_keeps_full_options() {
        let dataset = alternating_dataset();
        let filters = FilterState {
            mod350: vec![0],
            mod8000: vec![1],
            mod20002: vec![0],
        };
        let view = derive(&dataset, &filters);
        let numbers: Vec<i64> = view.filtered.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![10]);

        let filters = FilterState {
            mod350: vec![0],
            mod8000: vec![1],
            mod20002: vec![1],
        };
        let view = derive(&dataset, &filters);
        assert!(view.filtered.is_empty());
        assert_eq!(view.options.mod350, vec![0, 1]);
    }

    #[test]
    fn test_cache_reuses_unchanged_inputs() {
        let dataset = Arc::new(alternating_dataset());
        let filters = FilterState {
            mod350: vec![1],
            ..Default::default()
        };
        let mut cache = DerivationCache::new();

        let first = cache.get(&dataset, &filters);
        let second = cache.get(&dataset, &filters);
        assert!(Arc::ptr_eq(&first.filtered, &second.filtered));
    }

    #[test]
    fn test_cache_recomputes_on_filter_change() {
        let dataset = Arc::new(alternating_dataset());
        let mut cache = DerivationCache::new();

        let first = cache.get(&dataset, &FilterState::default());
        let filters = FilterState {
            mod8000: vec![2],
            ..Default::default()
        };
        let second = cache.get(&dataset, &filters);
        assert!(!Arc::ptr_eq(&first.filtered, &second.filtered));
        assert_eq!(second.filtered.len(), 3);
    }

    #[test]
    fn test_cache_recomputes_on_dataset_change() {
        let a = Arc::new(alternating_dataset());
        let b = Arc::new(alternating_dataset());
        let mut cache = DerivationCache::new();

        let first = cache.get(&a, &FilterState::default());
        let second = cache.get(&b, &FilterState::default());
        assert!(!Arc::ptr_eq(&first.filtered, &second.filtered));
    }
}
