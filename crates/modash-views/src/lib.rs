//! Dashboard views
//!
//! The single dashboard screen and the shared context it renders from.

mod dashboard;
mod filters;
mod table;

pub use dashboard::DashboardScreen;
pub use filters::FilterPanel;
pub use table::{TableConfig, TableView};

use std::sync::Arc;

use parking_lot::RwLock;

use modash_core::{DerivationCache, FilterStore, LoadState};

/// Shared state handed to every view each frame.
///
/// One instance exists per session. It is passed explicitly down the view
/// tree rather than living in any global, so each control's access to the
/// filter state is visible at its call site.
#[derive(Clone)]
pub struct DashboardContext {
    /// Status of the one-shot dataset load.
    pub load_state: Arc<RwLock<LoadState>>,

    /// The session's filter selections.
    pub filters: Arc<RwLock<FilterStore>>,

    /// Memo over the pure derivation.
    pub derivation: Arc<RwLock<DerivationCache>>,

    /// Tokio runtime handle for background work.
    pub runtime_handle: tokio::runtime::Handle,
}

impl DashboardContext {
    pub fn new(filters: FilterStore, runtime_handle: tokio::runtime::Handle) -> Self {
        Self {
            load_state: Arc::new(RwLock::new(LoadState::Loading)),
            filters: Arc::new(RwLock::new(filters)),
            derivation: Arc::new(RwLock::new(DerivationCache::new())),
            runtime_handle,
        }
    }
}
