//! The dashboard screen.

use egui::Ui;

use modash_core::LoadState;
use modash_ui::FaultCell;

use crate::{DashboardContext, FilterPanel, TableView};

/// Top-level screen: heading, load status, filter row, paginated table.
///
/// Until the load reaches a terminal state only the status line renders.
/// Once the dataset is ready the screen derives its frame through the
/// context's memoized derivation and hands the result to the child views.
pub struct DashboardScreen {
    filter_panel: FilterPanel,
    table: TableView,
    table_fault: FaultCell,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            filter_panel: FilterPanel::new(),
            table: TableView::new(),
            table_fault: FaultCell::new(),
        }
    }

    pub fn ui(&mut self, ctx: &DashboardContext, ui: &mut Ui) {
        ui.heading("Number Modulo Dashboard");
        ui.add_space(8.0);

        let load_state = ctx.load_state.read().clone();
        let dataset = match load_state {
            LoadState::Loading => {
                ui.label("Loading data...");
                return;
            }
            LoadState::Error(message) => {
                ui.colored_label(ui.visuals().error_fg_color, message);
                return;
            }
            LoadState::Empty => {
                ui.label("No data available");
                return;
            }
            LoadState::Ready(dataset) => dataset,
        };

        let derived = {
            let filters = ctx.filters.read();
            ctx.derivation.write().get(&dataset, filters.state())
        };

        self.filter_panel.ui(ctx, ui, &derived.options);
        ui.add_space(8.0);

        let table = &mut self.table;
        self.table_fault.show(ui, "Error loading data table", |ui| {
            table.ui(ui, &derived);
        });
    }
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}
