//! Filter controls: one multi-select per modulo column.

use egui::Ui;
use tracing::debug;

use modash_core::{ModColumn, OptionSets};
use modash_ui::{multi_select, FaultCell};

use crate::DashboardContext;

/// Row of per-column filter controls plus the reset action.
///
/// Each control renders inside its own fault boundary, so one failing
/// dropdown degrades to an inline message while the others keep working.
pub struct FilterPanel {
    faults: [FaultCell; 3],
}

impl FilterPanel {
    pub fn new() -> Self {
        Self {
            faults: Default::default(),
        }
    }

    pub fn ui(&mut self, ctx: &DashboardContext, ui: &mut Ui, options: &OptionSets) {
        ui.horizontal_top(|ui| {
            for (slot, column) in ModColumn::ALL.into_iter().enumerate() {
                let fallback = format!("Error loading filter {}", column.label());
                self.faults[slot].show(ui, &fallback, |ui| {
                    ui.vertical(|ui| {
                        ui.strong(column.label());

                        let selection = ctx.filters.read().selection(column).to_vec();
                        let values = options.for_column(column);
                        if let Some(next) = multi_select(ui, column.key(), values, &selection) {
                            debug!(column = column.key(), selected = next.len(), "filter changed");
                            ctx.filters.write().set_selection(column, next);
                        }
                    });
                });
            }

            ui.vertical(|ui| {
                // line the button up with the dropdowns under their labels
                ui.add_space(22.0);
                let restricted = !ctx.filters.read().state().is_unfiltered();
                if ui
                    .add_enabled(restricted, egui::Button::new("Clear filters"))
                    .clicked()
                {
                    debug!("filters cleared");
                    ctx.filters.write().reset();
                }
            });
        });
    }
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::new()
    }
}
