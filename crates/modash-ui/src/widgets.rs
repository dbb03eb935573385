//! Reusable dashboard widgets.

use egui::Ui;

/// Multi-select dropdown over integer class values.
///
/// Renders as a menu button showing the current selection; the popup lists
/// one checkbox per option and stays open across toggles so several values
/// can be picked in one opening. Returns the complete new selection whenever
/// it changed this frame; callers replace the previous set wholesale rather
/// than patching it.
pub fn multi_select(
    ui: &mut Ui,
    id_source: &str,
    options: &[i64],
    selected: &[i64],
) -> Option<Vec<i64>> {
    let mut new_selection = None;

    ui.push_id(id_source, |ui| {
        ui.menu_button(summary_text(selected), |ui| {
            ui.set_min_width(120.0);
            for &value in options {
                let mut checked = selected.contains(&value);
                if ui.checkbox(&mut checked, value.to_string()).changed() {
                    new_selection = Some(toggled(selected, value, checked));
                }
            }
        });
    });

    new_selection
}

/// Complete replacement selection after toggling one value on or off.
fn toggled(selected: &[i64], value: i64, on: bool) -> Vec<i64> {
    let mut next = selected.to_vec();
    if on {
        if !next.contains(&value) {
            next.push(value);
        }
    } else {
        next.retain(|&v| v != value);
    }
    next
}

/// Summary shown on the closed control.
fn summary_text(selected: &[i64]) -> String {
    if selected.is_empty() {
        "All".to_string()
    } else {
        selected
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
