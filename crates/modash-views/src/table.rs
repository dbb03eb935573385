//! Paginated table view over the filtered rows.

use egui::Ui;
use egui_extras::{Column, TableBuilder};

use modash_core::{DerivedView, Pager, Row};

/// Configuration for the data table.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Rows per logical page; pagination math works in these units.
    pub rows_per_page: usize,
    /// Rows of the current page actually rendered. Rows beyond this count
    /// toward the page and the readout but are never drawn; this is a hard
    /// truncation, not a scroll viewport.
    pub visible_rows: usize,
    pub striped_rows: bool,
    pub resizable_columns: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows_per_page: 100,
            visible_rows: 20,
            striped_rows: true,
            resizable_columns: true,
        }
    }
}

const COLUMN_TITLES: [&str; 4] = ["Value", "mod 350", "mod 8000", "mod 20002"];

/// Table view that displays the filtered rows page by page.
///
/// The current page is view-local state, reconciled against the latest
/// filtered count every frame; a filter change that leaves the page past
/// the end snaps back to page 1.
pub struct TableView {
    pub config: TableConfig,
    pager: Pager,
}

impl TableView {
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }

    pub fn with_config(config: TableConfig) -> Self {
        let pager = Pager::new(config.rows_per_page);
        Self { config, pager }
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn ui(&mut self, ui: &mut Ui, derived: &DerivedView) {
        let rows = derived.filtered.as_slice();
        self.pager.reconcile(rows.len());

        self.render_table(ui, self.visible_slice(rows));
        ui.add_space(8.0);
        self.render_controls(ui, rows.len());
    }

    /// Slice of the filtered rows drawn this frame: the current page, hard
    /// truncated to `visible_rows`.
    fn visible_slice<'a>(&self, rows: &'a [Row]) -> &'a [Row] {
        let page = &rows[self.pager.page_range(rows.len())];
        &page[..page.len().min(self.config.visible_rows)]
    }

    fn render_table(&self, ui: &mut Ui, rows: &[Row]) {
        let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.5;

        let mut builder = TableBuilder::new(ui)
            .striped(self.config.striped_rows)
            .resizable(self.config.resizable_columns)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .min_scrolled_height(0.0)
            .vscroll(false);

        for _ in &COLUMN_TITLES {
            builder = builder.column(Column::initial(120.0).at_least(80.0).clip(true));
        }

        builder
            .header(20.0, |mut header| {
                for title in COLUMN_TITLES {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(text_height, rows.len(), |row_index, mut table_row| {
                    let row = &rows[row_index];
                    for value in [row.number, row.mod350, row.mod8000, row.mod20002] {
                        table_row.col(|ui| {
                            ui.label(value.to_string());
                        });
                    }
                });
            });
    }

    fn render_controls(&mut self, ui: &mut Ui, row_count: usize) {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!self.pager.on_first_page(), egui::Button::new("Previous"))
                .clicked()
            {
                self.pager.previous();
            }

            ui.label(format!(
                "Page {} of {} ({} total rows)",
                self.pager.page(),
                self.pager.total_pages(row_count),
                row_count
            ));

            if ui
                .add_enabled(
                    !self.pager.on_last_page(row_count),
                    egui::Button::new("Next"),
                )
                .clicked()
            {
                self.pager.next(row_count);
            }
        });
    }
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(count: i64) -> Vec<Row> {
        (0..count)
            .map(|number| Row {
                number,
                mod350: number % 350,
                mod8000: number % 8000,
                mod20002: number % 20002,
            })
            .collect()
    }

    #[test]
    fn test_visible_slice_truncates_to_twenty() {
        let view = TableView::new();
        let rows = rows(250);

        let visible = view.visible_slice(&rows);
        assert_eq!(visible.len(), 20);
        assert_eq!(visible[0].number, 0);
        assert_eq!(visible[19].number, 19);
    }

    #[test]
    fn test_second_page_starts_at_row_100() {
        let mut view = TableView::new();
        let rows = rows(250);
        view.pager.next(rows.len());

        let visible = view.visible_slice(&rows);
        assert_eq!(visible.len(), 20);
        assert_eq!(visible[0].number, 100);
    }

    #[test]
    fn test_short_last_page_shows_what_remains() {
        let mut view = TableView::new();
        let rows = rows(215);
        view.pager.next(rows.len());
        view.pager.next(rows.len());

        // page 3 holds rows 200..215, fewer than the display cap
        let visible = view.visible_slice(&rows);
        assert_eq!(visible.len(), 15);
        assert_eq!(visible[0].number, 200);
    }

    #[test]
    fn test_config_drives_both_limits() {
        let view = TableView::with_config(TableConfig {
            rows_per_page: 10,
            visible_rows: 4,
            ..Default::default()
        });
        let rows = rows(30);

        assert_eq!(view.pager().total_pages(rows.len()), 3);
        assert_eq!(view.visible_slice(&rows).len(), 4);
    }

    #[test]
    fn test_empty_rows_render_an_empty_page() {
        let view = TableView::new();
        assert!(view.visible_slice(&[]).is_empty());
        assert_eq!(view.pager().total_pages(0), 1);
    }
}
