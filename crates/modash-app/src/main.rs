//! Modulo dashboard application entry point.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use eframe::egui;
use tracing::{error, info};

use modash_core::{Dataset, FilterStore, LoadState};
use modash_data::{JsonFileStore, DEFAULT_DATASET_PATH};
use modash_ui::{apply_theme, Theme};
use modash_views::{DashboardContext, DashboardScreen};

/// Location of the persisted session state, next to the dataset.
const STATE_FILE: &str = "data/filters.json";

struct ModuloDashboardApp {
    context: DashboardContext,
    screen: DashboardScreen,
    /// Keeps the runtime alive for the lifetime of the app.
    _runtime: tokio::runtime::Runtime,
}

impl ModuloDashboardApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        apply_theme(&cc.egui_ctx, &Theme::default());

        let runtime = tokio::runtime::Runtime::new().unwrap();

        let filters = FilterStore::new(Box::new(JsonFileStore::open(STATE_FILE)));
        let context = DashboardContext::new(filters, runtime.handle().clone());

        let app = Self {
            context,
            screen: DashboardScreen::new(),
            _runtime: runtime,
        };
        app.spawn_dataset_load(cc.egui_ctx.clone());
        app
    }

    /// Kick off the session's single dataset load.
    ///
    /// Fire and forget: the task publishes a terminal [`LoadState`] and
    /// requests a repaint. There is no retry and no refresh afterwards.
    fn spawn_dataset_load(&self, egui_ctx: egui::Context) {
        let load_state = self.context.load_state.clone();
        let path = PathBuf::from(DEFAULT_DATASET_PATH);

        self.context.runtime_handle.spawn(async move {
            info!(path = %path.display(), "loading dataset");
            let state = match modash_data::load(path).await {
                Ok(rows) if rows.is_empty() => LoadState::Empty,
                Ok(rows) => {
                    info!(rows = rows.len(), "dataset ready");
                    LoadState::Ready(Arc::new(Dataset::new(rows)))
                }
                Err(err) => {
                    error!(%err, "dataset load failed");
                    LoadState::Error(err.ui_message().to_string())
                }
            };
            *load_state.write() = state;
            egui_ctx.request_repaint();
        });
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }
}

impl eframe::App for ModuloDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.menu_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.screen.ui(&self.context, ui);
        });
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("starting modulo dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 560.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Number Modulo Dashboard",
        options,
        Box::new(|cc| Box::new(ModuloDashboardApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
