//! Render fault isolation.

use std::panic::{self, AssertUnwindSafe};

use egui::Ui;

/// Sticky fault flag for one isolated region of the screen.
///
/// A panic inside the region is caught and replaced with a short inline
/// label; the surrounding frame keeps rendering. Once a region has failed
/// it stays replaced for the rest of the session instead of re-running the
/// faulty code every frame.
#[derive(Debug, Default)]
pub struct FaultCell {
    failed: bool,
}

impl FaultCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Render `add_contents` inside the boundary; on panic show `fallback`
    /// instead, now and on every later frame.
    pub fn show(&mut self, ui: &mut Ui, fallback: &str, add_contents: impl FnOnce(&mut Ui)) {
        if self.failed {
            ui.colored_label(ui.visuals().error_fg_color, fallback);
            return;
        }

        if panic::catch_unwind(AssertUnwindSafe(|| add_contents(ui))).is_err() {
            self.failed = true;
            tracing::error!(fallback, "view panicked, substituting inline error");
            ui.colored_label(ui.visuals().error_fg_color, fallback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::sync::Once;

    thread_local! {
        static QUIET_PANICS: Cell<bool> = Cell::new(false);
    }

    /// Silences panic output from the current thread until the returned
    /// guard drops. The process-wide hook is installed once and forwards to
    /// the previous hook whenever the thread is outside a quiet scope, so
    /// tests on other threads keep their normal output.
    fn quiet_panics() -> impl Drop {
        static INSTALL: Once = Once::new();
        INSTALL.call_once(|| {
            let previous = panic::take_hook();
            panic::set_hook(Box::new(move |info| {
                if !QUIET_PANICS.with(|quiet| quiet.get()) {
                    previous(info);
                }
            }));
        });

        struct Quiet;
        impl Drop for Quiet {
            fn drop(&mut self) {
                QUIET_PANICS.with(|quiet| quiet.set(false));
            }
        }

        QUIET_PANICS.with(|quiet| quiet.set(true));
        Quiet
    }

    fn run_frame(cell: &mut FaultCell, panics: bool) -> bool {
        let ctx = egui::Context::default();
        let mut ran = false;
        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                cell.show(ui, "Error loading view", |_ui| {
                    ran = true;
                    if panics {
                        panic!("intentional");
                    }
                });
            });
        });
        ran
    }

    #[test]
    fn test_panic_marks_the_cell_failed() {
        let mut cell = FaultCell::new();
        let ran = {
            let _quiet = quiet_panics();
            run_frame(&mut cell, true)
        };
        assert!(ran);
        assert!(cell.has_failed());
    }

    #[test]
    fn test_failed_cell_skips_contents_on_later_frames() {
        let mut cell = FaultCell::new();
        {
            let _quiet = quiet_panics();
            run_frame(&mut cell, true);
        }
        assert!(!run_frame(&mut cell, false));
    }

    #[test]
    fn test_healthy_contents_render_normally() {
        let mut cell = FaultCell::new();
        assert!(run_frame(&mut cell, false));
        assert!(!cell.has_failed());
    }
}
