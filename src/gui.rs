// ChromaLog - gui.rs
//
// Top-level eframe::App implementation. Drains the sink's dispatch queue
// once per frame onto the visual buffer, and hosts the demo shell: banner
// with pointer-event logging, Save Log button, palette toggle, console,
// status bar, and about dialog.

use crate::app::state::AppState;
use crate::core::export;
use crate::core::model::Category;
use crate::ui;
use crate::util::constants;
use crate::util::error::ExportError;

/// The ChromaLog application.
pub struct ChromaLogApp {
    pub state: AppState,
}

impl ChromaLogApp {
    /// Create the application and queue the startup demonstration entries.
    pub fn new(state: AppState) -> Self {
        let app = Self { state };
        app.log_startup_entries();
        app
    }

    /// One entry per category, plus a parameterised entry carrying the
    /// loaded configuration, so a fresh window shows every style at once.
    fn log_startup_entries(&self) {
        let sink = &self.state.sink;
        sink.append(
            "A reusable, colour-coded logging console.",
            Category::Information,
        );
        sink.append("Demo window initialised", Category::Debug);
        sink.append("This is a fake warning", Category::Warning);
        sink.append("This is a fake error", Category::Error);
        sink.append("Message from terminal", Category::FromTerminal);
        sink.append("Message to terminal", Category::ToTerminal);
        sink.append_with_params(
            "Configuration loaded",
            &[
                Some(format!(
                    "theme: {}",
                    if self.state.dark_mode { "dark" } else { "light" }
                )),
                Some(format!("font size: {}", self.state.font_size)),
            ],
            Category::Debug,
        );
    }

    /// Save Log flow: destination dialog, plain-text write, error surfacing.
    ///
    /// Failures are caught here and shown as a blocking warning dialog; the
    /// in-memory buffer is unaffected either way and nothing is retried.
    fn save_log(&mut self) {
        let chosen = rfd::FileDialog::new()
            .set_title("Save current log")
            .set_file_name(constants::DEFAULT_SAVE_FILE_NAME)
            .set_directory(&self.state.save_dir)
            .add_filter("RTF files", &["rtf"])
            .add_filter("Log files", &["log"])
            .add_filter("All files", &["*"])
            .save_file();

        let Some(dest) = chosen else {
            self.state.status_message = "Save cancelled.".to_string();
            return;
        };

        // Only the plain-text rendering is written, whatever extension was
        // chosen in the dialog.
        let text = self.state.buffer.plain_text();
        let result = match std::fs::File::create(&dest) {
            Ok(file) => export::write_plain_text(&text, file, &dest),
            Err(e) => Err(ExportError::Create {
                path: dest.clone(),
                source: e,
            }),
        };

        match result {
            Ok(bytes) => {
                tracing::info!(path = %dest.display(), bytes, "Log saved");
                self.state.status_message = format!("Saved log to '{}'.", dest.display());
            }
            Err(e) => {
                tracing::error!(error = %e, "Save Log failed");
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Warning)
                    .set_title("Save Log")
                    .set_description(format!("Could not save file!\n{e}"))
                    .set_buttons(rfd::MessageButtons::Ok)
                    .show();
                self.state.status_message = "Save failed.".to_string();
            }
        }
    }
}

impl eframe::App for ChromaLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Palette follows the toggle each frame.
        ctx.set_visuals(if self.state.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        // Apply queued log entries to the buffer (per-frame budget). A full
        // budget means more are waiting, so schedule another frame promptly.
        let applied = self.state.pump_queue();
        if applied > 0 {
            ctx.request_repaint();
        }

        // Top panel: banner + controls.
        egui::TopBottomPanel::top("banner").show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Interactive banner. Pointer press/release on it are logged
                // through the sink like any other producer.
                let banner_width = (ui.available_width() - 260.0).max(120.0);
                let (rect, response) = ui.allocate_exact_size(
                    egui::vec2(banner_width, ui::theme::BANNER_HEIGHT),
                    egui::Sense::click(),
                );
                let painter = ui.painter_at(rect);
                painter.text(
                    rect.left_center() + egui::vec2(8.0, 0.0),
                    egui::Align2::LEFT_CENTER,
                    format!(
                        "\u{270f}\u{fe0f} {} v{}",
                        constants::APP_NAME,
                        constants::APP_VERSION
                    ),
                    egui::FontId::proportional(20.0),
                    ui.visuals().strong_text_color(),
                );
                // Raw press/release transitions, not clicks: both edges are
                // logged, mirroring the original pointer wiring.
                let held = response.is_pointer_button_down_on();
                if held && !self.state.banner_held {
                    self.state
                        .sink
                        .append("MouseDown banner event", Category::Information);
                }
                if !held && self.state.banner_held {
                    self.state
                        .sink
                        .append("MouseUp banner event", Category::Information);
                }
                self.state.banner_held = held;

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("\u{24d8}").on_hover_text("About").clicked() {
                        self.state.show_about = true;
                    }
                    let palette_label = if self.state.dark_mode {
                        "Light mode"
                    } else {
                        "Dark mode"
                    };
                    if ui.button(palette_label).clicked() {
                        self.state.dark_mode = !self.state.dark_mode;
                    }
                    if ui.button("Save Log").clicked() {
                        self.state
                            .sink
                            .append("Opening dialog for saving log contents", Category::Information);
                        self.save_log();
                    }
                });
            });
        });

        // Status bar.
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let entries = self.state.buffer.entry_count();
                    if entries > 0 {
                        ui.label(format!("{entries} entries"));
                    }
                });
            });
        });

        // Central panel: the console on its palette background.
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::console_background(self.state.dark_mode))
                    .inner_margin(egui::Margin::same(ui::theme::CONSOLE_MARGIN)),
            )
            .show(ctx, |ui| {
                ui::panels::console::render(ui, &mut self.state);
            });

        // About dialog.
        ui::panels::about::render(ctx, &mut self.state);
    }
}
