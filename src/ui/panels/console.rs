// ChromaLog - ui/panels/console.rs
//
// Console panel: renders the styled buffer as a coloured monospace layout
// inside a scroll area, scrolling to the newest entry on append.
// Word wrap is off; long lines extend horizontally.

use crate::app::state::AppState;
use crate::ui::theme;
use egui::text::LayoutJob;
use egui::{FontId, TextFormat};

/// Render the console (central panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let font_id = FontId::monospace(state.font_size);

    // One coloured section per span. Span colours are resolved at paint time
    // from the active palette, so toggling dark mode recolours the whole
    // buffer without touching its content.
    let mut job = LayoutJob::default();
    for span in state.buffer.spans() {
        let colour = match span.category {
            Some(category) => theme::category_colour(category, state.dark_mode),
            None => theme::default_text_colour(state.dark_mode),
        };
        job.append(
            &span.text,
            0.0,
            TextFormat {
                font_id: font_id.clone(),
                color: colour,
                ..Default::default()
            },
        );
    }

    egui::ScrollArea::both()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add(egui::Label::new(job).wrap_mode(egui::TextWrapMode::Extend));
            if state.scroll_to_bottom {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                state.scroll_to_bottom = false;
            }
        });
}
