//! Component palette panel.
//!
//! Lists every component kind as a draggable card. Pressing a card picks the
//! kind up; [`StudioApp::finish_palette_drag`] resolves the drop once the
//! button comes up, so the palette itself never touches the graph.

use super::state::StudioApp;
use crate::catalog::CatalogEntry;
use crate::types::NodeKind;
use eframe::egui;
use eframe::epaint::StrokeKind;

/// Usage hints shown at the bottom of the palette.
const QUICK_TIPS: [&str; 4] = [
    "Drag components to canvas",
    "Click to select and configure",
    "Click output point to connect",
    "Build workflow left to right",
];

impl StudioApp {
    /// Draws the component palette: header, one card per component kind,
    /// and the quick-tips footer.
    pub fn draw_palette(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.heading("Components");
        ui.label(
            egui::RichText::new("Drag components to the canvas to build your automation workflow")
                .small()
                .weak(),
        );
        ui.add_space(4.0);
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            for kind in NodeKind::ALL {
                ui.add_space(6.0);
                let response = draw_palette_card(ui, kind.catalog());
                if response.drag_started() {
                    self.editor.begin_palette_drag(kind);
                }
            }

            ui.add_space(10.0);
            ui.separator();
            ui.label(egui::RichText::new("Quick Tips:").small().strong());
            for tip in QUICK_TIPS {
                ui.label(egui::RichText::new(format!("• {tip}")).small().weak());
            }
            ui.add_space(6.0);
        });
    }
}

/// Draws one palette card and returns its interaction response.
///
/// # Arguments
///
/// * `ui` - The egui UI context for the palette panel
/// * `entry` - Catalog entry describing the component kind
fn draw_palette_card(ui: &mut egui::Ui, entry: &CatalogEntry) -> egui::Response {
    let size = egui::vec2(ui.available_width(), 64.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();

        let tint = if response.hovered() { 0.18 } else { 0.10 };
        painter.rect_filled(rect, 6.0, entry.color.gamma_multiply(tint));
        painter.rect_stroke(
            rect,
            6.0,
            egui::Stroke::new(1.5, entry.color.gamma_multiply(0.45)),
            StrokeKind::Inside,
        );

        let chip = egui::Rect::from_center_size(
            egui::pos2(rect.min.x + 26.0, rect.center().y),
            egui::vec2(28.0, 28.0),
        );
        painter.rect_filled(chip, 4.0, entry.color);
        painter.text(
            chip.center(),
            egui::Align2::CENTER_CENTER,
            entry.icon,
            egui::FontId::proportional(14.0),
            egui::Color32::WHITE,
        );

        let text_x = rect.min.x + 48.0;
        painter.text(
            egui::pos2(text_x, rect.min.y + 12.0),
            egui::Align2::LEFT_TOP,
            entry.label,
            egui::FontId::proportional(13.0),
            egui::Color32::from_rgb(31, 41, 55),
        );
        painter.text(
            egui::pos2(text_x, rect.min.y + 32.0),
            egui::Align2::LEFT_TOP,
            entry.description,
            egui::FontId::proportional(10.0),
            egui::Color32::from_rgb(107, 114, 128),
        );
    }

    response
}
