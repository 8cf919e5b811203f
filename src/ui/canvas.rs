//! Canvas interaction and coordinate translation.
//!
//! The canvas panel occupies a screen rectangle that moves as the side panels
//! resize; the editor itself works in canvas coordinates with the panel's
//! top-left corner as origin. This module translates between the two spaces
//! and feeds pointer events to the editor as plain positions.

use super::state::StudioApp;
use eframe::egui;

impl StudioApp {
    /// Converts screen coordinates to canvas coordinates.
    ///
    /// # Arguments
    ///
    /// * `screen_pos` - Position in screen space (pixels)
    ///
    /// # Returns
    ///
    /// The corresponding position in canvas space
    pub fn to_canvas(&self, screen_pos: egui::Pos2) -> egui::Pos2 {
        screen_pos - self.canvas_rect.min.to_vec2()
    }

    /// Converts canvas coordinates to screen coordinates.
    ///
    /// # Arguments
    ///
    /// * `canvas_pos` - Position in canvas space
    ///
    /// # Returns
    ///
    /// The corresponding position in screen space
    pub fn from_canvas(&self, canvas_pos: egui::Pos2) -> egui::Pos2 {
        canvas_pos + self.canvas_rect.min.to_vec2()
    }

    /// Routes pointer input over the canvas into the editor.
    ///
    /// The editor only understands pressed/moved/released positions; widget
    /// concerns such as which panel the pointer is over stay here. A press
    /// only counts when it lands on the canvas itself, but moves and releases
    /// are forwarded even outside the rectangle so that drags which wander
    /// over a side panel keep tracking until the button comes up.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context for the canvas panel
    /// * `response` - The canvas allocation's interaction response
    pub fn handle_canvas_input(&mut self, ui: &egui::Ui, response: &egui::Response) {
        // Palette drags are resolved at the context level after all panels.
        if self.editor.palette_payload().is_some() {
            return;
        }

        let Some(screen_pos) = response
            .interact_pointer_pos()
            .or_else(|| response.hover_pos())
        else {
            return;
        };
        let pos = self.to_canvas(screen_pos);

        if ui.input(|i| i.pointer.primary_pressed()) && response.is_pointer_button_down_on() {
            self.editor.pointer_pressed(pos);
        }
        self.editor.pointer_moved(pos);
        if ui.input(|i| i.pointer.primary_released()) {
            self.editor.pointer_released(pos);
        }
    }

    /// Completes or cancels an in-flight palette drag when the button comes up.
    ///
    /// Runs after all panels so the drop position is checked against this
    /// frame's canvas rectangle. Dropping anywhere outside the canvas
    /// discards the pending component.
    pub fn finish_palette_drag(&mut self, ctx: &egui::Context) {
        if self.editor.palette_payload().is_none() {
            return;
        }
        if !ctx.input(|i| i.pointer.primary_released()) {
            return;
        }
        match ctx.input(|i| i.pointer.latest_pos()) {
            Some(screen_pos) if self.canvas_rect.contains(screen_pos) => {
                let pos = self.to_canvas(screen_pos);
                self.editor.drop_palette_at(pos);
            }
            _ => self.editor.cancel_palette_drag(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeKind;
    use eframe::egui::{pos2, vec2, Rect};

    fn app_with_canvas_at(origin: egui::Pos2) -> StudioApp {
        let mut app = StudioApp::default();
        app.canvas_rect = Rect::from_min_size(origin, vec2(800.0, 600.0));
        app
    }

    #[test]
    fn test_screen_canvas_round_trip() {
        let app = app_with_canvas_at(pos2(320.0, 60.0));

        let canvas = app.to_canvas(pos2(420.0, 160.0));
        assert_eq!(canvas, pos2(100.0, 100.0));
        assert_eq!(app.from_canvas(canvas), pos2(420.0, 160.0));
    }

    #[test]
    fn test_translation_tracks_canvas_origin() {
        let app = app_with_canvas_at(pos2(0.0, 0.0));
        assert_eq!(app.to_canvas(pos2(50.0, 50.0)), pos2(50.0, 50.0));

        let moved = app_with_canvas_at(pos2(280.0, 48.0));
        assert_eq!(moved.to_canvas(pos2(330.0, 98.0)), pos2(50.0, 50.0));
    }

    #[test]
    fn test_node_keeps_canvas_position_when_panels_resize() {
        // The same canvas-space node maps to different screen points as the
        // palette panel changes width; its stored position must not move.
        let mut app = app_with_canvas_at(pos2(320.0, 60.0));
        app.editor.begin_palette_drag(NodeKind::Calculation);
        let id = app.editor.drop_palette_at(pos2(200.0, 150.0)).unwrap();

        app.canvas_rect = Rect::from_min_size(pos2(250.0, 60.0), vec2(870.0, 600.0));

        let node = app.editor.graph().node(&id).unwrap();
        assert_eq!(node.position, (200.0, 150.0));
        assert_eq!(app.from_canvas(pos2(200.0, 150.0)), pos2(450.0, 210.0));
    }
}
