//! User interface components and rendering logic for the workflow studio.
//!
//! This module contains all the UI-related code including the main application
//! struct, the panel layout, canvas rendering, and user interaction handling.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main StudioApp
//! - `canvas` - Canvas pointer handling and coordinate translation
//! - `rendering` - Drawing nodes, connections, grid, and drag previews
//! - `palette` - The draggable component library panel
//! - `properties` - The selected-component configuration panel

mod canvas;
mod palette;
mod properties;
mod rendering;
mod state;

pub use state::StudioApp;

use crate::backend::WorkflowSnapshot;
use eframe::egui;
use log::warn;

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::light());

        self.handle_delete_key(ctx);

        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            self.draw_header(ui);
        });

        egui::SidePanel::left("palette_panel")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                self.draw_palette(ui);
            });

        egui::SidePanel::right("properties_panel")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                self.draw_properties_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });

        // Resolve a palette drop only after every panel has laid out, so the
        // canvas rectangle is this frame's. The ghost then skips the frame
        // the payload lands on.
        self.finish_palette_drag(ctx);
        self.draw_palette_ghost(ctx);
    }
}

impl StudioApp {
    /// Removes the selected component when Delete is pressed, unless a text
    /// field is currently consuming keyboard input.
    fn handle_delete_key(&mut self, ctx: &egui::Context) {
        let is_editing_text = ctx.wants_keyboard_input();
        if ctx.input(|i| i.key_pressed(egui::Key::Delete)) && !is_editing_text {
            self.editor.delete_selected();
        }
    }

    /// Draws the header: workflow title and subtitle on the left, the last
    /// save/run status and the Save/Run buttons on the right.
    fn draw_header(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                let title = if self.is_edit_mode() {
                    format!("Edit Workflow: {}", self.workflow_name)
                } else {
                    "Create New Workflow".to_string()
                };
                ui.heading(title);

                let subtitle = if self.is_edit_mode() {
                    "Modify your automation workflow by updating components and connections"
                } else {
                    "Design your automation workflow by dragging components to the canvas and connecting them"
                };
                ui.label(egui::RichText::new(subtitle).small().weak());
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let run = egui::Button::new(egui::RichText::new("Run").color(egui::Color32::WHITE))
                    .fill(egui::Color32::from_rgb(22, 163, 74));
                if ui.add(run).clicked() {
                    self.run_workflow();
                }
                if ui.button("Save").clicked() {
                    self.save_workflow();
                }
                if let Some(status) = &self.status {
                    ui.label(egui::RichText::new(status).small().weak());
                }
            });
        });
        ui.add_space(6.0);
    }

    /// Captures a snapshot of the graph and hands it to the backend to save.
    fn save_workflow(&mut self) {
        let snapshot = WorkflowSnapshot::capture(self.editor.graph());
        match self
            .backend
            .save(self.workflow_id.as_deref(), &self.workflow_name, &snapshot)
        {
            Ok(()) => {
                self.status = Some(format!(
                    "Saved '{}' with {} components",
                    self.workflow_name,
                    snapshot.nodes.len()
                ));
            }
            Err(err) => {
                warn!("Save failed: {err}");
                self.status = Some(format!("Save failed: {err}"));
            }
        }
    }

    /// Captures a snapshot of the graph and hands it to the backend to run.
    fn run_workflow(&mut self) {
        let snapshot = WorkflowSnapshot::capture(self.editor.graph());
        match self
            .backend
            .run(self.workflow_id.as_deref(), &self.workflow_name, &snapshot)
        {
            Ok(()) => {
                self.status = Some(format!(
                    "Run started with {} components",
                    snapshot.nodes.len()
                ));
            }
            Err(err) => {
                warn!("Run failed: {err}");
                self.status = Some(format!("Run failed: {err}"));
            }
        }
    }

    /// Allocates the canvas painter, records this frame's canvas rectangle,
    /// and hands off to input handling and rendering.
    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        self.canvas_rect = response.rect;

        self.handle_canvas_input(ui, &response);
        self.render_canvas(&painter);
    }
}
