//! Properties panel for configuring the selected component.
//!
//! Edits never touch the graph in place: the panel works on a clone of the
//! selected node and hands the whole thing back through
//! [`WorkflowEditor::update_node`](crate::editor::WorkflowEditor::update_node),
//! which replaces the stored node by id. Property keys the panel does not
//! know about survive the round trip untouched.

use super::state::StudioApp;
use crate::catalog::{FieldKind, FieldSpec};
use crate::types::{Node, PropertyValue, PROP_DESCRIPTION, PROP_ENABLED, PROP_LOG_OUTPUT};
use eframe::egui;

impl StudioApp {
    /// Draws the properties panel for the current selection.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context for the panel
    pub fn draw_properties_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.heading("Properties");
        ui.label(
            egui::RichText::new("Configure the selected component")
                .small()
                .weak(),
        );
        ui.add_space(4.0);
        ui.separator();

        let Some(node) = self.editor.selected_node() else {
            self.draw_no_selection_info(ui);
            return;
        };
        let mut draft = node.clone();
        let mut changed = false;
        let mut deleted = false;

        egui::ScrollArea::vertical().show(ui, |ui| {
            draw_component_header(ui, &draft);
            ui.separator();

            section_heading(ui, "General");
            changed |= draw_general_fields(ui, &mut draft);
            ui.separator();

            section_heading(ui, "Configuration");
            changed |= draw_configuration_fields(ui, &mut draft);
            ui.separator();

            section_heading(ui, "Advanced");
            changed |= draw_advanced_fields(ui, &mut draft);
            ui.separator();

            ui.add_space(4.0);
            let delete = egui::Button::new(
                egui::RichText::new("Delete Component").color(egui::Color32::WHITE),
            )
            .fill(egui::Color32::from_rgb(220, 38, 38));
            if ui.add_sized([ui.available_width(), 28.0], delete).clicked() {
                deleted = true;
            }
            ui.add_space(8.0);
        });

        if deleted {
            self.editor.delete_selected();
        } else if changed {
            self.editor.update_node(draft);
        }
    }

    /// Shows guidance when nothing is selected.
    fn draw_no_selection_info(&self, ui: &mut egui::Ui) {
        ui.add_space(12.0);
        ui.label(egui::RichText::new("No Component Selected").strong());
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("Click on a component in the canvas to configure its properties")
                .weak(),
        );
    }
}

/// Draws the identity card at the top of the panel: icon, name, and kind.
fn draw_component_header(ui: &mut egui::Ui, node: &Node) {
    let entry = node.kind.catalog();
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(entry.icon).size(18.0));
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&node.label).strong());
            ui.label(
                egui::RichText::new(format!("{} component", entry.label))
                    .small()
                    .weak(),
            );
        });
    });
    ui.add_space(6.0);
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(4.0);
    ui.label(egui::RichText::new(text).strong());
    ui.add_space(4.0);
}

/// Name and description fields shared by every component kind.
fn draw_general_fields(ui: &mut egui::Ui, draft: &mut Node) -> bool {
    let mut changed = false;

    ui.label("Component Name");
    if ui.text_edit_singleline(&mut draft.label).changed() {
        changed = true;
    }
    ui.add_space(6.0);

    ui.label("Description");
    let mut description = draft.description().to_string();
    let response = ui.add(
        egui::TextEdit::multiline(&mut description)
            .desired_rows(2)
            .desired_width(f32::INFINITY)
            .hint_text("Component description..."),
    );
    if response.changed() {
        draft
            .properties
            .insert(PROP_DESCRIPTION.to_string(), PropertyValue::Text(description));
        changed = true;
    }

    changed
}

/// Kind-specific fields, driven by the component catalog's field schema.
fn draw_configuration_fields(ui: &mut egui::Ui, draft: &mut Node) -> bool {
    let mut changed = false;
    for field in draft.kind.fields() {
        ui.label(field.label);
        changed |= draw_field(ui, draft, field);
        ui.add_space(6.0);
    }
    changed
}

fn draw_field(ui: &mut egui::Ui, draft: &mut Node, field: &FieldSpec) -> bool {
    match field.kind {
        FieldKind::Text => draw_text_field(ui, draft, field, false),
        FieldKind::Multiline => draw_text_field(ui, draft, field, true),
        FieldKind::Select(options) => draw_select_field(ui, draft, field, options),
        FieldKind::Checklist(options) => draw_checklist_field(ui, draft, field, options),
    }
}

fn draw_text_field(ui: &mut egui::Ui, draft: &mut Node, field: &FieldSpec, multiline: bool) -> bool {
    let mut value = draft
        .properties
        .get(field.key)
        .and_then(PropertyValue::as_text)
        .unwrap_or_default()
        .to_string();

    let response = if multiline {
        ui.add(
            egui::TextEdit::multiline(&mut value)
                .desired_rows(3)
                .desired_width(f32::INFINITY)
                .hint_text(field.hint),
        )
    } else {
        ui.add(
            egui::TextEdit::singleline(&mut value)
                .desired_width(f32::INFINITY)
                .hint_text(field.hint),
        )
    };

    if response.changed() {
        draft
            .properties
            .insert(field.key.to_string(), PropertyValue::Text(value));
        true
    } else {
        false
    }
}

fn draw_select_field(
    ui: &mut egui::Ui,
    draft: &mut Node,
    field: &FieldSpec,
    options: &'static [(&'static str, &'static str)],
) -> bool {
    let mut changed = false;
    let current = draft
        .properties
        .get(field.key)
        .and_then(PropertyValue::as_text)
        .unwrap_or("")
        .to_string();
    // An unset field shows the hint as placeholder text, like an empty option.
    let display = options
        .iter()
        .find(|(value, _)| *value == current)
        .map(|(_, label)| *label)
        .unwrap_or(field.hint);

    egui::ComboBox::from_id_source(field.key)
        .width(ui.available_width())
        .selected_text(display)
        .show_ui(ui, |ui| {
            // The hint doubles as a selectable empty choice, so a value can
            // be unset again after picking one.
            if ui.selectable_label(current.is_empty(), field.hint).clicked() {
                draft
                    .properties
                    .insert(field.key.to_string(), PropertyValue::from(""));
                changed = true;
            }
            for &(value, label) in options {
                if ui.selectable_label(current == value, label).clicked() {
                    draft
                        .properties
                        .insert(field.key.to_string(), PropertyValue::from(value));
                    changed = true;
                }
            }
        });

    changed
}

fn draw_checklist_field(
    ui: &mut egui::Ui,
    draft: &mut Node,
    field: &FieldSpec,
    options: &'static [(&'static str, &'static str)],
) -> bool {
    let mut selected: Vec<String> = draft
        .properties
        .get(field.key)
        .and_then(PropertyValue::as_list)
        .map(|values| values.to_vec())
        .unwrap_or_default();
    let mut changed = false;

    for &(value, label) in options {
        let mut checked = selected.iter().any(|entry| entry.as_str() == value);
        if ui.checkbox(&mut checked, label).changed() {
            if checked {
                selected.push(value.to_string());
            } else {
                selected.retain(|entry| entry.as_str() != value);
            }
            changed = true;
        }
    }

    if changed {
        draft
            .properties
            .insert(field.key.to_string(), PropertyValue::List(selected));
    }
    changed
}

/// Enabled and log-output toggles shared by every component kind.
fn draw_advanced_fields(ui: &mut egui::Ui, draft: &mut Node) -> bool {
    let mut changed = false;

    let mut enabled = draft.enabled();
    if ui.checkbox(&mut enabled, "Enabled").changed() {
        draft
            .properties
            .insert(PROP_ENABLED.to_string(), PropertyValue::Flag(enabled));
        changed = true;
    }

    let mut log_output = draft.log_output();
    if ui.checkbox(&mut log_output, "Log Output").changed() {
        draft
            .properties
            .insert(PROP_LOG_OUTPUT.to_string(), PropertyValue::Flag(log_output));
        changed = true;
    }

    changed
}
