//! Canvas rendering functionality for nodes, connections, and grid.
//!
//! This module handles all drawing operations including the grid background,
//! connection lines with arrow heads, the in-progress connection preview,
//! and node cards with their ports. Everything paints in screen space;
//! canvas-space geometry is translated through the app's canvas rectangle.

use super::state::StudioApp;
use crate::constants::{
    ARROW_SIZE, GRID_SIZE, NODE_CORNER_RADIUS, NODE_WIDTH, PORT_RADIUS, PREVIEW_DASH_LENGTH,
    PREVIEW_GAP_LENGTH,
};
use crate::editor::ConnectState;
use crate::geometry::{self, EdgeLine};
use crate::types::Node;
use eframe::egui;
use eframe::epaint::StrokeKind;

/// Canvas background fill.
const CANVAS_FILL: egui::Color32 = egui::Color32::from_rgb(249, 250, 251);
/// Grid line color.
const GRID_LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);
/// Stroke and arrow color for committed connections.
const CONNECTION_COLOR: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);
/// Accent color for the selected node and the connection preview.
const ACCENT_COLOR: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
/// Highlight for ports participating in an in-progress connection.
const CONNECT_HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(74, 222, 128);
/// Resting border color for node cards.
const CARD_BORDER_COLOR: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);
/// Resting border color for ports.
const PORT_BORDER_COLOR: egui::Color32 = egui::Color32::from_rgb(156, 163, 175);
/// Primary text color on node cards.
const TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);
/// Muted text color for the component type line.
const TEXT_MUTED_COLOR: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);

impl StudioApp {
    /// Renders all canvas elements for the current frame.
    ///
    /// Elements are drawn in layers: grid first (background), then committed
    /// connections, then the connection preview, then nodes (foreground),
    /// ensuring proper visual hierarchy. Node draw order matches hit-test
    /// order, so the last node added sits on top.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    pub fn render_canvas(&self, painter: &egui::Painter) {
        painter.rect_filled(self.canvas_rect, 0.0, CANVAS_FILL);
        self.draw_grid(painter);

        for line in geometry::edge_lines(self.editor.graph()) {
            self.draw_connection(painter, &line);
        }

        if let Some(connect) = self.editor.connect_state() {
            self.draw_connection_preview(painter, connect);
        }

        for node in self.editor.graph().nodes() {
            self.draw_node(painter, node);
        }
    }

    /// Draws the background grid over the canvas rectangle.
    ///
    /// Lines are anchored to the canvas origin, so the grid stays put when
    /// side panels resize and shift the rectangle.
    fn draw_grid(&self, painter: &egui::Painter) {
        let rect = self.canvas_rect;
        let stroke = egui::Stroke::new(1.0, GRID_LINE_COLOR);

        let mut x = rect.min.x;
        while x <= rect.max.x {
            painter.line_segment(
                [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
                stroke,
            );
            x += GRID_SIZE;
        }

        let mut y = rect.min.y;
        while y <= rect.max.y {
            painter.line_segment(
                [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
                stroke,
            );
            y += GRID_SIZE;
        }
    }

    /// Draws one committed connection with an arrow head at the target end.
    fn draw_connection(&self, painter: &egui::Painter, line: &EdgeLine) {
        let from = self.from_canvas(line.from);
        let to = self.from_canvas(line.to);

        painter.line_segment([from, to], egui::Stroke::new(2.0, CONNECTION_COLOR));
        draw_arrow_head(painter, from, to, CONNECTION_COLOR);
    }

    /// Draws the dashed preview from the pending source's output port to the
    /// current cursor position.
    fn draw_connection_preview(&self, painter: &egui::Painter, connect: &ConnectState) {
        let Some(source) = self.editor.graph().node(&connect.source) else {
            return;
        };
        let from = self.from_canvas(geometry::output_anchor(source.position));
        let to = self.from_canvas(connect.cursor);
        let stroke = egui::Stroke::new(2.0, ACCENT_COLOR);

        painter.extend(egui::Shape::dashed_line(
            &[from, to],
            stroke,
            PREVIEW_DASH_LENGTH,
            PREVIEW_GAP_LENGTH,
        ));
        painter.circle_filled(to, 4.0, ACCENT_COLOR);
    }

    /// Draws a single node card with its icon, labels, and ports.
    ///
    /// Border emphasis, strongest first: a node being dragged shows its kind
    /// color, the pending connection source shows the connect highlight, the
    /// selected node shows the accent color.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    /// * `node` - The node to draw
    fn draw_node(&self, painter: &egui::Painter, node: &Node) {
        let entry = node.kind.catalog();
        let rect = geometry::node_rect(node.position).translate(self.canvas_rect.min.to_vec2());

        let selected = self.editor.selected() == Some(node.id);
        let dragging = self.editor.dragging() == Some(node.id);
        let connect_source = self
            .editor
            .connect_state()
            .is_some_and(|connect| connect.source == node.id);

        painter.rect_filled(rect, NODE_CORNER_RADIUS, egui::Color32::WHITE);

        let border = if dragging {
            egui::Stroke::new(3.0, entry.color)
        } else if connect_source {
            egui::Stroke::new(2.5, CONNECT_HIGHLIGHT)
        } else if selected {
            egui::Stroke::new(2.5, ACCENT_COLOR)
        } else {
            egui::Stroke::new(1.5, CARD_BORDER_COLOR)
        };
        painter.rect_stroke(rect, NODE_CORNER_RADIUS, border, StrokeKind::Outside);

        // Icon chip in the top-left corner, component type beside it
        let chip = egui::Rect::from_min_size(rect.min + egui::vec2(10.0, 10.0), egui::vec2(24.0, 24.0));
        painter.rect_filled(chip, 4.0, entry.color);
        painter.text(
            chip.center(),
            egui::Align2::CENTER_CENTER,
            entry.icon,
            egui::FontId::proportional(13.0),
            egui::Color32::WHITE,
        );
        painter.text(
            egui::pos2(chip.max.x + 8.0, chip.center().y),
            egui::Align2::LEFT_CENTER,
            entry.label,
            egui::FontId::proportional(10.0),
            TEXT_MUTED_COLOR,
        );

        self.draw_node_label(painter, node, rect);
        self.draw_ports(painter, node, connect_source);
    }

    /// Draws the node's display name, word-wrapped and centered below the chip.
    fn draw_node_label(&self, painter: &egui::Painter, node: &Node, rect: egui::Rect) {
        let font = egui::FontId::proportional(13.0);
        let row_height = painter.fonts_mut(|fonts| fonts.row_height(&font));
        let lines = wrap_text(painter, &node.label, &font, rect.width() - 16.0);

        let mut y = rect.min.y + 42.0;
        for line in lines.iter().take(2) {
            painter.text(
                egui::pos2(rect.center().x, y),
                egui::Align2::CENTER_TOP,
                line,
                font.clone(),
                TEXT_COLOR,
            );
            y += row_height;
        }
    }

    /// Draws the input and output port circles on a node's left and right edges.
    ///
    /// While a connection is pending, every input port lights up as a drop
    /// target and the source's output port stays highlighted.
    fn draw_ports(&self, painter: &egui::Painter, node: &Node, connect_source: bool) {
        let connecting = self.editor.connect_state().is_some();

        let input = self.from_canvas(geometry::input_anchor(node.position));
        let input_color = if connecting {
            CONNECT_HIGHLIGHT
        } else {
            PORT_BORDER_COLOR
        };
        painter.circle_filled(input, PORT_RADIUS, egui::Color32::WHITE);
        painter.circle_stroke(input, PORT_RADIUS, egui::Stroke::new(1.5, input_color));

        let output = self.from_canvas(geometry::output_anchor(node.position));
        let output_color = if connect_source {
            CONNECT_HIGHLIGHT
        } else {
            PORT_BORDER_COLOR
        };
        painter.circle_filled(output, PORT_RADIUS, egui::Color32::WHITE);
        painter.circle_stroke(output, PORT_RADIUS, egui::Stroke::new(1.5, output_color));
    }

    /// Draws a floating preview of the palette component being dragged,
    /// following the pointer above every panel.
    pub fn draw_palette_ghost(&self, ctx: &egui::Context) {
        let Some(kind) = self.editor.palette_payload() else {
            return;
        };
        let Some(pos) = ctx.input(|i| i.pointer.latest_pos()) else {
            return;
        };

        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Tooltip,
            egui::Id::new("palette_drag_ghost"),
        ));
        let entry = kind.catalog();
        let rect = egui::Rect::from_center_size(pos, egui::vec2(NODE_WIDTH * 0.75, 36.0));

        painter.rect_filled(
            rect,
            NODE_CORNER_RADIUS,
            egui::Color32::from_rgba_unmultiplied(255, 255, 255, 230),
        );
        painter.rect_stroke(
            rect,
            NODE_CORNER_RADIUS,
            egui::Stroke::new(1.5, entry.color),
            StrokeKind::Outside,
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("{} {}", entry.icon, entry.label),
            egui::FontId::proportional(12.0),
            TEXT_COLOR,
        );
    }
}

/// Draws a filled arrow head pointing at `to`, pulled back so the tip does
/// not sit under the target's input port circle.
fn draw_arrow_head(painter: &egui::Painter, from: egui::Pos2, to: egui::Pos2, color: egui::Color32) {
    let delta = to - from;
    if delta.length() < f32::EPSILON {
        return;
    }
    let direction = delta.normalized();

    let tip = to - direction * PORT_RADIUS;
    let base = tip - direction * ARROW_SIZE;
    let perpendicular = egui::vec2(-direction.y, direction.x) * (ARROW_SIZE * 0.5);

    painter.add(egui::Shape::convex_polygon(
        vec![tip, base + perpendicular, base - perpendicular],
        color,
        egui::Stroke::NONE,
    ));
}

/// Splits text into lines no wider than `max_width`, breaking on spaces.
/// A single word wider than the limit gets a line to itself.
fn wrap_text(painter: &egui::Painter, text: &str, font: &egui::FontId, max_width: f32) -> Vec<String> {
    let measure = |candidate: &str| {
        painter.fonts_mut(|fonts| {
            fonts
                .layout_no_wrap(candidate.to_string(), font.clone(), egui::Color32::WHITE)
                .rect
                .width()
        })
    };

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if current.is_empty() || measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
