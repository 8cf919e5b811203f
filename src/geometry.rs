//! Pure canvas geometry: node bounds, connection anchors, and hit-testing.
//!
//! Everything here is a function of the graph and a point; no interaction
//! state is consulted. The interaction controller and the renderer both go
//! through these helpers so that what you can click always matches what is
//! drawn.

use eframe::egui::{pos2, vec2, Pos2, Rect};

use crate::constants::{NODE_HEIGHT, NODE_WIDTH, PORT_HIT_RADIUS};
use crate::types::{NodeId, WorkflowGraph};

/// What a canvas-space point lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasHit {
    /// The body of a node
    Body(NodeId),
    /// A node's output port, on its right edge
    OutputPort(NodeId),
    /// A node's input port, on its left edge
    InputPort(NodeId),
}

impl CanvasHit {
    /// The node the hit belongs to, whichever part was hit.
    pub fn node_id(self) -> NodeId {
        match self {
            CanvasHit::Body(id) | CanvasHit::OutputPort(id) | CanvasHit::InputPort(id) => id,
        }
    }
}

/// The bounding rectangle of a node centered at `position`.
pub fn node_rect(position: (f32, f32)) -> Rect {
    Rect::from_center_size(
        pos2(position.0, position.1),
        vec2(NODE_WIDTH, NODE_HEIGHT),
    )
}

/// The point where edges leave a node with the given center.
pub fn output_anchor(position: (f32, f32)) -> Pos2 {
    node_rect(position).right_center()
}

/// The point where edges enter a node with the given center.
pub fn input_anchor(position: (f32, f32)) -> Pos2 {
    node_rect(position).left_center()
}

/// Classifies what `pos` lands on, checking the topmost node first.
///
/// Nodes added later draw on top, so they win hit-testing where nodes
/// overlap. Within one node the ports win over the body, otherwise the
/// small port targets would be unclickable along the node edge.
pub fn hit_test(graph: &WorkflowGraph, pos: Pos2) -> Option<CanvasHit> {
    for id in graph.node_ids().iter().rev() {
        let Some(node) = graph.node(id) else {
            continue;
        };
        if output_anchor(node.position).distance(pos) <= PORT_HIT_RADIUS {
            return Some(CanvasHit::OutputPort(*id));
        }
        if input_anchor(node.position).distance(pos) <= PORT_HIT_RADIUS {
            return Some(CanvasHit::InputPort(*id));
        }
        if node_rect(node.position).contains(pos) {
            return Some(CanvasHit::Body(*id));
        }
    }
    None
}

/// A committed edge resolved to a drawable line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLine {
    /// The node the edge leaves from
    pub source: NodeId,
    /// The node the edge points at
    pub target: NodeId,
    /// Source output anchor
    pub from: Pos2,
    /// Target input anchor
    pub to: Pos2,
}

/// Resolves every committed edge to a line from the source's output anchor
/// to the target's input anchor. Edges whose target cannot be resolved are
/// skipped silently.
pub fn edge_lines(graph: &WorkflowGraph) -> Vec<EdgeLine> {
    let mut lines = Vec::new();
    for node in graph.nodes() {
        for target_id in &node.outgoing {
            if let Some(target) = graph.node(target_id) {
                lines.push(EdgeLine {
                    source: node.id,
                    target: *target_id,
                    from: output_anchor(node.position),
                    to: input_anchor(target.position),
                });
            }
        }
    }
    lines
}
