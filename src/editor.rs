//! The interaction controller for the canvas.
//!
//! [`WorkflowEditor`] owns the graph plus all transient gesture state: the
//! current selection, an in-progress node drag, connect-mode, and a palette
//! drag payload. It consumes plain pointer events in canvas coordinates, so
//! every gesture can be driven by synthetic event sequences in tests without
//! a rendering surface.
//!
//! At most one of the three gestures (palette drag, node drag, connect-mode)
//! is active at any instant; entering one cancels the others.

use eframe::egui::{Pos2, Vec2};
use log::{debug, info};

use crate::geometry::{self, CanvasHit};
use crate::types::{Node, NodeId, NodeKind, WorkflowGraph};

/// An in-progress node drag.
#[derive(Debug, Clone, Copy)]
struct NodeDrag {
    /// The node being dragged
    id: NodeId,
    /// Offset from the pointer to the node center, captured at drag start
    /// so the node does not jump under the cursor.
    offset: Vec2,
}

/// Connect-mode: a pointer gesture building a new edge.
#[derive(Debug, Clone, Copy)]
pub struct ConnectState {
    /// The node the new edge will leave from
    pub source: NodeId,
    /// Last known pointer position, for the live edge preview
    pub cursor: Pos2,
}

/// Owns the workflow graph and all transient canvas interaction state.
#[derive(Debug, Default)]
pub struct WorkflowEditor {
    graph: WorkflowGraph,
    selected: Option<NodeId>,
    drag: Option<NodeDrag>,
    connect: Option<ConnectState>,
    palette_drag: Option<NodeKind>,
}

impl WorkflowEditor {
    /// Creates an editor over an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor over an existing graph, e.g. a loaded snapshot.
    pub fn with_graph(graph: WorkflowGraph) -> Self {
        Self {
            graph,
            ..Self::default()
        }
    }

    /// The graph being edited.
    pub fn graph(&self) -> &WorkflowGraph {
        &self.graph
    }

    /// The ID of the currently selected node, if any.
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// The currently selected node record, if any.
    pub fn selected_node(&self) -> Option<&Node> {
        self.selected.as_ref().and_then(|id| self.graph.node(id))
    }

    /// The node currently being dragged, if any.
    pub fn dragging(&self) -> Option<NodeId> {
        self.drag.map(|drag| drag.id)
    }

    /// The active connect-mode state, if any.
    pub fn connect_state(&self) -> Option<&ConnectState> {
        self.connect.as_ref()
    }

    /// The node kind currently being dragged out of the palette, if any.
    pub fn palette_payload(&self) -> Option<NodeKind> {
        self.palette_drag
    }

    /// Picks up a catalog entry from the palette.
    /// Cancels any other in-progress gesture.
    pub fn begin_palette_drag(&mut self, kind: NodeKind) {
        self.drag = None;
        self.connect = None;
        self.palette_drag = Some(kind);
    }

    /// Drops the palette payload onto the canvas at `pos`, creating a node
    /// centered there.
    ///
    /// # Returns
    ///
    /// The ID of the new node, or `None` if no palette drag was in progress.
    pub fn drop_palette_at(&mut self, pos: Pos2) -> Option<NodeId> {
        let kind = self.palette_drag.take()?;
        let id = self.graph.add_node(kind, (pos.x, pos.y));
        info!(
            "Added '{}' component {id} at ({:.0}, {:.0})",
            kind.catalog().label,
            pos.x,
            pos.y
        );
        Some(id)
    }

    /// Abandons the palette payload, e.g. when it is released outside
    /// the canvas.
    pub fn cancel_palette_drag(&mut self) {
        self.palette_drag = None;
    }

    /// Enters connect-mode with `source` as the edge's starting node.
    /// Cancels any in-progress node drag.
    pub fn begin_connect_from(&mut self, source: NodeId, cursor: Pos2) {
        if !self.graph.contains(&source) {
            return;
        }
        debug!("Connection started from {source}");
        self.drag = None;
        self.connect = Some(ConnectState { source, cursor });
    }

    /// Handles a primary-button press at `pos` in canvas coordinates.
    ///
    /// Outside connect-mode: a press on an output port enters connect-mode
    /// without touching the selection, a press on a node body selects it and
    /// starts a drag, and a press on empty canvas clears the selection.
    ///
    /// In connect-mode: a press on any part of another node commits the edge
    /// and exits; a press on the source node exits without an edge; a press
    /// on empty canvas aborts.
    pub fn pointer_pressed(&mut self, pos: Pos2) {
        if let Some(connect) = self.connect.take() {
            if let Some(hit) = geometry::hit_test(&self.graph, pos) {
                let target = hit.node_id();
                if self.graph.connect(&connect.source, &target) {
                    info!("Connected {} -> {target}", connect.source);
                }
            }
            return;
        }

        match geometry::hit_test(&self.graph, pos) {
            Some(CanvasHit::OutputPort(id)) => {
                self.begin_connect_from(id, pos);
            }
            Some(CanvasHit::Body(id)) | Some(CanvasHit::InputPort(id)) => {
                self.selected = Some(id);
                if let Some(node) = self.graph.node(&id) {
                    let center = geometry::node_rect(node.position).center();
                    self.drag = Some(NodeDrag {
                        id,
                        offset: center - pos,
                    });
                }
            }
            None => {
                self.selected = None;
            }
        }
    }

    /// Handles pointer movement at `pos` in canvas coordinates.
    ///
    /// Updates the connect-mode preview cursor, or repositions the dragged
    /// node keeping the grab offset. Later positions overwrite earlier ones.
    pub fn pointer_moved(&mut self, pos: Pos2) {
        if let Some(connect) = &mut self.connect {
            connect.cursor = pos;
            return;
        }
        if let Some(drag) = self.drag {
            let center = pos + drag.offset;
            self.graph.move_node(&drag.id, (center.x, center.y));
        }
    }

    /// Handles a primary-button release at `pos` in canvas coordinates.
    ///
    /// Ends any node drag. If connect-mode is active and the release lands
    /// on a node other than the source, the edge is committed there (drag
    /// from port to target); releasing over the source or empty canvas
    /// leaves connect-mode active so a follow-up click can finish it.
    pub fn pointer_released(&mut self, pos: Pos2) {
        self.drag = None;
        if let Some(connect) = &self.connect {
            if let Some(hit) = geometry::hit_test(&self.graph, pos) {
                let target = hit.node_id();
                if target != connect.source {
                    let source = connect.source;
                    self.connect = None;
                    if self.graph.connect(&source, &target) {
                        info!("Connected {source} -> {target}");
                    }
                }
            }
        }
    }

    /// Selects the node with the given ID, if it exists.
    pub fn select(&mut self, id: NodeId) {
        if self.graph.contains(&id) {
            self.selected = Some(id);
        }
    }

    /// Clears the current selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Replaces the record of an existing node, as the properties panel does
    /// after editing a cloned copy.
    pub fn update_node(&mut self, updated: Node) {
        self.graph.update_node(updated);
    }

    /// Deletes a node and every edge referencing it, and clears any
    /// interaction state that pointed at it.
    ///
    /// # Returns
    ///
    /// `true` if the node existed and was removed.
    pub fn delete_node(&mut self, id: &NodeId) -> bool {
        let removed = self.graph.delete_node(id);
        if removed {
            info!("Deleted component {id}");
            if self.selected == Some(*id) {
                self.selected = None;
            }
            if self.connect.is_some_and(|connect| connect.source == *id) {
                self.connect = None;
            }
            if self.drag.is_some_and(|drag| drag.id == *id) {
                self.drag = None;
            }
        }
        removed
    }

    /// Deletes the currently selected node, if any.
    pub fn delete_selected(&mut self) -> bool {
        match self.selected {
            Some(id) => self.delete_node(&id),
            None => false,
        }
    }
}
