//! Application state structures for the workflow studio.
//!
//! [`StudioApp`] owns the canvas editor plus the app-level chrome around it:
//! which workflow is being edited, the save/run collaborator, and transient
//! per-frame data such as the canvas screen rectangle.

use eframe::egui;

use crate::backend::{LogBackend, WorkflowBackend, WorkflowSnapshot};
use crate::editor::WorkflowEditor;

/// The main application state.
pub struct StudioApp {
    /// The canvas editor owning the graph and all gesture state
    pub editor: WorkflowEditor,
    /// External identifier of the workflow, if it already exists on the backend
    pub workflow_id: Option<String>,
    /// Display name of the workflow
    pub workflow_name: String,
    /// Collaborator that receives snapshots on save and run
    pub backend: Box<dyn WorkflowBackend>,
    /// Screen rectangle the canvas occupied this frame, for coordinate mapping
    pub canvas_rect: egui::Rect,
    /// Outcome of the most recent save or run, shown in the header
    pub status: Option<String>,
}

impl Default for StudioApp {
    fn default() -> Self {
        Self {
            editor: WorkflowEditor::new(),
            workflow_id: None,
            workflow_name: "Untitled Workflow".to_string(),
            backend: Box::new(LogBackend),
            canvas_rect: egui::Rect::ZERO,
            status: None,
        }
    }
}

impl StudioApp {
    /// Creates an app for building a brand-new workflow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an app editing an existing workflow from its saved snapshot.
    ///
    /// # Arguments
    ///
    /// * `workflow_id` - Identifier the backend knows the workflow by
    /// * `name` - Display name shown in the header
    /// * `snapshot` - Saved state to load into the editor
    pub fn open(workflow_id: String, name: String, snapshot: WorkflowSnapshot) -> Self {
        Self {
            editor: WorkflowEditor::with_graph(snapshot.into_graph()),
            workflow_id: Some(workflow_id),
            workflow_name: name,
            ..Self::default()
        }
    }

    /// Replaces the save/run collaborator, e.g. with a recording double in tests.
    pub fn with_backend(mut self, backend: Box<dyn WorkflowBackend>) -> Self {
        self.backend = backend;
        self
    }

    /// True when editing a workflow that already exists on the backend.
    pub fn is_edit_mode(&self) -> bool {
        self.workflow_id.is_some()
    }
}
