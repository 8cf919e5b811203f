//! # Workflow Studio
//!
//! A visual designer for automation workflows: drag components from a library
//! onto a canvas, connect them left to right, and configure each one in a
//! properties panel. Supports five kinds of components:
//! - **Data Source**: pulls records from databases, APIs, files, or webhooks
//! - **Calculation Step**: derives values with sums, averages, counts, or formulas
//! - **Validation**: checks data quality and decides how errors are handled
//! - **Conditional Logic**: branches the flow on an expression
//! - **Output**: delivers results to a table, file, endpoint, or dashboard
//!
//! ## Features
//! - Drag-and-drop component creation with a live drag preview
//! - Click or drag from an output port to connect components
//! - Single selection with keyboard deletion and cascading edge cleanup
//! - Schema-driven configuration fields per component kind
//! - Save/run hand-off of the whole workflow as a JSON snapshot

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod backend;
mod catalog;
mod constants;
mod editor;
mod geometry;
mod types;
mod ui;

// Re-export public types and functions
pub use backend::{BackendError, LogBackend, WorkflowBackend, WorkflowSnapshot};
pub use catalog::{CatalogEntry, FieldKind, FieldSpec};
pub use editor::{ConnectState, WorkflowEditor};
pub use types::{Node, NodeId, NodeKind, PropertyValue, WorkflowGraph};
pub use ui::StudioApp;

/// Runs the workflow studio with an empty canvas for a new workflow.
///
/// This function initializes the egui application window and starts the main
/// event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an
/// `eframe::Error` if initialization fails.
///
/// # Example
///
/// ```no_run
/// use workflow_studio::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Workflow Studio",
        options,
        Box::new(|_cc| Ok(Box::new(StudioApp::default()))),
    )
}

/// Runs the workflow studio editing an existing workflow.
///
/// # Arguments
///
/// * `workflow_id` - Identifier the backend knows the workflow by
/// * `name` - Display name shown in the header
/// * `snapshot` - Saved state to load into the editor
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an
/// `eframe::Error` if initialization fails.
pub fn run_app_with(
    workflow_id: String,
    name: String,
    snapshot: WorkflowSnapshot,
) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Workflow Studio",
        options,
        Box::new(move |_cc| Ok(Box::new(StudioApp::open(workflow_id, name, snapshot)))),
    )
}
