//! Snapshot hand-off to save and run collaborators.
//!
//! The editor's only contract with the outside world is a [`WorkflowSnapshot`]
//! of the then-current graph. What saving or running actually means lives
//! behind [`WorkflowBackend`]; the bundled [`LogBackend`] just reports the
//! hand-off until a real service is wired up.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Node, WorkflowGraph};

/// Errors a save/run collaborator can report back to the editor.
#[derive(Error, Debug, Clone)]
pub enum BackendError {
    /// The snapshot could not be turned into a payload.
    #[error("Failed to serialize workflow snapshot: {0}")]
    Serialization(String),

    /// The collaborator refused or failed the request.
    #[error("Backend rejected {operation}: {message}")]
    Rejected {
        /// Which operation was refused ("save" or "run")
        operation: String,
        /// The collaborator's reason
        message: String,
    },
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Serialization(err.to_string())
    }
}

/// The full, self-contained state of a workflow graph at a point in time.
///
/// Edges ride along inside each node's `outgoing` list, so the node list is
/// the whole story.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowSnapshot {
    /// All nodes, in canvas insertion order
    pub nodes: Vec<Node>,
}

impl WorkflowSnapshot {
    /// Captures the current state of a graph.
    pub fn capture(graph: &WorkflowGraph) -> Self {
        Self {
            nodes: graph.nodes().cloned().collect(),
        }
    }

    /// Rebuilds an editable graph from this snapshot.
    pub fn into_graph(self) -> WorkflowGraph {
        WorkflowGraph::from_nodes(self.nodes)
    }

    /// Serialize the snapshot to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a snapshot from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The total number of edges across all nodes in the snapshot.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.outgoing.len()).sum()
    }
}

/// A save/run collaborator for workflow snapshots.
///
/// Implementations receive the external workflow identifier and display name
/// alongside the snapshot; the editor never interprets the identifier itself.
/// A workflow that has never been saved carries no identifier yet, so the
/// identifier is optional.
pub trait WorkflowBackend {
    /// Persists the snapshot under the given workflow identifier.
    fn save(
        &mut self,
        workflow_id: Option<&str>,
        name: &str,
        snapshot: &WorkflowSnapshot,
    ) -> Result<(), BackendError>;

    /// Starts a run of the workflow described by the snapshot.
    fn run(
        &mut self,
        workflow_id: Option<&str>,
        name: &str,
        snapshot: &WorkflowSnapshot,
    ) -> Result<(), BackendError>;
}

/// The default backend: logs each hand-off and its payload.
#[derive(Debug, Default)]
pub struct LogBackend;

impl WorkflowBackend for LogBackend {
    fn save(
        &mut self,
        workflow_id: Option<&str>,
        name: &str,
        snapshot: &WorkflowSnapshot,
    ) -> Result<(), BackendError> {
        let payload = snapshot.to_json()?;
        info!(
            "Saving workflow '{name}' ({}): {} nodes, {} connections",
            workflow_id.unwrap_or("unsaved"),
            snapshot.nodes.len(),
            snapshot.edge_count()
        );
        debug!("Save payload: {payload}");
        Ok(())
    }

    fn run(
        &mut self,
        workflow_id: Option<&str>,
        name: &str,
        snapshot: &WorkflowSnapshot,
    ) -> Result<(), BackendError> {
        let payload = snapshot.to_json()?;
        info!(
            "Running workflow '{name}' ({}): {} nodes, {} connections",
            workflow_id.unwrap_or("unsaved"),
            snapshot.nodes.len(),
            snapshot.edge_count()
        );
        debug!("Run payload: {payload}");
        Ok(())
    }
}
