//! Core data types and structures for the workflow editor.
//!
//! This module defines the fundamental data structures used throughout the
//! application: the closed set of node kinds, the typed property values stored
//! on nodes, the node record itself, and the workflow graph that owns the
//! nodes together with its mutation operations.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Unique identifier for workflow nodes.
pub type NodeId = Uuid;

/// Property key under which a node's free-form description is stored.
pub const PROP_DESCRIPTION: &str = "description";
/// Property key for the enabled flag. A node without this key is enabled.
pub const PROP_ENABLED: &str = "enabled";
/// Property key for the log-output flag. Off unless explicitly set.
pub const PROP_LOG_OUTPUT: &str = "logOutput";

/// The kinds of processing steps available in a workflow.
///
/// Each kind carries no configuration of its own; per-node configuration lives
/// in the node's `properties` map, keyed by the field schema for the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Connects the workflow to an external data source
    DataSource,
    /// Performs a mathematical operation over incoming data
    Calculation,
    /// Checks data quality and rules
    Validation,
    /// Branches the workflow on a condition
    Condition,
    /// Defines where results are delivered
    Output,
}

/// A single configuration value stored on a node.
///
/// Properties form an open string-keyed map, but the values themselves are
/// restricted to this closed set so that downstream consumers never see
/// arbitrary JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A free-form or selected string value
    Text(String),
    /// A boolean toggle
    Flag(bool),
    /// A list of selected string values (e.g. enabled validation rules)
    List(Vec<String>),
}

impl PropertyValue {
    /// Returns the contained string if this value is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the contained boolean if this value is a flag.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            PropertyValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the contained list if this value is a string list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            PropertyValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Flag(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        PropertyValue::List(value)
    }
}

/// A single placed step in the workflow graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,
    /// Which kind of processing step this node is
    pub kind: NodeKind,
    /// User-editable display name
    pub label: String,
    /// Center position on the canvas as (x, y) coordinates
    pub position: (f32, f32),
    /// Open configuration map; keys come from the field schema for `kind`
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
    /// IDs of the nodes this node feeds into
    #[serde(default)]
    pub outgoing: Vec<NodeId>,
}

impl Node {
    /// Creates a new node of the given kind at the given position.
    ///
    /// The label defaults to the catalog label for the kind; properties and
    /// outgoing edges start empty.
    ///
    /// # Arguments
    ///
    /// * `kind` - The kind of processing step to create
    /// * `position` - The (x, y) center position on the canvas
    ///
    /// # Returns
    ///
    /// A new `Node` with a freshly generated unique ID.
    pub fn new(kind: NodeKind, position: (f32, f32)) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            label: kind.catalog().label.to_string(),
            position,
            properties: HashMap::new(),
            outgoing: Vec::new(),
        }
    }

    /// Whether this node participates when the workflow runs.
    /// Nodes are enabled unless the flag has been explicitly turned off.
    pub fn enabled(&self) -> bool {
        self.properties
            .get(PROP_ENABLED)
            .and_then(PropertyValue::as_flag)
            .unwrap_or(true)
    }

    /// Whether this node should log its output when the workflow runs.
    pub fn log_output(&self) -> bool {
        self.properties
            .get(PROP_LOG_OUTPUT)
            .and_then(PropertyValue::as_flag)
            .unwrap_or(false)
    }

    /// The node's free-form description, or an empty string if unset.
    pub fn description(&self) -> &str {
        self.properties
            .get(PROP_DESCRIPTION)
            .and_then(PropertyValue::as_text)
            .unwrap_or("")
    }
}

/// The workflow graph: all placed nodes and the edges between them.
///
/// Edges are stored on their source node as a list of target IDs rather than
/// as a separate collection. Every mutation is total: malformed input (a
/// missing ID, a self-edge, a duplicate edge) degrades to a silent no-op
/// rather than an error, because stale IDs only ever arrive through benign
/// UI event-ordering races.
#[derive(Debug, Clone, Default)]
pub struct WorkflowGraph {
    /// Map of all nodes, indexed by their ID
    nodes: HashMap<NodeId, Node>,
    /// Node IDs in insertion order, for deterministic iteration
    order: Vec<NodeId>,
}

impl WorkflowGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a graph from a list of nodes, e.g. a loaded snapshot.
    ///
    /// Nodes keep their list order. Edge lists are sanitized on the way in:
    /// self-edges, duplicate targets, and targets that do not appear in the
    /// list are dropped, so the resulting graph upholds the no-dangling-edges
    /// invariant even for snapshots produced elsewhere.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        let known: HashSet<NodeId> = nodes.iter().map(|node| node.id).collect();
        let mut graph = Self::new();
        for mut node in nodes {
            if graph.nodes.contains_key(&node.id) {
                continue;
            }
            let id = node.id;
            let mut seen = HashSet::new();
            node.outgoing
                .retain(|target| *target != id && known.contains(target) && seen.insert(*target));
            graph.order.push(id);
            graph.nodes.insert(id, node);
        }
        graph
    }

    /// Creates a node of the given kind at the given position and adds it.
    ///
    /// # Arguments
    ///
    /// * `kind` - The kind of processing step to create
    /// * `position` - The (x, y) center position on the canvas
    ///
    /// # Returns
    ///
    /// The ID of the newly added node.
    pub fn add_node(&mut self, kind: NodeKind, position: (f32, f32)) -> NodeId {
        let node = Node::new(kind, position);
        let id = node.id;
        self.order.push(id);
        self.nodes.insert(id, node);
        id
    }

    /// Replaces the position of the node with the given ID.
    /// Silently ignored if the ID is not present.
    pub fn move_node(&mut self, id: &NodeId, position: (f32, f32)) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.position = position;
        }
    }

    /// Replaces the full record for the node matching `updated.id`.
    ///
    /// This is an identity replace, not a field-level merge: the caller is
    /// expected to clone the current record, edit it, and hand back the whole
    /// thing. Silently ignored if no node with that ID exists.
    pub fn update_node(&mut self, updated: Node) {
        if let Some(existing) = self.nodes.get_mut(&updated.id) {
            *existing = updated;
        }
    }

    /// Removes a node and every edge that references it, in either direction.
    ///
    /// # Arguments
    ///
    /// * `id` - The ID of the node to remove
    ///
    /// # Returns
    ///
    /// `true` if the node was found and removed, `false` if it didn't exist.
    pub fn delete_node(&mut self, id: &NodeId) -> bool {
        let removed = self.nodes.remove(id).is_some();
        if removed {
            self.order.retain(|node_id| node_id != id);
            // Remove all edges pointing at the deleted node
            for node in self.nodes.values_mut() {
                node.outgoing.retain(|target| target != id);
            }
        }
        removed
    }

    /// Adds a directed edge from `source` to `target`.
    ///
    /// Self-edges, edges involving a missing node, and edges that already
    /// exist are silently ignored.
    ///
    /// # Arguments
    ///
    /// * `source` - The ID of the node the edge leaves from
    /// * `target` - The ID of the node the edge points at
    ///
    /// # Returns
    ///
    /// `true` if a new edge was recorded, `false` otherwise.
    pub fn connect(&mut self, source: &NodeId, target: &NodeId) -> bool {
        if source == target || !self.nodes.contains_key(target) {
            return false;
        }
        match self.nodes.get_mut(source) {
            Some(node) if !node.outgoing.contains(target) => {
                node.outgoing.push(*target);
                true
            }
            _ => false,
        }
    }

    /// Returns the node with the given ID, if present.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Iterates over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// The IDs of all nodes in insertion order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.order
    }

    /// Whether a node with the given ID exists.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// The number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The total number of edges across all nodes.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.outgoing.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_creation() {
        let node = Node::new(NodeKind::DataSource, (100.0, 200.0));

        assert_eq!(node.kind, NodeKind::DataSource);
        assert_eq!(node.label, "Data Source");
        assert_eq!(node.position, (100.0, 200.0));
        assert!(node.properties.is_empty());
        assert!(node.outgoing.is_empty());
        assert!(!node.id.is_nil());
    }

    #[test]
    fn test_node_flag_defaults() {
        let mut node = Node::new(NodeKind::Calculation, (0.0, 0.0));

        assert!(node.enabled());
        assert!(!node.log_output());
        assert_eq!(node.description(), "");

        node.properties
            .insert(PROP_ENABLED.to_string(), PropertyValue::Flag(false));
        node.properties
            .insert(PROP_LOG_OUTPUT.to_string(), PropertyValue::Flag(true));
        node.properties
            .insert(PROP_DESCRIPTION.to_string(), PropertyValue::from("sums rows"));

        assert!(!node.enabled());
        assert!(node.log_output());
        assert_eq!(node.description(), "sums rows");
    }

    #[test]
    fn test_add_node() {
        let mut graph = WorkflowGraph::new();

        let id = graph.add_node(NodeKind::Output, (30.0, 40.0));

        assert_eq!(graph.len(), 1);
        assert!(graph.contains(&id));
        let node = graph.node(&id).unwrap();
        assert_eq!(node.kind, NodeKind::Output);
        assert_eq!(node.position, (30.0, 40.0));
    }

    #[test]
    fn test_nodes_iterate_in_insertion_order() {
        let mut graph = WorkflowGraph::new();

        let first = graph.add_node(NodeKind::DataSource, (0.0, 0.0));
        let second = graph.add_node(NodeKind::Calculation, (100.0, 0.0));
        let third = graph.add_node(NodeKind::Output, (200.0, 0.0));

        let ids: Vec<NodeId> = graph.nodes().map(|node| node.id).collect();
        assert_eq!(ids, vec![first, second, third]);
        assert_eq!(graph.node_ids(), &[first, second, third]);
    }

    #[test]
    fn test_move_node() {
        let mut graph = WorkflowGraph::new();
        let id = graph.add_node(NodeKind::Validation, (0.0, 0.0));

        graph.move_node(&id, (75.0, 125.0));

        assert_eq!(graph.node(&id).unwrap().position, (75.0, 125.0));
    }

    #[test]
    fn test_move_node_is_idempotent() {
        let mut graph = WorkflowGraph::new();
        let id = graph.add_node(NodeKind::Validation, (0.0, 0.0));

        graph.move_node(&id, (75.0, 125.0));
        graph.move_node(&id, (75.0, 125.0));

        assert_eq!(graph.node(&id).unwrap().position, (75.0, 125.0));
    }

    #[test]
    fn test_move_missing_node_is_ignored() {
        let mut graph = WorkflowGraph::new();
        graph.add_node(NodeKind::Validation, (0.0, 0.0));

        graph.move_node(&Uuid::new_v4(), (75.0, 125.0));

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.nodes().next().unwrap().position, (0.0, 0.0));
    }

    #[test]
    fn test_update_node_replaces_record() {
        let mut graph = WorkflowGraph::new();
        let id = graph.add_node(NodeKind::DataSource, (10.0, 10.0));

        let mut updated = graph.node(&id).unwrap().clone();
        updated.label = "Orders DB".to_string();
        updated
            .properties
            .insert("sourceType".to_string(), PropertyValue::from("database"));
        graph.update_node(updated);

        let node = graph.node(&id).unwrap();
        assert_eq!(node.label, "Orders DB");
        assert_eq!(
            node.properties.get("sourceType"),
            Some(&PropertyValue::Text("database".to_string()))
        );
    }

    #[test]
    fn test_update_missing_node_is_ignored() {
        let mut graph = WorkflowGraph::new();
        graph.add_node(NodeKind::DataSource, (10.0, 10.0));

        let stray = Node::new(NodeKind::Output, (0.0, 0.0));
        graph.update_node(stray);

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.nodes().next().unwrap().kind, NodeKind::DataSource);
    }

    #[test]
    fn test_connect_adds_edge() {
        let mut graph = WorkflowGraph::new();
        let a = graph.add_node(NodeKind::DataSource, (0.0, 0.0));
        let b = graph.add_node(NodeKind::Calculation, (100.0, 0.0));

        assert!(graph.connect(&a, &b));

        assert_eq!(graph.node(&a).unwrap().outgoing, vec![b]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_connect_to_self_is_rejected() {
        let mut graph = WorkflowGraph::new();
        let a = graph.add_node(NodeKind::Condition, (0.0, 0.0));

        assert!(!graph.connect(&a, &a));

        assert!(graph.node(&a).unwrap().outgoing.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_connect_twice_is_idempotent() {
        let mut graph = WorkflowGraph::new();
        let a = graph.add_node(NodeKind::DataSource, (0.0, 0.0));
        let b = graph.add_node(NodeKind::Output, (100.0, 0.0));

        assert!(graph.connect(&a, &b));
        assert!(!graph.connect(&a, &b));

        assert_eq!(graph.node(&a).unwrap().outgoing, vec![b]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_connect_missing_source_is_ignored() {
        let mut graph = WorkflowGraph::new();
        let b = graph.add_node(NodeKind::Output, (100.0, 0.0));

        assert!(!graph.connect(&Uuid::new_v4(), &b));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_connect_missing_target_is_ignored() {
        let mut graph = WorkflowGraph::new();
        let a = graph.add_node(NodeKind::DataSource, (0.0, 0.0));

        assert!(!graph.connect(&a, &Uuid::new_v4()));
        assert!(graph.node(&a).unwrap().outgoing.is_empty());
    }

    #[test]
    fn test_delete_node() {
        let mut graph = WorkflowGraph::new();
        let id = graph.add_node(NodeKind::Validation, (0.0, 0.0));

        assert!(graph.delete_node(&id));

        assert!(graph.is_empty());
        assert!(graph.node_ids().is_empty());
    }

    #[test]
    fn test_delete_missing_node() {
        let mut graph = WorkflowGraph::new();

        assert!(!graph.delete_node(&Uuid::new_v4()));
    }

    #[test]
    fn test_delete_node_removes_edges_in_both_directions() {
        let mut graph = WorkflowGraph::new();
        let a = graph.add_node(NodeKind::DataSource, (0.0, 0.0));
        let b = graph.add_node(NodeKind::Calculation, (100.0, 0.0));
        let c = graph.add_node(NodeKind::Output, (200.0, 0.0));

        graph.connect(&a, &b);
        graph.connect(&b, &c);
        graph.connect(&a, &c);
        assert_eq!(graph.edge_count(), 3);

        assert!(graph.delete_node(&b));

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.node(&a).unwrap().outgoing, vec![c]);
    }

    #[test]
    fn test_no_dangling_edges_after_add_delete_sequence() {
        let mut graph = WorkflowGraph::new();
        let a = graph.add_node(NodeKind::DataSource, (0.0, 0.0));
        let b = graph.add_node(NodeKind::Calculation, (100.0, 0.0));
        let c = graph.add_node(NodeKind::Validation, (200.0, 0.0));
        let d = graph.add_node(NodeKind::Output, (300.0, 0.0));

        graph.connect(&a, &b);
        graph.connect(&a, &c);
        graph.connect(&b, &c);
        graph.connect(&b, &d);
        graph.connect(&c, &d);

        graph.delete_node(&c);
        graph.delete_node(&a);
        graph.add_node(NodeKind::Condition, (400.0, 0.0));

        for node in graph.nodes() {
            for target in &node.outgoing {
                assert!(graph.contains(target), "edge to missing node {target}");
            }
        }
    }

    #[test]
    fn test_source_feeding_calculation_scenario() {
        let mut graph = WorkflowGraph::new();

        let source = graph.add_node(NodeKind::DataSource, (100.0, 100.0));
        let calc = graph.add_node(NodeKind::Calculation, (400.0, 100.0));
        graph.connect(&source, &calc);

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.edge_count(), 1);

        graph.delete_node(&source);

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_from_nodes_preserves_order_and_edges() {
        let mut a = Node::new(NodeKind::DataSource, (0.0, 0.0));
        let b = Node::new(NodeKind::Output, (100.0, 0.0));
        a.outgoing.push(b.id);
        let (a_id, b_id) = (a.id, b.id);

        let graph = WorkflowGraph::from_nodes(vec![a, b]);

        assert_eq!(graph.node_ids(), &[a_id, b_id]);
        assert_eq!(graph.node(&a_id).unwrap().outgoing, vec![b_id]);
    }

    #[test]
    fn test_from_nodes_sanitizes_edge_lists() {
        let mut a = Node::new(NodeKind::DataSource, (0.0, 0.0));
        let b = Node::new(NodeKind::Calculation, (100.0, 0.0));
        let b_id = b.id;
        // Self-edge, duplicate, and a target that is not in the list
        a.outgoing.push(a.id);
        a.outgoing.push(b_id);
        a.outgoing.push(b_id);
        a.outgoing.push(Uuid::new_v4());
        let a_id = a.id;

        let graph = WorkflowGraph::from_nodes(vec![a, b]);

        assert_eq!(graph.node(&a_id).unwrap().outgoing, vec![b_id]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_node_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(NodeKind::DataSource).unwrap(),
            json!("datasource")
        );
        assert_eq!(
            serde_json::to_value(NodeKind::Condition).unwrap(),
            json!("condition")
        );
        let kind: NodeKind = serde_json::from_value(json!("validation")).unwrap();
        assert_eq!(kind, NodeKind::Validation);
    }

    #[test]
    fn test_property_value_serde_forms() {
        assert_eq!(
            serde_json::to_value(PropertyValue::from("database")).unwrap(),
            json!("database")
        );
        assert_eq!(
            serde_json::to_value(PropertyValue::Flag(true)).unwrap(),
            json!(true)
        );
        assert_eq!(
            serde_json::to_value(PropertyValue::from(vec![
                "required".to_string(),
                "range".to_string()
            ]))
            .unwrap(),
            json!(["required", "range"])
        );

        let text: PropertyValue = serde_json::from_value(json!("sum")).unwrap();
        assert_eq!(text, PropertyValue::Text("sum".to_string()));
        let flag: PropertyValue = serde_json::from_value(json!(false)).unwrap();
        assert_eq!(flag, PropertyValue::Flag(false));
        let list: PropertyValue = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(
            list,
            PropertyValue::List(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_node_deserialization_defaults() {
        let id = Uuid::new_v4();
        let value = json!({
            "id": id,
            "kind": "output",
            "label": "Report",
            "position": [320.0, 180.0]
        });

        let node: Node = serde_json::from_value(value).unwrap();

        assert_eq!(node.id, id);
        assert_eq!(node.kind, NodeKind::Output);
        assert_eq!(node.label, "Report");
        assert!(node.properties.is_empty());
        assert!(node.outgoing.is_empty());
    }
}
