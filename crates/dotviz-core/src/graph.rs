//! The in-memory graph model produced by the parser.
//!
//! A [`Graph`] owns its nodes and edges in discovery order. Node ids are
//! unique; edges may reference only nodes that exist in the graph, which is
//! guaranteed by [`Graph::add_edge`] registering unknown endpoints.

use indexmap::IndexMap;
use log::trace;

use crate::attributes::Attributes;

/// Default graph id when the source header does not name one.
pub const DEFAULT_GRAPH_ID: &str = "G";

/// Whether edges in a graph carry a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphKind {
    /// `digraph`: edges are written `a -> b` and drawn with arrowheads.
    #[default]
    Directed,
    /// `graph`: edges are written `a -- b` and drawn as plain lines.
    Undirected,
}

impl GraphKind {
    /// The header keyword introducing graphs of this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            GraphKind::Directed => "digraph",
            GraphKind::Undirected => "graph",
        }
    }

    pub fn is_directed(self) -> bool {
        self == GraphKind::Directed
    }
}

/// A named vertex with its attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: String,
    attributes: Attributes,
}

impl Node {
    pub fn new(id: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            id: id.into(),
            attributes,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The text drawn inside the node: its non-empty `label` attribute,
    /// else its id.
    pub fn label(&self) -> &str {
        self.attributes
            .get("label")
            .filter(|label| !label.is_empty())
            .unwrap_or(&self.id)
    }
}

/// A connection between two nodes, identified by their ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    source: String,
    target: String,
    attributes: Attributes,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            attributes,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The edge's `label` attribute, if present and non-empty.
    pub fn label(&self) -> Option<&str> {
        self.attributes.get("label").filter(|label| !label.is_empty())
    }

    /// Returns true if this edge joins `source` and `target`.
    ///
    /// For undirected graphs the endpoints may appear in either order.
    fn connects(&self, source: &str, target: &str, kind: GraphKind) -> bool {
        let forward = self.source == source && self.target == target;
        match kind {
            GraphKind::Directed => forward,
            GraphKind::Undirected => forward || (self.source == target && self.target == source),
        }
    }
}

/// A parsed graph: header information plus ordered nodes and edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    kind: GraphKind,
    strict: bool,
    id: String,
    attributes: Attributes,
    nodes: IndexMap<String, Node>,
    edges: Vec<Edge>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(GraphKind::Directed, false, DEFAULT_GRAPH_ID)
    }
}

impl Graph {
    /// Creates an empty graph.
    pub fn new(kind: GraphKind, strict: bool, id: impl Into<String>) -> Self {
        Self {
            kind,
            strict,
            id: id.into(),
            attributes: Attributes::new(),
            nodes: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Whether repeated edges are merged instead of appended.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Graph-level attributes such as `bgcolor`.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Iterates over nodes in discovery order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Edges in the order they were declared.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Merges `incoming` into the graph-level attributes.
    pub fn merge_attributes(&mut self, incoming: &Attributes) {
        self.attributes = self.attributes.merge(incoming);
    }

    /// Registers `id` with `defaults` if it is not known yet.
    ///
    /// Returns true if a node was created. Existing nodes are left untouched.
    pub fn ensure_node(&mut self, id: &str, defaults: &Attributes) -> bool {
        if self.nodes.contains_key(id) {
            return false;
        }
        trace!(node_id = id; "Discovered node");
        self.nodes
            .insert(id.to_string(), Node::new(id, defaults.clone()));
        true
    }

    /// Inserts a node or merges `attributes` into the existing one.
    ///
    /// New nodes start from `defaults` with `attributes` merged on top.
    pub fn upsert_node(&mut self, id: &str, defaults: &Attributes, attributes: &Attributes) {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.attributes = node.attributes.merge(attributes);
            }
            None => {
                trace!(node_id = id; "Discovered node");
                self.nodes
                    .insert(id.to_string(), Node::new(id, defaults.merge(attributes)));
            }
        }
    }

    /// Adds an edge between `source` and `target`.
    ///
    /// Both endpoints are registered with `node_defaults` if unknown, source
    /// first. In a strict graph an edge joining the same endpoints absorbs
    /// the new attributes instead of a second edge being appended.
    ///
    /// Returns true if a new edge was appended.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        node_defaults: &Attributes,
        attributes: Attributes,
    ) -> bool {
        self.ensure_node(source, node_defaults);
        self.ensure_node(target, node_defaults);

        if self.strict {
            let kind = self.kind;
            if let Some(existing) = self
                .edges
                .iter_mut()
                .find(|edge| edge.connects(source, target, kind))
            {
                existing.attributes = existing.attributes.merge(&attributes);
                return false;
            }
        }

        self.edges.push(Edge::new(source, target, attributes));
        true
    }
}
