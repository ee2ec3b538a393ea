//! Adjacency-list graph
//!
//! Nodes and adjacency lists are kept in insertion order, which is what every traversal
//! falls back on when it needs a deterministic tie-break.

use indexmap::IndexMap;

/// A vertex with its display coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: String,
    pub value: String,
    pub x: f64,
    pub y: f64,
}

/// An outgoing edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    nodes: IndexMap<String, GraphNode>,
    adjacency: IndexMap<String, Vec<Edge>>,
    directed: bool,
    weighted: bool,
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new(false, false)
    }
}

impl Graph {
    pub fn new(directed: bool, weighted: bool) -> Self {
        Graph {
            nodes: IndexMap::new(),
            adjacency: IndexMap::new(),
            directed,
            weighted,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Add a node; an id that already exists is left untouched
    pub fn add_node(&mut self, id: &str, value: &str, x: f64, y: f64) {
        if self.nodes.contains_key(id) {
            return;
        }
        self.nodes.insert(
            id.to_string(),
            GraphNode {
                id: id.to_string(),
                value: value.to_string(),
                x,
                y,
            },
        );
        self.adjacency.insert(id.to_string(), Vec::new());
    }

    /// Remove a node and every edge pointing at it
    pub fn remove_node(&mut self, id: &str) {
        if self.nodes.shift_remove(id).is_none() {
            return;
        }
        self.adjacency.shift_remove(id);
        for edges in self.adjacency.values_mut() {
            edges.retain(|e| e.target != id);
        }
    }

    /// Add an edge between existing nodes. Returns `false` (and changes nothing) when an
    /// endpoint is missing, the edge is a self-loop, or it already exists.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: i64) -> bool {
        if source == target || !self.contains(source) || !self.contains(target) {
            return false;
        }
        if self.has_edge(source, target) {
            return false;
        }

        self.push_edge(source, target, weight);
        if !self.directed {
            self.push_edge(target, source, weight);
        }
        true
    }

    fn push_edge(&mut self, source: &str, target: &str, weight: i64) {
        if let Some(edges) = self.adjacency.get_mut(source) {
            edges.push(Edge {
                source: source.to_string(),
                target: target.to_string(),
                weight,
            });
        }
    }

    pub fn remove_edge(&mut self, source: &str, target: &str) {
        if let Some(edges) = self.adjacency.get_mut(source) {
            edges.retain(|e| e.target != target);
        }
        if !self.directed {
            if let Some(edges) = self.adjacency.get_mut(target) {
                edges.retain(|e| e.target != source);
            }
        }
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edges(source).iter().any(|e| e.target == target)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Outgoing edges of `id`, empty for unknown ids
    pub fn edges(&self, id: &str) -> &[Edge] {
        self.adjacency.get(id).map_or(&[], Vec::as_slice)
    }

    /// Every stored edge; undirected edges appear once per direction
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency.values().flatten()
    }

    /// Targets of the outgoing edges of `id`, in insertion order
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.edges(id).iter().map(|e| e.target.as_str()).collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of logical edges (an undirected edge counts once)
    pub fn edge_count(&self) -> usize {
        let stored: usize = self.adjacency.values().map(Vec::len).sum();
        if self.directed {
            stored
        } else {
            stored / 2
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.adjacency.clear();
    }
}
