//! Step model shared by every operation
//!
//! A [`Step`] is one observable state change: a comparison, a swap, a node visit, a
//! distance update. Operations never return their steps directly; they hand each one to
//! a [`Recorder`] together with a view of the container *after* the mutation the step
//! describes. What the recorder does with it (collect, snapshot, discard) is up to the
//! caller.
//!
//! # Guard failures
//!
//! An operation that cannot run (popping an empty stack, an index past the end) emits a
//! single step built with [`Step::reject`] and returns without touching the container.
//! Rejected steps are regular steps with `rejected == true`, so a front end can style
//! them without parsing the message.

use crate::structures::NodeId;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// The closed set of step kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    Compare,
    Swap,
    Sorted,
    Active,
    Visited,
    Path,
    Minimum,
    Insert,
    Delete,
    Search,
    Highlight,
    UpdateDistances,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::Sorted => "sorted",
            StepKind::Active => "active",
            StepKind::Visited => "visited",
            StepKind::Path => "path",
            StepKind::Minimum => "minimum",
            StepKind::Insert => "insert",
            StepKind::Delete => "delete",
            StepKind::Search => "search",
            StepKind::Highlight => "highlight",
            StepKind::UpdateDistances => "update-distances",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed edge highlighted by a graph step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRef {
    pub from: String,
    pub to: String,
}

impl EdgeRef {
    pub fn new(from: &str, to: &str) -> Self {
        EdgeRef {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Operation-specific payload attached to a step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Aux {
    /// The single position in `positions` now holds `value`
    Written { value: i64 },
    /// Tentative shortest distances in node order (`None` = unreached)
    Distances {
        distances: IndexMap<String, Option<i64>>,
        edges: Vec<EdgeRef>,
    },
    /// Linked-list ends after the step
    List {
        head: Option<NodeId>,
        tail: Option<NodeId>,
    },
    /// Tree root after an insertion and the node that was created
    Tree {
        new_root: Option<NodeId>,
        new_node: NodeId,
    },
    Validation { valid: bool },
    /// Output sequence of a traversal so far
    Traversal { order: Vec<i64> },
}

/// One discrete, replayable state change
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub kind: StepKind,
    pub positions: Vec<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub node_ids: Vec<String>,
    pub message: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub rejected: bool,
    #[serde(rename = "auxiliary", skip_serializing_if = "Option::is_none")]
    pub aux: Option<Aux>,
}

impl Step {
    pub fn new(kind: StepKind, message: impl Into<String>) -> Self {
        Step {
            kind,
            positions: Vec::new(),
            node_ids: Vec::new(),
            message: message.into(),
            rejected: false,
            aux: None,
        }
    }

    /// Step pointing at positions of a linear container
    pub fn at(kind: StepKind, positions: impl Into<Vec<usize>>, message: impl Into<String>) -> Self {
        Step {
            positions: positions.into(),
            ..Step::new(kind, message)
        }
    }

    /// Terminal step for a failed guard condition
    pub fn reject(message: impl Into<String>) -> Self {
        Step {
            rejected: true,
            ..Step::new(StepKind::Highlight, message)
        }
    }

    pub fn with_positions(mut self, positions: impl Into<Vec<usize>>) -> Self {
        self.positions = positions.into();
        self
    }

    pub fn with_nodes<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.node_ids = ids.into_iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn with_aux(mut self, aux: Aux) -> Self {
        self.aux = Some(aux);
        self
    }

    /// Value written by this step, if it overwrote a single position
    pub fn written_value(&self) -> Option<i64> {
        match self.aux {
            Some(Aux::Written { value }) => Some(value),
            _ => None,
        }
    }
}

/// Receives every step an operation emits, together with the container state right
/// after the step's mutation.
pub trait Recorder<C: ?Sized> {
    fn record(&mut self, state: &C, step: Step);
}

/// Collects the steps and ignores the states
impl<C: ?Sized> Recorder<C> for Vec<Step> {
    fn record(&mut self, _state: &C, step: Step) {
        self.push(step);
    }
}

/// Discards everything. Used when building seed containers.
impl<C: ?Sized> Recorder<C> for () {
    fn record(&mut self, _state: &C, _step: Step) {}
}

/// `[0, 1, .., len - 1]`
pub fn all_positions(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// Render a tentative distance, `∞` when unreached
pub fn format_distance(distance: Option<i64>) -> String {
    match distance {
        Some(d) => d.to_string(),
        None => "∞".to_string(),
    }
}

/// Render a value list as `[a, b, c]`
pub fn format_values(values: &[i64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
