//! Passive containers the operations act on
//!
//! - [`graph`]: adjacency-list graph with display coordinates
//! - [`tree`]: binary tree node arena (used for both plain binary trees and BSTs)
//! - [`linked_list`]: singly linked list node arena
//! - [`hash_table`]: fixed-capacity table resolved by linear probing
//!
//! Arrays, stacks, queues and heaps are plain `Vec<i64>`; their ordering conventions live
//! with the operations in [`crate::operations`].
//!
//! # Node identity
//!
//! Trees and linked lists store their nodes in an arena addressed by [`NodeId`]. Ids are
//! handed out by the arena in allocation order and never reused, so an id seen in an old
//! step always names the same node. Indexing an arena with an id it did not produce (or
//! one whose node was freed) is a caller bug and panics.

pub mod graph;
pub mod hash_table;
pub mod linked_list;
pub mod tree;

use serde::Serialize;
use std::fmt;

/// Handle to a node in a tree or linked-list arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(index as u32)
    }

    /// Slot of this node in its arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}
