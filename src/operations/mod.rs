//! Step-emitting operations on the data structures
//!
//! Every function takes the container, its operands and a [`Recorder`](crate::step::Recorder),
//! and returns its result explicitly (found position, removed value, new node id). A
//! guard failure such as popping an empty stack emits one rejected step and leaves the
//! container untouched.
//!
//! Linear containers are plain `Vec<i64>`, so read-only operations take `&Vec<i64>` to
//! keep the recorder type the same as for the mutating ones.
#![allow(clippy::ptr_arg)]

pub mod array;
pub mod binary_tree;
pub mod bst;
pub mod hash_table;
pub mod heap;
pub mod linked_list;
pub mod queue;
pub mod stack;
