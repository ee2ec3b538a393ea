//! # Introduction
//!
//! algotrace runs sorting algorithms, graph searches and data structure operations one
//! observable step at a time, capturing the container's state after every step. The
//! recording is then played back forward and backward in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), or dumped as JSON.
//!
//! ## Pipeline
//!
//! ```text
//! CLI → Config → seed data → operation → Recorder (steps + snapshots) → TUI / JSON
//! ```
//!
//! 1. [`cli`] and [`config`]: command-line parsing and resolved run settings.
//! 2. [`data`]: reproducible seed arrays and the demo grid graph.
//! 3. [`structures`]: the passive containers (tree and list arenas, hash table, graph).
//! 4. [`algorithms`] and [`operations`]: everything that emits [`step::Step`]s into a
//!    [`step::Recorder`].
//! 5. [`snapshot`]: a [`snapshot::Timeline`] recorder with a memory budget, and
//!    [`replay`] for rebuilding array states from steps alone.
//! 6. [`session`]: ties one command to its recorded timeline.
//! 7. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod algorithms;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod data;
pub mod errors;
pub mod operations;
pub mod replay;
pub mod session;
pub mod snapshot;
pub mod step;
pub mod structures;
pub mod ui;
