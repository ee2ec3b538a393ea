// Snapshot history for stepping backwards through an operation

use crate::errors::{Error, Result};
use crate::step::{Recorder, Step};
use crate::structures::hash_table::HashTable;
use crate::structures::linked_list::LinkedList;
use crate::structures::tree::Tree;
use std::mem::size_of;
use tracing::warn;

/// Rough memory cost of keeping a copy of a container
pub trait Footprint {
    fn estimated_size(&self) -> usize;
}

impl Footprint for Vec<i64> {
    fn estimated_size(&self) -> usize {
        size_of::<Vec<i64>>() + self.len() * size_of::<i64>()
    }
}

impl Footprint for Tree {
    fn estimated_size(&self) -> usize {
        // id + value + two child links
        self.len() * 32 + 32
    }
}

impl Footprint for LinkedList {
    fn estimated_size(&self) -> usize {
        // id + value + next link
        self.len() * 32 + 32
    }
}

impl Footprint for HashTable {
    fn estimated_size(&self) -> usize {
        // Option<(key, value)> per slot
        self.capacity() * 24 + 32
    }
}

/// Steps of one operation together with the container state after each of them.
///
/// Frame 0 is the state before the first step; frame `k` is the state after step `k`.
/// Once the memory budget would be exceeded, steps keep being recorded but no further
/// states are captured. [`Timeline::state_at`] then falls back to the last captured
/// frame and [`Timeline::check`] reports the overflow.
#[derive(Debug, Clone)]
pub struct Timeline<S> {
    steps: Vec<Step>,
    states: Vec<S>,
    max_memory: usize,
    current_memory: usize,
    overflow: Option<usize>,
}

impl<S: Footprint> Timeline<S> {
    pub fn new(initial: S, max_memory: usize) -> Self {
        let size = initial.estimated_size();
        Timeline {
            steps: Vec::new(),
            states: vec![initial],
            max_memory,
            current_memory: size,
            overflow: None,
        }
    }

    /// Record a step and, budget permitting, the state it produced
    pub fn push(&mut self, step: Step, state: S) {
        self.steps.push(step);
        if self.overflow.is_some() {
            return;
        }

        let size = state.estimated_size();
        if self.current_memory + size > self.max_memory {
            warn!(
                "Snapshot memory limit exceeded: {} + {} > {}, history truncated at step {}",
                self.current_memory,
                size,
                self.max_memory,
                self.steps.len() - 1
            );
            self.overflow = Some(self.current_memory + size);
            return;
        }
        self.current_memory += size;
        self.states.push(state);
    }

    /// Err if some states were dropped to stay within budget
    pub fn check(&self) -> Result<()> {
        match self.overflow {
            Some(current) => Err(Error::SnapshotLimitExceeded {
                current,
                limit: self.max_memory,
            }),
            None => Ok(()),
        }
    }
}

impl<S> Timeline<S> {
    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Step `index` (0-based)
    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// State after `position` steps, clamped to the last captured frame
    pub fn state_at(&self, position: usize) -> &S {
        let last = self.states.len() - 1;
        &self.states[position.min(last)]
    }

    pub fn initial(&self) -> &S {
        &self.states[0]
    }

    /// Number of captured frames, including the initial state
    pub fn captured(&self) -> usize {
        self.states.len()
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl<C, S> Recorder<C> for Timeline<S>
where
    C: ToOwned<Owned = S> + ?Sized,
    S: Footprint,
{
    fn record(&mut self, state: &C, step: Step) {
        self.push(step, state.to_owned());
    }
}
