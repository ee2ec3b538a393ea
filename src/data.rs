//! Seed data for the structures: generated arrays, the demo graph and parsing of
//! user-supplied number lists.
//!
//! Everything random takes the generator as an argument so a run is reproducible from
//! its seed.

use crate::errors::{Error, Result};
use crate::structures::graph::Graph;
use clap::ValueEnum;
use rand::seq::index;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Shape of a generated array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ArrayShape {
    #[default]
    Random,
    Sorted,
    Reverse,
    /// Sorted, then roughly 10% of positions swapped at random
    NearlySorted,
}

pub fn random_array<R: Rng>(rng: &mut R, size: usize, min: i64, max: i64) -> Vec<i64> {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    (0..size).map(|_| rng.gen_range(low..=high)).collect()
}

pub fn generate_array<R: Rng>(
    rng: &mut R,
    shape: ArrayShape,
    size: usize,
    min: i64,
    max: i64,
) -> Vec<i64> {
    let mut values = random_array(rng, size, min, max);
    match shape {
        ArrayShape::Random => {}
        ArrayShape::Sorted => values.sort_unstable(),
        ArrayShape::Reverse => values.sort_unstable_by(|a, b| b.cmp(a)),
        ArrayShape::NearlySorted => {
            values.sort_unstable();
            for _ in 0..size / 10 {
                let i = rng.gen_range(0..size);
                let j = rng.gen_range(0..size);
                values.swap(i, j);
            }
        }
    }
    values
}

/// Distinct values for seeding a BST, so no insert is rejected as a duplicate.
///
/// Returns at most as many values as the range holds.
pub fn distinct_values<R: Rng>(rng: &mut R, size: usize, min: i64, max: i64) -> Vec<i64> {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    let span = (i128::from(high) - i128::from(low) + 1) as u128;

    match usize::try_from(span) {
        Ok(span) => index::sample(rng, span, size.min(span))
            .into_iter()
            .map(|offset| (i128::from(low) + offset as i128) as i64)
            .collect(),
        // The whole i64 range: draws almost never repeat
        Err(_) => {
            let mut seen = FxHashSet::default();
            let mut values = Vec::with_capacity(size);
            while values.len() < size {
                let value = rng.gen_range(low..=high);
                if seen.insert(value) {
                    values.push(value);
                }
            }
            values
        }
    }
}

const GRID_SIDE: usize = 4;
const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 400.0;
const MARGIN: f64 = 40.0;
const EXTRA_EDGE_CHANCE: f64 = 0.15;

/// A 4×4 grid: every node links right and down, and now and then diagonally down-right.
///
/// Nodes are named `"0"` to `"15"` row by row. Weights are drawn from `1..=10` when the
/// graph is weighted and are 1 otherwise.
pub fn grid_graph<R: Rng>(rng: &mut R, directed: bool, weighted: bool) -> Graph {
    let mut graph = Graph::new(directed, weighted);
    let step_x = (CANVAS_WIDTH - 2.0 * MARGIN) / (GRID_SIDE - 1) as f64;
    let step_y = (CANVAS_HEIGHT - 2.0 * MARGIN) / (GRID_SIDE - 1) as f64;

    for row in 0..GRID_SIDE {
        for col in 0..GRID_SIDE {
            let id = (row * GRID_SIDE + col).to_string();
            let x = MARGIN + col as f64 * step_x;
            let y = MARGIN + row as f64 * step_y;
            graph.add_node(&id, &id, x, y);
        }
    }

    for row in 0..GRID_SIDE {
        for col in 0..GRID_SIDE {
            let id = row * GRID_SIDE + col;
            let mut targets = Vec::with_capacity(3);
            if col + 1 < GRID_SIDE {
                targets.push(id + 1);
            }
            if row + 1 < GRID_SIDE {
                targets.push(id + GRID_SIDE);
            }
            if col + 1 < GRID_SIDE && row + 1 < GRID_SIDE && rng.gen_bool(EXTRA_EDGE_CHANCE) {
                targets.push(id + GRID_SIDE + 1);
            }
            for to in targets {
                let weight = if weighted { rng.gen_range(1..=10) } else { 1 };
                graph.add_edge(&id.to_string(), &to.to_string(), weight);
            }
        }
    }
    graph
}

/// Parse `"5, 3,,8"` into `[5, 3, 8]`. Blank entries are skipped; anything else that is
/// not an integer is an error.
pub fn parse_number_list(input: &str) -> Result<Vec<i64>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| Error::InvalidInput(format!("'{}' is not an integer", s)))
        })
        .collect()
}
