//! One run: seed the container, execute the chosen operation into a snapshot timeline,
//! and keep everything the viewer needs to play it back.

use crate::algorithms::graph::{bfs, dfs, dijkstra};
use crate::algorithms::GraphAlgorithm;
use crate::catalog::{graph_info, sort_info, AlgorithmInfo};
use crate::cli::{ArrayOp, BstOp, Command, HashOp, HeapOp, ListOp, QueueOp, StackOp, TreeOp};
use crate::config::Config;
use crate::data::{distinct_values, generate_array, grid_graph, ArrayShape};
use crate::errors::Result;
use crate::operations::{array, binary_tree, bst, hash_table, heap, linked_list, queue, stack};
use crate::snapshot::{Footprint, Timeline};
use crate::step::Step;
use crate::structures::graph::Graph;
use crate::structures::hash_table::HashTable;
use crate::structures::linked_list::LinkedList;
use crate::structures::tree::Tree;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt::Debug;
use tracing::{debug, info};

/// How a `Vec<i64>` container should be labelled when drawn as bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linear {
    Array,
    Stack,
    Queue,
    Heap,
}

/// Recorded history, by the shape the viewer draws it in
#[derive(Debug, Clone)]
pub enum Scene {
    Bars {
        layout: Linear,
        timeline: Timeline<Vec<i64>>,
    },
    List(Timeline<LinkedList>),
    Tree(Timeline<Tree>),
    Table(Timeline<HashTable>),
    /// Graph algorithms never mutate the graph, so only the steps are kept
    Graph { graph: Graph, steps: Vec<Step> },
}

impl Scene {
    pub fn steps(&self) -> &[Step] {
        match self {
            Scene::Bars { timeline, .. } => timeline.steps(),
            Scene::List(timeline) => timeline.steps(),
            Scene::Tree(timeline) => timeline.steps(),
            Scene::Table(timeline) => timeline.steps(),
            Scene::Graph { steps, .. } => steps,
        }
    }

    /// Bytes held by captured snapshots
    pub fn memory_usage(&self) -> usize {
        match self {
            Scene::Bars { timeline, .. } => timeline.memory_usage(),
            Scene::List(timeline) => timeline.memory_usage(),
            Scene::Tree(timeline) => timeline.memory_usage(),
            Scene::Table(timeline) => timeline.memory_usage(),
            Scene::Graph { .. } => 0,
        }
    }

    /// Err if the snapshot budget ran out before the last step
    pub fn check(&self) -> Result<()> {
        match self {
            Scene::Bars { timeline, .. } => timeline.check(),
            Scene::List(timeline) => timeline.check(),
            Scene::Tree(timeline) => timeline.check(),
            Scene::Table(timeline) => timeline.check(),
            Scene::Graph { .. } => Ok(()),
        }
    }
}

pub struct Session {
    /// What ran, e.g. "Quick Sort" or "Stack: Push { value: 4 }"
    pub title: String,
    pub info: Option<AlgorithmInfo>,
    /// The operation's return value, rendered for display
    pub outcome: String,
    pub speed: f64,
    pub scene: Scene,
}

impl Session {
    pub fn build(config: &Config, command: &Command) -> Result<Session> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let limit = config.snapshot_limit;

        let (title, info, outcome, scene) = match command {
            Command::Sort { algorithm, shape } => {
                let data = seed_values(config, &mut rng, *shape);
                let (timeline, ()) = record(data, limit, |data, t| algorithm.run(data, t));
                let outcome = format!("{:?}", timeline.state_at(timeline.len()));
                (
                    algorithm.name().to_string(),
                    Some(sort_info(*algorithm)),
                    outcome,
                    Scene::Bars {
                        layout: Linear::Array,
                        timeline,
                    },
                )
            }
            Command::Array { op } => {
                let data = seed_values(config, &mut rng, ArrayShape::Random);
                let (timeline, outcome) = record(data, limit, |arr, t| match *op {
                    ArrayOp::Insert { index, value } => shown(array::insert(arr, index, value, t)),
                    ArrayOp::Delete { index } => shown(array::delete(arr, index, t)),
                    ArrayOp::Search { value } => shown(array::search(arr, value, t)),
                    ArrayOp::Access { index } => shown(array::access(arr, index, t)),
                    ArrayOp::Update { index, value } => shown(array::update(arr, index, value, t)),
                });
                let layout = Linear::Array;
                (titled("Array", op), None, outcome, Scene::Bars { layout, timeline })
            }
            Command::Stack { op } => {
                let mut data = seed_values(config, &mut rng, ArrayShape::Random);
                if let Some(bound) = config.bound {
                    data.truncate(bound);
                }
                let bound = config.bound;
                let (timeline, outcome) = record(data, limit, |s, t| match *op {
                    StackOp::Push { value } => shown(stack::push(s, value, bound, t)),
                    StackOp::Pop => shown(stack::pop(s, t)),
                    StackOp::Peek => shown(stack::peek(s, t)),
                    StackOp::Search { value } => shown(stack::search(s, value, t)),
                    StackOp::IsEmpty => shown(stack::is_empty(s, t)),
                    StackOp::Size => shown(stack::size(s, t)),
                });
                let layout = Linear::Stack;
                (titled("Stack", op), None, outcome, Scene::Bars { layout, timeline })
            }
            Command::Queue { op } => {
                let mut data = seed_values(config, &mut rng, ArrayShape::Random);
                if let Some(bound) = config.bound {
                    data.truncate(bound);
                }
                let bound = config.bound;
                let (timeline, outcome) = record(data, limit, |q, t| match *op {
                    QueueOp::Enqueue { value } => shown(queue::enqueue(q, value, bound, t)),
                    QueueOp::Dequeue => shown(queue::dequeue(q, t)),
                    QueueOp::Peek => shown(queue::peek(q, t)),
                    QueueOp::Rear => shown(queue::rear(q, t)),
                    QueueOp::Search { value } => shown(queue::search(q, value, t)),
                    QueueOp::IsEmpty => shown(queue::is_empty(q, t)),
                    QueueOp::Size => shown(queue::size(q, t)),
                });
                let layout = Linear::Queue;
                (titled("Queue", op), None, outcome, Scene::Bars { layout, timeline })
            }
            Command::List { op } => {
                let list = LinkedList::from_values(&seed_values(config, &mut rng, ArrayShape::Random));
                let (timeline, outcome) = record(list, limit, |l, t| match *op {
                    ListOp::InsertHead { value } => linked_list::insert_head(l, value, t).to_string(),
                    ListOp::InsertTail { value } => linked_list::insert_tail(l, value, t).to_string(),
                    ListOp::InsertAt { value, position } => {
                        shown(linked_list::insert_at(l, value, position, t).map(|id| id.to_string()))
                    }
                    ListOp::DeleteHead => shown(linked_list::delete_head(l, t)),
                    ListOp::DeleteTail => shown(linked_list::delete_tail(l, t)),
                    ListOp::DeleteAt { position } => shown(linked_list::delete_at(l, position, t)),
                    ListOp::Search { value } => shown(linked_list::search(l, value, t)),
                    ListOp::IsEmpty => shown(linked_list::is_empty(l, t)),
                    ListOp::Size => shown(linked_list::size(l, t)),
                });
                (titled("Linked List", op), None, outcome, Scene::List(timeline))
            }
            Command::Tree { op } => {
                let mut tree = Tree::new();
                for value in seed_values(config, &mut rng, ArrayShape::Random) {
                    binary_tree::insert(&mut tree, value, &mut ());
                }
                let (timeline, outcome) = record(tree, limit, |tree, t| match *op {
                    TreeOp::Insert { value } => binary_tree::insert(tree, value, t).to_string(),
                    TreeOp::Search { value } => {
                        shown(binary_tree::search(tree, value, t).map(|id| id.to_string()))
                    }
                    TreeOp::Traverse { order } => shown(binary_tree::traverse(tree, order, t)),
                });
                (titled("Binary Tree", op), None, outcome, Scene::Tree(timeline))
            }
            Command::Bst { op } => {
                let values = match &config.data {
                    Some(values) => values.clone(),
                    None => distinct_values(&mut rng, config.size, config.min, config.max),
                };
                let mut tree = Tree::new();
                for value in values {
                    bst::insert(&mut tree, value, &mut ());
                }
                let (timeline, outcome) = record(tree, limit, |tree, t| match *op {
                    BstOp::Insert { value } => {
                        shown(bst::insert(tree, value, t).map(|id| id.to_string()))
                    }
                    BstOp::Search { value } => {
                        shown(bst::search(tree, value, t).map(|id| id.to_string()))
                    }
                    BstOp::Min => shown(bst::find_min(tree, t)),
                    BstOp::Max => shown(bst::find_max(tree, t)),
                    BstOp::Validate => shown(bst::validate(tree, t)),
                    BstOp::Traverse { order } => shown(binary_tree::traverse(tree, order, t)),
                });
                (titled("BST", op), None, outcome, Scene::Tree(timeline))
            }
            Command::Heap { op } => {
                let mut data = seed_values(config, &mut rng, ArrayShape::Random);
                if *op != HeapOp::Heapify {
                    heap::heapify(&mut data, &mut ());
                }
                let (timeline, outcome) = record(data, limit, |h, t| match *op {
                    HeapOp::Insert { value } => shown(heap::insert(h, value, t)),
                    HeapOp::ExtractMin => shown(heap::extract_min(h, t)),
                    HeapOp::Heapify => shown(heap::heapify(h, t)),
                    HeapOp::Peek => shown(heap::peek(h, t)),
                    HeapOp::Size => shown(heap::size(h, t)),
                    HeapOp::IsEmpty => shown(heap::is_empty(h, t)),
                    HeapOp::Sort => shown(heap::sort(h, t)),
                });
                let layout = Linear::Heap;
                (titled("Heap", op), None, outcome, Scene::Bars { layout, timeline })
            }
            Command::Hash { op } => {
                let mut table = HashTable::with_capacity(config.capacity);
                let keys = seed_values(config, &mut rng, ArrayShape::Random);
                for key in keys.into_iter().take(config.capacity / 2) {
                    hash_table::insert(&mut table, key, key.saturating_mul(10), &mut ());
                }
                let (timeline, outcome) = record(table, limit, |table, t| match op {
                    HashOp::Insert { key, value } => {
                        shown(hash_table::insert(table, *key, *value, t))
                    }
                    HashOp::Search { key } => {
                        shown(hash_table::search(table, *key, t))
                    }
                    HashOp::Delete { key } => shown(hash_table::delete(table, *key, t)),
                    HashOp::Keys => shown(hash_table::keys(table, t)),
                    HashOp::LoadFactor => format!("{:.2}", hash_table::load_factor(table, t)),
                    HashOp::Clear => shown(hash_table::clear(table, t)),
                    HashOp::Stats => shown(hash_table::collision_stats(table, t)),
                });
                (titled("Hash Table", op), None, outcome, Scene::Table(timeline))
            }
            Command::Graph {
                algorithm,
                start,
                target,
                directed,
                weighted,
            } => {
                let graph = grid_graph(&mut rng, *directed, *weighted);
                debug!(
                    "Built grid graph: {} nodes, {} edges",
                    graph.node_count(),
                    graph.edge_count()
                );
                let mut steps: Vec<Step> = Vec::new();
                let outcome = match algorithm {
                    GraphAlgorithm::Bfs => shown(bfs(&graph, start, &mut steps)),
                    GraphAlgorithm::Dfs => shown(dfs(&graph, start, &mut steps)),
                    GraphAlgorithm::Dijkstra => {
                        let paths = dijkstra(&graph, start, target.as_deref(), &mut steps);
                        match paths.path {
                            Some(path) => format!("path {:?}", path),
                            None => shown(paths.distances),
                        }
                    }
                };
                (
                    algorithm.name().to_string(),
                    Some(graph_info(*algorithm)),
                    outcome,
                    Scene::Graph { graph, steps },
                )
            }
        };

        info!(
            "{}: {} steps, {} snapshot bytes",
            title,
            scene.steps().len(),
            scene.memory_usage()
        );
        Ok(Session {
            title,
            info,
            outcome,
            speed: config.speed,
            scene,
        })
    }

    pub fn steps(&self) -> &[Step] {
        self.scene.steps()
    }

    /// The step list as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.steps())?)
    }
}

fn seed_values(config: &Config, rng: &mut StdRng, shape: ArrayShape) -> Vec<i64> {
    let values = match &config.data {
        Some(values) => values.clone(),
        None => generate_array(rng, shape, config.size, config.min, config.max),
    };
    debug!("Seed values: {:?}", values);
    values
}

/// Run `op` on a copy of `initial`, recording every step with its snapshot
fn record<S, T, F>(initial: S, limit: usize, op: F) -> (Timeline<S>, T)
where
    S: Footprint + Clone,
    F: FnOnce(&mut S, &mut Timeline<S>) -> T,
{
    let mut container = initial.clone();
    let mut timeline = Timeline::new(initial, limit);
    let result = op(&mut container, &mut timeline);
    (timeline, result)
}

fn shown<T: Debug>(value: T) -> String {
    format!("{:?}", value)
}

fn titled(family: &str, op: &impl Debug) -> String {
    format!("{}: {:?}", family, op)
}
