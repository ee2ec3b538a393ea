//! Binary tree operations: level-order insertion, search and the four traversals
//!
//! Traversals only read the tree, so they also serve the BST. Each visit emits one
//! `search` step carrying the output sequence so far.

use crate::step::{all_positions, format_values, Aux, Recorder, Step, StepKind};
use crate::structures::tree::Tree;
use crate::structures::NodeId;
use clap::ValueEnum;
use std::collections::VecDeque;

/// Insert `value` at the first free child slot in level order.
///
/// Positions are level-order indices (children of `p` at `2p + 1` and `2p + 2`), which
/// line up with the node layout because this insertion keeps the tree complete.
pub fn insert<R: Recorder<Tree>>(tree: &mut Tree, value: i64, rec: &mut R) -> NodeId {
    rec.record(
        tree,
        Step::new(
            StepKind::Highlight,
            format!("Creating new node with value {}", value),
        ),
    );

    let Some(root) = tree.root() else {
        let id = tree.alloc(value);
        tree.set_root(id);
        rec.record(
            tree,
            Step::at(
                StepKind::Insert,
                vec![0],
                format!("{} is now the root. Tree size: {}", value, tree.len()),
            )
            .with_nodes([id])
            .with_aux(Aux::Tree {
                new_root: Some(id),
                new_node: id,
            }),
        );
        return id;
    };

    let mut queue = VecDeque::from([root]);
    let mut position = 0;
    while let Some(current) = queue.pop_front() {
        let node = &tree[current];
        let (parent_value, left, right) = (node.value, node.left, node.right);
        rec.record(
            tree,
            Step::at(
                StepKind::Compare,
                vec![position],
                format!("Checking node {} for available child positions", parent_value),
            )
            .with_nodes([current]),
        );

        let (slot, side) = match (left, right) {
            (None, _) => (position * 2 + 1, "left"),
            (Some(_), None) => (position * 2 + 2, "right"),
            (Some(l), Some(r)) => {
                queue.push_back(l);
                queue.push_back(r);
                position += 1;
                continue;
            }
        };

        let id = tree.alloc(value);
        if side == "left" {
            tree[current].left = Some(id);
        } else {
            tree[current].right = Some(id);
        }
        rec.record(
            tree,
            Step::at(
                StepKind::Insert,
                vec![slot],
                format!(
                    "Inserted {} as {} child of {}. Tree size: {}",
                    value,
                    side,
                    parent_value,
                    tree.len()
                ),
            )
            .with_nodes([id])
            .with_aux(Aux::Tree {
                new_root: None,
                new_node: id,
            }),
        );
        return id;
    }

    unreachable!("a finite tree always has a free child slot")
}

/// Level-order search; returns the first node holding `target`
pub fn search<R: Recorder<Tree>>(tree: &Tree, target: i64, rec: &mut R) -> Option<NodeId> {
    let Some(root) = tree.root() else {
        rec.record(tree, Step::reject("Tree is empty"));
        return None;
    };

    rec.record(
        tree,
        Step::new(
            StepKind::Highlight,
            format!("Searching for {} in binary tree", target),
        ),
    );

    let mut queue = VecDeque::from([root]);
    let mut position = 0;
    while let Some(current) = queue.pop_front() {
        let node = &tree[current];
        let op = if node.value == target { "==" } else { "!=" };
        rec.record(
            tree,
            Step::at(
                StepKind::Compare,
                vec![position],
                format!("Checking node: {} {} {}", node.value, op, target),
            )
            .with_nodes([current]),
        );
        if node.value == target {
            rec.record(
                tree,
                Step::at(
                    StepKind::Search,
                    vec![position],
                    format!("Found {} in tree", target),
                )
                .with_nodes([current]),
            );
            return Some(current);
        }
        queue.extend(node.left);
        queue.extend(node.right);
        position += 1;
    }

    rec.record(
        tree,
        Step::new(StepKind::Highlight, format!("{} not found in tree", target)),
    );
    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraversalOrder {
    InOrder,
    PreOrder,
    PostOrder,
    LevelOrder,
}

impl TraversalOrder {
    pub fn label(&self) -> &'static str {
        match self {
            TraversalOrder::InOrder => "In-Order",
            TraversalOrder::PreOrder => "Pre-Order",
            TraversalOrder::PostOrder => "Post-Order",
            TraversalOrder::LevelOrder => "Level-Order",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            TraversalOrder::InOrder => "Left -> Root -> Right",
            TraversalOrder::PreOrder => "Root -> Left -> Right",
            TraversalOrder::PostOrder => "Left -> Right -> Root",
            TraversalOrder::LevelOrder => "BFS",
        }
    }
}

/// Walk the tree in `order`, returning the visited values
pub fn traverse<R: Recorder<Tree>>(tree: &Tree, order: TraversalOrder, rec: &mut R) -> Vec<i64> {
    let Some(root) = tree.root() else {
        rec.record(tree, Step::reject("Tree is empty"));
        return Vec::new();
    };

    rec.record(
        tree,
        Step::new(
            StepKind::Highlight,
            format!("Starting {} Traversal ({})", order.label(), order.pattern()),
        ),
    );

    let mut visit = Visitor {
        tree,
        rec: &mut *rec,
        result: Vec::with_capacity(tree.len()),
    };
    match order {
        TraversalOrder::InOrder => visit.in_order(root),
        TraversalOrder::PreOrder => visit.pre_order(root),
        TraversalOrder::PostOrder => visit.post_order(root),
        TraversalOrder::LevelOrder => visit.level_order(root),
    }
    let result = visit.result;

    rec.record(
        tree,
        Step::at(
            StepKind::Sorted,
            all_positions(result.len()),
            format!("{} Complete: {}", order.label(), format_values(&result)),
        ),
    );
    result
}

struct Visitor<'a, R> {
    tree: &'a Tree,
    rec: &'a mut R,
    result: Vec<i64>,
}

impl<R: Recorder<Tree>> Visitor<'_, R> {
    fn emit(&mut self, id: NodeId) {
        let value = self.tree[id].value;
        self.result.push(value);
        self.rec.record(
            self.tree,
            Step::at(
                StepKind::Search,
                vec![self.result.len() - 1],
                format!("Visited: {} | Order: {}", value, format_values(&self.result)),
            )
            .with_nodes([id])
            .with_aux(Aux::Traversal {
                order: self.result.clone(),
            }),
        );
    }

    fn in_order(&mut self, root: NodeId) {
        let mut stack = Vec::new();
        let mut current = Some(root);
        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                let node = &self.tree[id];
                self.rec.record(
                    self.tree,
                    Step::at(
                        StepKind::Compare,
                        vec![self.result.len()],
                        format!("Traversing left from {}", node.value),
                    )
                    .with_nodes([id]),
                );
                stack.push(id);
                current = node.left;
            }
            if let Some(id) = stack.pop() {
                self.emit(id);
                current = self.tree[id].right;
            }
        }
    }

    fn pre_order(&mut self, root: NodeId) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            self.emit(id);
            let node = &self.tree[id];
            stack.extend(node.right);
            stack.extend(node.left);
        }
    }

    fn post_order(&mut self, root: NodeId) {
        // (node, children already pushed)
        let mut stack = vec![(root, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                self.emit(id);
                continue;
            }
            stack.push((id, true));
            let node = &self.tree[id];
            stack.extend(node.right.map(|r| (r, false)));
            stack.extend(node.left.map(|l| (l, false)));
        }
    }

    fn level_order(&mut self, root: NodeId) {
        let mut queue = VecDeque::from([root]);
        while let Some(id) = queue.pop_front() {
            self.emit(id);
            let node = &self.tree[id];
            queue.extend(node.left);
            queue.extend(node.right);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven() -> Tree {
        let mut tree = Tree::new();
        for v in 1..=7 {
            insert(&mut tree, v, &mut ());
        }
        tree
    }

    #[test]
    fn test_level_order_insert_fills_left_to_right() {
        let tree = seven();
        assert_eq!(tree.level_order_values(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_insert_positions_and_payload() {
        let mut tree = Tree::new();
        let mut steps: Vec<Step> = Vec::new();
        let root = insert(&mut tree, 1, &mut steps);
        assert!(matches!(
            steps.last().unwrap().aux,
            Some(Aux::Tree { new_root: Some(r), .. }) if r == root
        ));

        insert(&mut tree, 2, &mut ());
        insert(&mut tree, 3, &mut ());
        let mut steps: Vec<Step> = Vec::new();
        insert(&mut tree, 4, &mut steps);
        // root checked, then node 2 gets a left child at index 3
        let compares = steps.iter().filter(|s| s.kind == StepKind::Compare).count();
        assert_eq!(compares, 2);
        assert_eq!(steps.last().unwrap().positions, vec![3]);
    }

    #[test]
    fn test_traversal_orders() {
        let tree = seven();
        assert_eq!(
            traverse(&tree, TraversalOrder::InOrder, &mut ()),
            vec![4, 2, 5, 1, 6, 3, 7]
        );
        assert_eq!(
            traverse(&tree, TraversalOrder::PreOrder, &mut ()),
            vec![1, 2, 4, 5, 3, 6, 7]
        );
        assert_eq!(
            traverse(&tree, TraversalOrder::PostOrder, &mut ()),
            vec![4, 5, 2, 6, 7, 3, 1]
        );
        assert_eq!(
            traverse(&tree, TraversalOrder::LevelOrder, &mut ()),
            vec![1, 2, 3, 4, 5, 6, 7]
        );
    }

    #[test]
    fn test_each_visit_carries_running_order() {
        let tree = seven();
        let mut steps: Vec<Step> = Vec::new();
        traverse(&tree, TraversalOrder::PreOrder, &mut steps);

        let visits: Vec<&Step> = steps.iter().filter(|s| s.kind == StepKind::Search).collect();
        assert_eq!(visits.len(), 7);
        assert!(matches!(
            &visits[2].aux,
            Some(Aux::Traversal { order }) if order == &vec![1, 2, 4]
        ));
        assert_eq!(visits[2].message, "Visited: 4 | Order: [1, 2, 4]");
    }

    #[test]
    fn test_search_and_empty_tree() {
        let tree = seven();
        let found = search(&tree, 6, &mut ()).unwrap();
        assert_eq!(tree[found].value, 6);
        assert_eq!(search(&tree, 9, &mut ()), None);

        let mut steps: Vec<Step> = Vec::new();
        assert!(traverse(&Tree::new(), TraversalOrder::InOrder, &mut steps).is_empty());
        assert_eq!(steps.len(), 1);
        assert!(steps[0].rejected);
    }
}
