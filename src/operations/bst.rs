//! Binary search tree operations. Duplicates are rejected, so every left subtree holds
//! strictly smaller values and every right subtree strictly larger ones.

use crate::step::{Aux, Recorder, Step, StepKind};
use crate::structures::tree::Tree;
use crate::structures::NodeId;
use std::cmp::Ordering;

/// Insert `value`, descending by comparison. Returns `None` for a duplicate.
pub fn insert<R: Recorder<Tree>>(tree: &mut Tree, value: i64, rec: &mut R) -> Option<NodeId> {
    rec.record(
        tree,
        Step::new(StepKind::Highlight, format!("Inserting {} into BST", value)),
    );

    let Some(root) = tree.root() else {
        let id = tree.alloc(value);
        tree.set_root(id);
        rec.record(
            tree,
            Step::new(
                StepKind::Insert,
                format!("✅ {} is now the root. Tree size: {}", value, tree.len()),
            )
            .with_nodes([id])
            .with_aux(Aux::Tree {
                new_root: Some(id),
                new_node: id,
            }),
        );
        return Some(id);
    };

    let mut current = root;
    loop {
        let node = &tree[current];
        let (node_value, left, right) = (node.value, node.left, node.right);
        rec.record(
            tree,
            Step::new(
                StepKind::Compare,
                format!("Comparing {} with {}", value, node_value),
            )
            .with_nodes([current]),
        );

        let (next, side) = match value.cmp(&node_value) {
            Ordering::Equal => {
                rec.record(
                    tree,
                    Step::reject(format!(
                        "❌ {} already exists in BST (no duplicates allowed)",
                        value
                    ))
                    .with_nodes([current]),
                );
                return None;
            }
            Ordering::Less => (left, "left"),
            Ordering::Greater => (right, "right"),
        };
        let sign = if side == "left" { '<' } else { '>' };
        rec.record(
            tree,
            Step::new(
                StepKind::Active,
                format!("{} {} {}, going {}", value, sign, node_value, side),
            )
            .with_nodes([current]),
        );

        match next {
            Some(child) => current = child,
            None => {
                let id = tree.alloc(value);
                if side == "left" {
                    tree[current].left = Some(id);
                } else {
                    tree[current].right = Some(id);
                }
                rec.record(
                    tree,
                    Step::new(
                        StepKind::Insert,
                        format!(
                            "✅ Inserted {} as {} child. Tree size: {}",
                            value,
                            side,
                            tree.len()
                        ),
                    )
                    .with_nodes([id])
                    .with_aux(Aux::Tree {
                        new_root: None,
                        new_node: id,
                    }),
                );
                return Some(id);
            }
        }
    }
}

/// Search by descending left or right at each node
pub fn search<R: Recorder<Tree>>(tree: &Tree, target: i64, rec: &mut R) -> Option<NodeId> {
    let Some(root) = tree.root() else {
        rec.record(tree, Step::reject("❌ Tree is empty"));
        return None;
    };

    rec.record(
        tree,
        Step::new(StepKind::Highlight, format!("Searching for {} in BST", target)),
    );

    let mut current = Some(root);
    let mut hops = 0;
    while let Some(id) = current {
        let node = &tree[id];
        hops += 1;
        let ordering = node.value.cmp(&target);
        let op = match ordering {
            Ordering::Equal => "==",
            Ordering::Greater => ">",
            Ordering::Less => "<",
        };
        rec.record(
            tree,
            Step::new(
                StepKind::Compare,
                format!("Step {}: Checking {} {} {}", hops, node.value, op, target),
            )
            .with_nodes([id]),
        );

        let (next, side) = match ordering {
            Ordering::Equal => {
                rec.record(
                    tree,
                    Step::new(
                        StepKind::Search,
                        format!("✅ Found {} in {} steps", target, hops),
                    )
                    .with_nodes([id]),
                );
                return Some(id);
            }
            Ordering::Greater => (node.left, "left"),
            Ordering::Less => (node.right, "right"),
        };
        if next.is_some() {
            let sign = if side == "left" { '<' } else { '>' };
            rec.record(
                tree,
                Step::new(
                    StepKind::Active,
                    format!(
                        "{} {} {}, searching {} subtree",
                        target, sign, node.value, side
                    ),
                )
                .with_nodes([id]),
            );
        }
        current = next;
    }

    rec.record(
        tree,
        Step::new(
            StepKind::Highlight,
            format!("❌ {} not found after {} steps", target, hops),
        ),
    );
    None
}

/// Smallest value, found by following left links from the root
pub fn find_min<R: Recorder<Tree>>(tree: &Tree, rec: &mut R) -> Option<i64> {
    spine_walk(tree, Spine::Left, rec)
}

/// Largest value, found by following right links from the root
pub fn find_max<R: Recorder<Tree>>(tree: &Tree, rec: &mut R) -> Option<i64> {
    spine_walk(tree, Spine::Right, rec)
}

#[derive(Clone, Copy)]
enum Spine {
    Left,
    Right,
}

fn spine_walk<R: Recorder<Tree>>(tree: &Tree, spine: Spine, rec: &mut R) -> Option<i64> {
    let Some(root) = tree.root() else {
        rec.record(tree, Step::reject("❌ Tree is empty"));
        return None;
    };

    let (goal, direction, extreme) = match spine {
        Spine::Left => ("minimum value (leftmost node)", "left to find smaller", "Minimum"),
        Spine::Right => ("maximum value (rightmost node)", "right to find larger", "Maximum"),
    };
    rec.record(tree, Step::new(StepKind::Highlight, format!("Finding {}", goal)));

    let mut current = root;
    loop {
        let node = &tree[current];
        rec.record(
            tree,
            Step::new(StepKind::Compare, format!("Current: {}", node.value)).with_nodes([current]),
        );

        let next = match spine {
            Spine::Left => node.left,
            Spine::Right => node.right,
        };
        let Some(next) = next else {
            rec.record(
                tree,
                Step::new(
                    StepKind::Search,
                    format!("✅ {} value: {}", extreme, node.value),
                )
                .with_nodes([current]),
            );
            return Some(node.value);
        };

        rec.record(
            tree,
            Step::new(StepKind::Active, format!("Going {} value", direction)).with_nodes([current]),
        );
        current = next;
    }
}

/// Check the BST property with open `(min, max)` bounds, stopping at the first violation
pub fn validate<R: Recorder<Tree>>(tree: &Tree, rec: &mut R) -> bool {
    let Some(root) = tree.root() else {
        rec.record(
            tree,
            Step::new(StepKind::Sorted, "✅ Empty tree is a valid BST")
                .with_aux(Aux::Validation { valid: true }),
        );
        return true;
    };

    rec.record(tree, Step::new(StepKind::Highlight, "Validating BST property"));
    let valid = check_bounds(tree, Some(root), None, None, rec);
    if valid {
        rec.record(
            tree,
            Step::new(StepKind::Sorted, "✅ Valid BST")
                .with_nodes([root])
                .with_aux(Aux::Validation { valid: true }),
        );
    }
    valid
}

fn bound(value: Option<i64>, infinity: &str) -> String {
    value.map_or_else(|| infinity.to_string(), |v| v.to_string())
}

fn check_bounds<R: Recorder<Tree>>(
    tree: &Tree,
    id: Option<NodeId>,
    min: Option<i64>,
    max: Option<i64>,
    rec: &mut R,
) -> bool {
    let Some(id) = id else {
        return true;
    };
    let node = &tree[id];
    rec.record(
        tree,
        Step::new(
            StepKind::Compare,
            format!(
                "Checking {}: must be > {} and < {}",
                node.value,
                bound(min, "-∞"),
                bound(max, "∞")
            ),
        )
        .with_nodes([id]),
    );

    let too_small = min.is_some_and(|m| node.value <= m);
    let too_large = max.is_some_and(|m| node.value >= m);
    if too_small || too_large {
        rec.record(
            tree,
            Step::new(
                StepKind::Highlight,
                format!("❌ Invalid: {} violates BST property", node.value),
            )
            .with_nodes([id])
            .with_aux(Aux::Validation { valid: false }),
        );
        return false;
    }

    check_bounds(tree, node.left, min, Some(node.value), rec)
        && check_bounds(tree, node.right, Some(node.value), max, rec)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bst(values: &[i64]) -> Tree {
        let mut tree = Tree::new();
        for &v in values {
            insert(&mut tree, v, &mut ());
        }
        tree
    }

    #[test]
    fn test_in_order_is_sorted() {
        let tree = bst(&[50, 30, 70, 20, 40, 60, 80]);
        assert_eq!(tree.in_order_values(), vec![20, 30, 40, 50, 60, 70, 80]);
        assert!(validate(&tree, &mut ()));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut tree = bst(&[5, 3]);
        let mut steps: Vec<Step> = Vec::new();
        assert_eq!(insert(&mut tree, 3, &mut steps), None);
        assert_eq!(tree.len(), 2);
        let last = steps.last().unwrap();
        assert!(last.rejected);
        assert!(last.message.contains("already exists"));
    }

    #[test]
    fn test_insert_emits_active_per_hop() {
        let mut tree = bst(&[50, 30, 70]);
        let mut steps: Vec<Step> = Vec::new();
        insert(&mut tree, 40, &mut steps);
        let hops: Vec<&str> = steps
            .iter()
            .filter(|s| s.kind == StepKind::Active)
            .map(|s| s.message.as_str())
            .collect();
        assert_eq!(hops, vec!["40 < 50, going left", "40 > 30, going right"]);
    }

    #[test]
    fn test_search_min_max() {
        let tree = bst(&[8, 3, 10, 1, 6, 14]);
        let found = search(&tree, 6, &mut ()).unwrap();
        assert_eq!(tree[found].value, 6);
        assert_eq!(search(&tree, 7, &mut ()), None);
        assert_eq!(find_min(&tree, &mut ()), Some(1));
        assert_eq!(find_max(&tree, &mut ()), Some(14));
        assert_eq!(find_min(&Tree::new(), &mut ()), None);
    }

    #[test]
    fn test_validate_catches_deep_violation() {
        // 10 -> left 5 -> right 12: 12 sits in the left subtree of 10
        let mut tree = Tree::new();
        let root = tree.alloc(10);
        let left = tree.alloc(5);
        let bad = tree.alloc(12);
        tree.set_root(root);
        tree[root].left = Some(left);
        tree[left].right = Some(bad);

        let mut steps: Vec<Step> = Vec::new();
        assert!(!validate(&tree, &mut steps));
        let last = steps.last().unwrap();
        assert_eq!(last.aux, Some(Aux::Validation { valid: false }));
        assert_eq!(last.node_ids, vec![bad.to_string()]);
    }
}
