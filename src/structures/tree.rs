//! Binary tree node arena
//!
//! Nodes are never removed, so the arena is a plain `Vec` and a [`NodeId`] is the
//! node's position in it. The same container backs both the level-order binary tree and
//! the BST; which ordering rules apply is decided by the operation that mutates it.

use super::NodeId;
use std::collections::VecDeque;
use std::ops::{Index, IndexMut};

/// A node of the tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub id: NodeId,
    pub value: i64,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

/// Arena-backed binary tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    root: Option<NodeId>,
}

impl Tree {
    pub fn new() -> Self {
        Tree::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create a detached node and return its id
    pub(crate) fn alloc(&mut self, value: i64) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(TreeNode {
            id,
            value,
            left: None,
            right: None,
        });
        id
    }

    /// Look up a node, `None` for ids this arena never produced
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.index())
    }

    /// All nodes in allocation order
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Node values in level order
    pub fn level_order_values(&self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.nodes.len());
        let mut queue: VecDeque<NodeId> = self.root.into_iter().collect();
        while let Some(id) = queue.pop_front() {
            let node = &self[id];
            values.push(node.value);
            queue.extend(node.left);
            queue.extend(node.right);
        }
        values
    }

    /// Node values in order (left, node, right)
    pub fn in_order_values(&self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = Vec::new();
        let mut current = self.root;
        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self[id].left;
            }
            if let Some(id) = stack.pop() {
                values.push(self[id].value);
                current = self[id].right;
            }
        }
        values
    }

    /// Depth of every node below the root (root = 0), by id
    pub fn depths(&self) -> Vec<usize> {
        let mut depths = vec![0; self.nodes.len()];
        let mut queue: VecDeque<(NodeId, usize)> = self.root.map(|r| (r, 0)).into_iter().collect();
        while let Some((id, depth)) = queue.pop_front() {
            depths[id.index()] = depth;
            let node = &self[id];
            queue.extend(node.left.map(|c| (c, depth + 1)));
            queue.extend(node.right.map(|c| (c, depth + 1)));
        }
        depths
    }

    /// Height in levels (0 for an empty tree)
    pub fn height(&self) -> usize {
        if self.root.is_none() {
            return 0;
        }
        self.depths().into_iter().max().map_or(0, |d| d + 1)
    }
}

impl Index<NodeId> for Tree {
    type Output = TreeNode;

    fn index(&self, id: NodeId) -> &TreeNode {
        match self.nodes.get(id.index()) {
            Some(node) => node,
            None => panic!("Unknown tree node: {}", id),
        }
    }
}

impl IndexMut<NodeId> for Tree {
    fn index_mut(&mut self, id: NodeId) -> &mut TreeNode {
        match self.nodes.get_mut(id.index()) {
            Some(node) => node,
            None => panic!("Unknown tree node: {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> Tree {
        //      4
        //    2   6
        //   1
        let mut tree = Tree::new();
        let root = tree.alloc(4);
        let left = tree.alloc(2);
        let right = tree.alloc(6);
        let leaf = tree.alloc(1);
        tree.set_root(root);
        tree[root].left = Some(left);
        tree[root].right = Some(right);
        tree[left].left = Some(leaf);
        tree
    }

    #[test]
    fn test_orders() {
        let tree = small_tree();
        assert_eq!(tree.level_order_values(), vec![4, 2, 6, 1]);
        assert_eq!(tree.in_order_values(), vec![1, 2, 4, 6]);
    }

    #[test]
    fn test_depths_and_height() {
        let tree = small_tree();
        assert_eq!(tree.depths(), vec![0, 1, 1, 2]);
        assert_eq!(tree.height(), 3);
        assert_eq!(Tree::new().height(), 0);
    }

    #[test]
    #[should_panic(expected = "Unknown tree node")]
    fn test_dangling_id_panics() {
        let tree = Tree::new();
        let _ = &tree[NodeId(3)];
    }
}
