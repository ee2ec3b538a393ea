//! Singly linked list node arena
//!
//! Freed nodes leave a vacant slot behind instead of being compacted away, the same way
//! freed heap blocks stay around as tombstones. Slots are never reused, so a [`NodeId`]
//! always refers to the node that was allocated under it.

use super::NodeId;
use std::ops::{Index, IndexMut};

/// A node of the list
#[derive(Debug, Clone, PartialEq)]
pub struct ListNode {
    pub id: NodeId,
    pub value: i64,
    pub next: Option<NodeId>,
}

/// Arena-backed singly linked list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkedList {
    slots: Vec<Option<ListNode>>,
    head: Option<NodeId>,
    live: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        LinkedList::default()
    }

    /// Build a list holding `values` in order
    pub fn from_values(values: &[i64]) -> Self {
        let mut list = LinkedList::new();
        let mut next = None;
        for &value in values.iter().rev() {
            next = Some(list.alloc(value, next));
        }
        list.head = next;
        list
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub(crate) fn set_head(&mut self, head: Option<NodeId>) {
        self.head = head;
    }

    /// Last node reachable from the head
    pub fn tail(&self) -> Option<NodeId> {
        self.ids().last().copied()
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Create a node pointing at `next` and return its id
    pub(crate) fn alloc(&mut self, value: i64, next: Option<NodeId>) -> NodeId {
        let id = NodeId::from_index(self.slots.len());
        self.slots.push(Some(ListNode { id, value, next }));
        self.live += 1;
        id
    }

    /// Vacate a node's slot and return the node
    pub(crate) fn free(&mut self, id: NodeId) -> ListNode {
        match self.slots.get_mut(id.index()).and_then(Option::take) {
            Some(node) => {
                self.live -= 1;
                node
            }
            None => panic!("Double free of list node: {}", id),
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&ListNode> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Node ids from head to tail
    pub fn ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.live);
        let mut current = self.head;
        while let Some(id) = current {
            ids.push(id);
            current = self[id].next;
        }
        ids
    }

    /// Values from head to tail
    pub fn values(&self) -> Vec<i64> {
        self.ids().into_iter().map(|id| self[id].value).collect()
    }
}

impl Index<NodeId> for LinkedList {
    type Output = ListNode;

    fn index(&self, id: NodeId) -> &ListNode {
        match self.get(id) {
            Some(node) => node,
            None => panic!("Dangling list node: {}", id),
        }
    }
}

impl IndexMut<NodeId> for LinkedList {
    fn index_mut(&mut self, id: NodeId) -> &mut ListNode {
        match self.slots.get_mut(id.index()).and_then(Option::as_mut) {
            Some(node) => node,
            None => panic!("Dangling list node: {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_keeps_order() {
        let list = LinkedList::from_values(&[3, 1, 4]);
        assert_eq!(list.values(), vec![3, 1, 4]);
        assert_eq!(list.len(), 3);
        let tail = list.tail().unwrap();
        assert_eq!(list[tail].value, 4);
    }

    #[test]
    fn test_freed_ids_are_not_reused() {
        let mut list = LinkedList::from_values(&[1, 2]);
        let head = list.head().unwrap();
        let next = list[head].next;
        list.free(head);
        list.set_head(next);

        let fresh = list.alloc(9, list.head());
        assert_ne!(fresh, head);
        assert!(list.get(head).is_none());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_empty_list() {
        let list = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.tail(), None);
        assert!(list.values().is_empty());
    }
}
