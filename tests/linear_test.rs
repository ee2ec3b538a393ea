// Integration tests for arrays, stacks, queues and linked lists

use algotrace::operations::{array, linked_list, queue, stack};
use algotrace::snapshot::Timeline;
use algotrace::step::{Aux, Step, StepKind};
use algotrace::structures::linked_list::LinkedList;

#[test]
fn test_guard_failures_leave_container_untouched() {
    let mut steps: Vec<Step> = Vec::new();

    let mut empty: Vec<i64> = Vec::new();
    assert_eq!(stack::pop(&mut empty, &mut steps), None);
    assert_eq!(queue::dequeue(&mut empty, &mut steps), None);
    assert_eq!(stack::peek(&empty, &mut steps), None);
    assert!(empty.is_empty());

    let mut arr = vec![1, 2, 3];
    assert!(!array::insert(&mut arr, 9, 4, &mut steps));
    assert_eq!(array::delete(&mut arr, 3, &mut steps), None);
    assert_eq!(arr, vec![1, 2, 3]);

    let mut list = LinkedList::new();
    assert_eq!(linked_list::delete_tail(&mut list, &mut steps), None);
    assert!(list.is_empty());

    // One rejected step per failed call
    assert_eq!(steps.len(), 6);
    assert!(steps.iter().all(|s| s.rejected && s.kind == StepKind::Highlight));
}

#[test]
fn test_bounded_stack_and_queue() {
    let mut steps: Vec<Step> = Vec::new();
    let mut s = vec![1, 2];
    assert!(!stack::push(&mut s, 3, Some(2), &mut steps));
    assert!(stack::push(&mut s, 3, Some(3), &mut steps));
    assert_eq!(s, vec![1, 2, 3]);

    let mut q = vec![1];
    assert!(!queue::enqueue(&mut q, 2, Some(1), &mut steps));
    assert!(queue::enqueue(&mut q, 2, None, &mut steps));
    assert_eq!(q, vec![1, 2]);
}

#[test]
fn test_stack_is_lifo_and_queue_is_fifo() {
    let mut s = Vec::new();
    let mut q = Vec::new();
    for v in [4, 7, 1] {
        stack::push(&mut s, v, None, &mut ());
        queue::enqueue(&mut q, v, None, &mut ());
    }
    assert_eq!(stack::pop(&mut s, &mut ()), Some(1));
    assert_eq!(queue::dequeue(&mut q, &mut ()), Some(4));
    assert_eq!(queue::peek(&q, &mut ()), Some(7));
    assert_eq!(queue::rear(&q, &mut ()), Some(1));
    assert_eq!(stack::size(&s, &mut ()), 2);
}

#[test]
fn test_array_timeline_tracks_each_mutation() {
    let initial = vec![10, 20, 30];
    let mut arr = initial.clone();
    let mut timeline = Timeline::new(initial, usize::MAX);

    assert_eq!(array::update(&mut arr, 1, 25, &mut timeline), Some(20));
    assert_eq!(timeline.state_at(timeline.len()), &vec![10, 25, 30]);
    assert_eq!(timeline.state_at(0), &vec![10, 20, 30]);

    let written = timeline
        .steps()
        .iter()
        .find_map(|s| s.written_value());
    assert_eq!(written, Some(25));
}

#[test]
fn test_array_search_hits_and_misses() {
    let arr = vec![3, 8, 8, 1];
    let mut steps: Vec<Step> = Vec::new();
    assert_eq!(array::search(&arr, 8, &mut steps), Some(1));
    assert_eq!(array::search(&arr, 5, &mut ()), None);
    assert_eq!(steps.last().map(|s| s.kind), Some(StepKind::Search));
}

#[test]
fn test_linked_list_operations_keep_ends_in_sync() {
    let mut list = LinkedList::from_values(&[1, 2, 3]);
    let mut steps: Vec<Step> = Vec::new();

    linked_list::insert_head(&mut list, 0, &mut steps);
    linked_list::insert_tail(&mut list, 4, &mut steps);
    assert!(linked_list::insert_at(&mut list, 9, 2, &mut steps).is_some());
    assert_eq!(list.values(), vec![0, 1, 9, 2, 3, 4]);

    assert_eq!(linked_list::delete_at(&mut list, 2, &mut steps), Some(9));
    assert_eq!(linked_list::delete_tail(&mut list, &mut steps), Some(4));
    assert_eq!(linked_list::delete_head(&mut list, &mut steps), Some(0));
    assert_eq!(list.values(), vec![1, 2, 3]);

    let last_ends = steps.iter().rev().find_map(|s| match &s.aux {
        Some(Aux::List { head, tail }) => Some((*head, *tail)),
        _ => None,
    });
    assert_eq!(last_ends, Some((list.head(), list.tail())));

    assert_eq!(linked_list::search(&list, 3, &mut ()), Some(2));
    assert_eq!(linked_list::search(&list, 42, &mut ()), None);
    assert!(linked_list::insert_at(&mut list, 5, 10, &mut ()).is_none());
}

#[test]
fn test_node_ids_name_list_nodes() {
    let mut list = LinkedList::new();
    let mut steps: Vec<Step> = Vec::new();
    let id = linked_list::insert_head(&mut list, 5, &mut steps);
    assert_eq!(id.to_string(), "node-0");
    assert!(steps.iter().any(|s| s.node_ids == vec!["node-0".to_string()]));
}

#[test]
fn test_list_frames_never_hold_detached_nodes() {
    type ListOp = fn(&mut LinkedList, &mut Timeline<LinkedList>);
    let ops: [ListOp; 6] = [
        |l, t| {
            linked_list::insert_tail(l, 9, t);
        },
        |l, t| {
            linked_list::insert_head(l, 9, t);
        },
        |l, t| {
            linked_list::insert_at(l, 9, 2, t);
        },
        |l, t| {
            linked_list::delete_tail(l, t);
        },
        |l, t| {
            linked_list::delete_head(l, t);
        },
        |l, t| {
            linked_list::delete_at(l, 1, t);
        },
    ];

    for op in ops {
        let initial = LinkedList::from_values(&[1, 2, 3]);
        let mut list = initial.clone();
        let mut timeline = Timeline::new(initial, usize::MAX);
        op(&mut list, &mut timeline);

        for k in 0..=timeline.len() {
            let state = timeline.state_at(k);
            assert_eq!(state.len(), state.values().len(), "frame {}", k);
        }
    }

    let initial = LinkedList::from_values(&[1, 2, 3]);
    let mut list = initial.clone();
    let mut timeline = Timeline::new(initial, usize::MAX);
    linked_list::insert_tail(&mut list, 9, &mut timeline);
    assert_eq!(timeline.state_at(timeline.len() - 1).values(), vec![1, 2, 3]);
    assert_eq!(timeline.state_at(timeline.len()).values(), vec![1, 2, 3, 9]);
}
