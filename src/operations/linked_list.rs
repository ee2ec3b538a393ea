//! Singly linked list operations
//!
//! Positions in steps are 0-based offsets from the head; node ids name the node the
//! step is about. Every step that changes the list carries a [`Aux::List`] payload with
//! the new head and tail.

use crate::step::{all_positions, Aux, Recorder, Step, StepKind};
use crate::structures::linked_list::LinkedList;
use crate::structures::NodeId;

fn ends(list: &LinkedList) -> Aux {
    Aux::List {
        head: list.head(),
        tail: list.tail(),
    }
}

/// Insert at the head in O(1)
pub fn insert_head<R: Recorder<LinkedList>>(list: &mut LinkedList, value: i64, rec: &mut R) -> NodeId {
    rec.record(
        list,
        Step::new(
            StepKind::Highlight,
            format!("Creating new node with value {}", value),
        ),
    );

    let previous_head = list.head();
    let id = list.alloc(value, previous_head);
    list.set_head(Some(id));
    rec.record(
        list,
        Step::at(StepKind::Insert, vec![0], format!("Inserting {} at head", value))
            .with_nodes([id])
            .with_aux(ends(list)),
    );

    let message = match previous_head {
        Some(_) => format!("New head points to previous head. List size: {}", list.len()),
        None => format!("{} is now the head (first node). List size: {}", value, list.len()),
    };
    rec.record(
        list,
        Step::at(StepKind::Active, vec![0], message)
            .with_nodes([id])
            .with_aux(ends(list)),
    );
    id
}

/// Insert at the tail, walking the list from the head
pub fn insert_tail<R: Recorder<LinkedList>>(list: &mut LinkedList, value: i64, rec: &mut R) -> NodeId {
    rec.record(
        list,
        Step::new(
            StepKind::Highlight,
            format!("Creating new node with value {}", value),
        ),
    );

    let ids = list.ids();
    let Some(&last) = ids.last() else {
        let id = list.alloc(value, None);
        list.set_head(Some(id));
        rec.record(
            list,
            Step::at(
                StepKind::Insert,
                vec![0],
                format!("{} is now the head (first node). List size: {}", value, list.len()),
            )
            .with_nodes([id])
            .with_aux(ends(list)),
        );
        return id;
    };

    for (position, &node) in ids.iter().enumerate() {
        rec.record(
            list,
            Step::at(
                StepKind::Compare,
                vec![position],
                format!(
                    "Traversing: at node {} (position {})",
                    list[node].value, position
                ),
            )
            .with_nodes([node]),
        );
    }

    // The node only exists once it is linked in
    let id = list.alloc(value, None);
    list[last].next = Some(id);
    rec.record(
        list,
        Step::at(
            StepKind::Insert,
            vec![ids.len()],
            format!(
                "Inserted {} at tail (position {}). List size: {}",
                value,
                ids.len(),
                list.len()
            ),
        )
        .with_nodes([id])
        .with_aux(ends(list)),
    );
    id
}

/// Insert so the new node ends up at `position` (`0..=len`). Position 0 is an insert at
/// the head.
pub fn insert_at<R: Recorder<LinkedList>>(
    list: &mut LinkedList,
    value: i64,
    position: usize,
    rec: &mut R,
) -> Option<NodeId> {
    if position == 0 {
        return Some(insert_head(list, value, rec));
    }
    if list.is_empty() {
        rec.record(
            list,
            Step::reject(format!(
                "Cannot insert at position {}. List is empty",
                position
            )),
        );
        return None;
    }
    if position > list.len() {
        rec.record(
            list,
            Step::reject(format!("Position {} is out of bounds", position)),
        );
        return None;
    }

    rec.record(
        list,
        Step::new(
            StepKind::Highlight,
            format!("Creating new node with value {}", value),
        ),
    );

    let ids = list.ids();
    for (pos, &node) in ids.iter().take(position).enumerate() {
        rec.record(
            list,
            Step::at(
                StepKind::Compare,
                vec![pos],
                format!("Traversing: at position {}", pos),
            )
            .with_nodes([node]),
        );
    }

    let prev = ids[position - 1];
    let next = list[prev].next;
    let id = list.alloc(value, next);
    list[prev].next = Some(id);
    rec.record(
        list,
        Step::at(
            StepKind::Insert,
            vec![position],
            format!(
                "Inserted {} at position {}. List size: {}",
                value,
                position,
                list.len()
            ),
        )
        .with_nodes([id])
        .with_aux(ends(list)),
    );
    Some(id)
}

/// Remove the head node in O(1). Returns the removed value.
pub fn delete_head<R: Recorder<LinkedList>>(list: &mut LinkedList, rec: &mut R) -> Option<i64> {
    let Some(head) = list.head() else {
        rec.record(list, Step::reject("Cannot delete. List is empty"));
        return None;
    };
    let value = list[head].value;

    rec.record(
        list,
        Step::at(
            StepKind::Highlight,
            vec![0],
            format!("Deleting head node with value {}", value),
        )
        .with_nodes([head]),
    );

    let removed = list.free(head);
    list.set_head(removed.next);
    rec.record(
        list,
        Step::at(StepKind::Delete, vec![0], format!("Removing node {}", value))
            .with_nodes([head])
            .with_aux(ends(list)),
    );

    let step = match list.head() {
        Some(new_head) => Step::at(
            StepKind::Active,
            vec![0],
            format!(
                "Deleted {}. New head: {}. List size: {}",
                value,
                list[new_head].value,
                list.len()
            ),
        )
        .with_nodes([new_head]),
        None => Step::new(
            StepKind::Highlight,
            format!("Deleted {}. List is now empty", value),
        ),
    };
    rec.record(list, step.with_aux(ends(list)));
    Some(value)
}

/// Remove the tail node, walking to the second-to-last node first
pub fn delete_tail<R: Recorder<LinkedList>>(list: &mut LinkedList, rec: &mut R) -> Option<i64> {
    let ids = list.ids();
    match ids.len() {
        0 => {
            rec.record(list, Step::reject("Cannot delete. List is empty"));
            None
        }
        1 => {
            let only = ids[0];
            let value = list[only].value;
            rec.record(
                list,
                Step::at(
                    StepKind::Highlight,
                    vec![0],
                    format!("Deleting tail (only node) with value {}", value),
                )
                .with_nodes([only]),
            );
            list.free(only);
            list.set_head(None);
            rec.record(
                list,
                Step::at(StepKind::Delete, vec![0], format!("Removing node {}", value))
                    .with_nodes([only])
                    .with_aux(ends(list)),
            );
            rec.record(
                list,
                Step::new(
                    StepKind::Highlight,
                    format!("Deleted {}. List is now empty", value),
                )
                .with_aux(ends(list)),
            );
            Some(value)
        }
        n => Some(unlink_after(list, &ids, n - 1, rec)),
    }
}

/// Remove the node at `position`. Position 0 is a delete at the head.
pub fn delete_at<R: Recorder<LinkedList>>(list: &mut LinkedList, position: usize, rec: &mut R) -> Option<i64> {
    if position == 0 {
        return delete_head(list, rec);
    }
    if position >= list.len() {
        rec.record(
            list,
            Step::reject(format!("Position {} is out of bounds", position)),
        );
        return None;
    }

    let ids = list.ids();
    Some(unlink_after(list, &ids, position, rec))
}

/// Walk to `ids[position - 1]`, then unlink and free `ids[position]` (`position >= 1`)
fn unlink_after<R: Recorder<LinkedList>>(
    list: &mut LinkedList,
    ids: &[NodeId],
    position: usize,
    rec: &mut R,
) -> i64 {
    for (pos, &node) in ids.iter().take(position + 1).enumerate() {
        rec.record(
            list,
            Step::at(
                StepKind::Compare,
                vec![pos],
                format!(
                    "Traversing: at node {} (position {})",
                    list[node].value, pos
                ),
            )
            .with_nodes([node]),
        );
    }

    let prev = ids[position - 1];
    let target = ids[position];
    let value = list[target].value;
    let label = if position == ids.len() - 1 { "tail node" } else { "node" };
    rec.record(
        list,
        Step::at(
            StepKind::Highlight,
            vec![position],
            format!("Found {} with value {}", label, value),
        )
        .with_nodes([target]),
    );

    let removed = list.free(target);
    list[prev].next = removed.next;
    rec.record(
        list,
        Step::at(
            StepKind::Delete,
            vec![position],
            format!("Removing {} {}", label, value),
        )
        .with_nodes([target])
        .with_aux(ends(list)),
    );
    rec.record(
        list,
        Step::at(
            StepKind::Active,
            vec![position - 1],
            format!("Deleted {}. List size: {}", value, list.len()),
        )
        .with_nodes([prev])
        .with_aux(ends(list)),
    );
    value
}

/// Search from the head; returns the 0-based position of the first match
pub fn search<R: Recorder<LinkedList>>(list: &LinkedList, target: i64, rec: &mut R) -> Option<usize> {
    if list.is_empty() {
        rec.record(list, Step::reject("List is empty"));
        return None;
    }

    rec.record(
        list,
        Step::new(
            StepKind::Highlight,
            format!("Searching for {} in linked list", target),
        ),
    );
    for (position, id) in list.ids().into_iter().enumerate() {
        let value = list[id].value;
        let op = if value == target { "==" } else { "!=" };
        rec.record(
            list,
            Step::at(
                StepKind::Compare,
                vec![position],
                format!("Checking position {}: {} {} {}", position, value, op, target),
            )
            .with_nodes([id]),
        );
        if value == target {
            rec.record(
                list,
                Step::at(
                    StepKind::Search,
                    vec![position],
                    format!("Found {} at position {}", target, position),
                )
                .with_nodes([id]),
            );
            return Some(position);
        }
    }

    rec.record(
        list,
        Step::new(StepKind::Highlight, format!("{} not found in list", target)),
    );
    None
}

pub fn is_empty<R: Recorder<LinkedList>>(list: &LinkedList, rec: &mut R) -> bool {
    rec.record(
        list,
        Step::new(StepKind::Highlight, "Checking if list is empty..."),
    );
    let empty = list.is_empty();
    let verdict = format!(
        "List is {} (size: {})",
        if empty { "EMPTY" } else { "NOT EMPTY" },
        list.len()
    );
    let step = if empty {
        Step::new(StepKind::Highlight, verdict)
    } else {
        Step::at(StepKind::Search, vec![0], verdict)
    };
    rec.record(list, step);
    empty
}

pub fn size<R: Recorder<LinkedList>>(list: &LinkedList, rec: &mut R) -> usize {
    let n = list.len();
    if n == 0 {
        rec.record(list, Step::new(StepKind::Highlight, "List size: 0 (empty)"));
        return 0;
    }
    rec.record(
        list,
        Step::at(StepKind::Highlight, all_positions(n), "Counting list elements..."),
    );
    rec.record(
        list,
        Step::at(
            StepKind::Search,
            all_positions(n),
            format!("List size: {} element{}", n, if n == 1 { "" } else { "s" }),
        ),
    );
    n
}
