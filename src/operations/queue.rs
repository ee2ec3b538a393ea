//! Queue operations. The front of the queue is index 0, the rear is the last element.

use crate::step::{all_positions, Recorder, Step, StepKind};

/// Enqueue at the rear; with a `capacity`, a full queue rejects the value
pub fn enqueue<R: Recorder<Vec<i64>>>(
    queue: &mut Vec<i64>,
    value: i64,
    capacity: Option<usize>,
    rec: &mut R,
) -> bool {
    if let Some(capacity) = capacity.filter(|&c| queue.len() >= c) {
        rec.record(
            queue,
            Step::reject(format!(
                "❌ Queue is full! Cannot enqueue {} (capacity: {})",
                value, capacity
            )),
        );
        return false;
    }

    rec.record(
        queue,
        Step::new(
            StepKind::Highlight,
            format!("Enqueuing {} at the rear of the queue", value),
        ),
    );
    queue.push(value);
    let rear = queue.len() - 1;
    rec.record(
        queue,
        Step::at(
            StepKind::Insert,
            vec![rear],
            format!("✅ Enqueued {}. Queue size: {}", value, queue.len()),
        ),
    );

    let step = if rear == 0 {
        Step::at(
            StepKind::Active,
            vec![0],
            format!("Front and rear both point to {}", value),
        )
    } else {
        Step::at(
            StepKind::Active,
            vec![0, rear],
            format!("Front: {}, Rear: {}", queue[0], queue[rear]),
        )
    };
    rec.record(queue, step);
    true
}

/// Remove the front element, shifting the rest forward
pub fn dequeue<R: Recorder<Vec<i64>>>(queue: &mut Vec<i64>, rec: &mut R) -> Option<i64> {
    let Some(&value) = queue.first() else {
        rec.record(queue, Step::reject("❌ Queue is empty! Cannot dequeue"));
        return None;
    };

    rec.record(
        queue,
        Step::at(
            StepKind::Highlight,
            vec![0],
            format!("Dequeuing {} from the front", value),
        ),
    );
    for i in 0..queue.len() - 1 {
        rec.record(
            queue,
            Step::at(
                StepKind::Active,
                vec![i, i + 1],
                format!("Shifting {} from position {} to {}", queue[i + 1], i + 1, i),
            ),
        );
    }

    queue.remove(0);
    rec.record(
        queue,
        Step::at(
            StepKind::Delete,
            vec![0],
            format!("Removed front element {}", value),
        ),
    );

    let step = match queue.first() {
        Some(front) => Step::at(
            StepKind::Active,
            vec![0],
            format!(
                "✅ Dequeued {}. New front: {}. Queue size: {}",
                value,
                front,
                queue.len()
            ),
        ),
        None => Step::new(
            StepKind::Highlight,
            format!("✅ Dequeued {}. Queue is now empty", value),
        ),
    };
    rec.record(queue, step);
    Some(value)
}

/// Read the front element
pub fn peek<R: Recorder<Vec<i64>>>(queue: &Vec<i64>, rec: &mut R) -> Option<i64> {
    let Some(&value) = queue.first() else {
        rec.record(queue, Step::reject("❌ Cannot peek. Queue is empty"));
        return None;
    };

    rec.record(
        queue,
        Step::at(StepKind::Highlight, vec![0], "Peeking at front of queue"),
    );
    rec.record(
        queue,
        Step::at(
            StepKind::Search,
            vec![0],
            format!("✅ Front element is {}. Queue size: {}", value, queue.len()),
        ),
    );
    Some(value)
}

/// Read the rear element
pub fn rear<R: Recorder<Vec<i64>>>(queue: &Vec<i64>, rec: &mut R) -> Option<i64> {
    let Some(&value) = queue.last() else {
        rec.record(queue, Step::reject("❌ Cannot get rear. Queue is empty"));
        return None;
    };
    let rear = queue.len() - 1;

    rec.record(
        queue,
        Step::at(StepKind::Highlight, vec![rear], "Getting rear element"),
    );
    rec.record(
        queue,
        Step::at(
            StepKind::Search,
            vec![rear],
            format!("✅ Rear element is {}. Queue size: {}", value, queue.len()),
        ),
    );
    Some(value)
}

/// Search from front to rear. Returns the 1-based position counted from the front.
pub fn search<R: Recorder<Vec<i64>>>(queue: &Vec<i64>, target: i64, rec: &mut R) -> Option<usize> {
    if queue.is_empty() {
        rec.record(queue, Step::reject("❌ Queue is empty"));
        return None;
    }

    rec.record(
        queue,
        Step::new(
            StepKind::Highlight,
            format!("Searching for {} in queue (front to rear)", target),
        ),
    );
    for (i, &value) in queue.iter().enumerate() {
        let op = if value == target { "==" } else { "!=" };
        rec.record(
            queue,
            Step::at(
                StepKind::Compare,
                vec![i],
                format!("Checking position {}: {} {} {}", i + 1, value, op, target),
            ),
        );
        if value == target {
            rec.record(
                queue,
                Step::at(
                    StepKind::Search,
                    vec![i],
                    format!("✅ Found {} at position {} from front", target, i + 1),
                ),
            );
            return Some(i + 1);
        }
    }

    rec.record(
        queue,
        Step::new(StepKind::Highlight, format!("❌ {} not found in queue", target)),
    );
    None
}

pub fn is_empty<R: Recorder<Vec<i64>>>(queue: &Vec<i64>, rec: &mut R) -> bool {
    rec.record(
        queue,
        Step::new(StepKind::Highlight, "Checking if queue is empty..."),
    );
    let empty = queue.is_empty();
    let verdict = format!(
        "✅ Queue is {} (size: {})",
        if empty { "EMPTY" } else { "NOT EMPTY" },
        queue.len()
    );
    let step = if empty {
        Step::new(StepKind::Highlight, verdict)
    } else {
        Step::at(StepKind::Search, vec![0, queue.len() - 1], verdict)
    };
    rec.record(queue, step);
    empty
}

pub fn size<R: Recorder<Vec<i64>>>(queue: &Vec<i64>, rec: &mut R) -> usize {
    let n = queue.len();
    rec.record(
        queue,
        Step::at(StepKind::Highlight, all_positions(n), "Counting queue elements..."),
    );
    rec.record(
        queue,
        Step::at(
            StepKind::Search,
            all_positions(n),
            format!("✅ Queue size: {} element{}", n, if n == 1 { "" } else { "s" }),
        ),
    );
    n
}
