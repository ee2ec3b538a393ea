//! Binary min-heap stored in a `Vec<i64>`
//!
//! The parent of index `i` is `(i - 1) / 2`; its children are `2i + 1` and `2i + 2`.
//! [`sort`] is the odd one out: it sorts the array ascending through a max-heap and
//! leaves it in sorted order, which is still a valid min-heap.

use crate::algorithms::sorting::heap::sift_down_max;
use crate::step::{all_positions, Recorder, Step, StepKind};

/// True when every parent is <= its children
pub fn is_min_heap(heap: &[i64]) -> bool {
    (1..heap.len()).all(|i| heap[(i - 1) / 2] <= heap[i])
}

/// Push `value` and bubble it up until its parent is no larger
pub fn insert<R: Recorder<Vec<i64>>>(heap: &mut Vec<i64>, value: i64, rec: &mut R) {
    rec.record(
        heap,
        Step::new(StepKind::Highlight, format!("Inserting {} into min-heap", value)),
    );

    heap.push(value);
    let mut i = heap.len() - 1;
    rec.record(
        heap,
        Step::at(
            StepKind::Insert,
            vec![i],
            format!("Added {} at index {}", value, i),
        ),
    );

    while i > 0 {
        let parent = (i - 1) / 2;
        rec.record(
            heap,
            Step::at(
                StepKind::Compare,
                vec![i, parent],
                format!("Comparing {} with parent {}", heap[i], heap[parent]),
            ),
        );
        if heap[i] >= heap[parent] {
            rec.record(
                heap,
                Step::at(
                    StepKind::Sorted,
                    vec![i],
                    format!("Min-heap property satisfied. Heap size: {}", heap.len()),
                ),
            );
            return;
        }

        heap.swap(i, parent);
        rec.record(
            heap,
            Step::at(
                StepKind::Swap,
                vec![i, parent],
                format!("Swapped {} with parent {}", heap[parent], heap[i]),
            ),
        );
        i = parent;
    }

    rec.record(
        heap,
        Step::at(
            StepKind::Sorted,
            vec![0],
            format!("{} is now the root. Heap size: {}", heap[0], heap.len()),
        ),
    );
}

/// Remove the root, move the last element up and bubble it down
pub fn extract_min<R: Recorder<Vec<i64>>>(heap: &mut Vec<i64>, rec: &mut R) -> Option<i64> {
    let Some(&min) = heap.first() else {
        rec.record(heap, Step::reject("❌ Heap is empty"));
        return None;
    };

    rec.record(
        heap,
        Step::at(StepKind::Search, vec![0], format!("Extracting minimum: {}", min)),
    );

    if heap.len() == 1 {
        heap.pop();
        rec.record(
            heap,
            Step::new(StepKind::Delete, format!("Removed {}. Heap is now empty", min)),
        );
        return Some(min);
    }

    heap.swap_remove(0);
    rec.record(
        heap,
        Step::at(
            StepKind::Swap,
            vec![0],
            format!("Moved {} to root, removed {}", heap[0], min),
        ),
    );

    let mut i = 0;
    loop {
        let left = 2 * i + 1;
        let right = 2 * i + 2;
        let mut smallest = i;

        rec.record(
            heap,
            Step::at(
                StepKind::Active,
                vec![i],
                format!("Checking children of {}", heap[i]),
            ),
        );
        if left < heap.len() {
            rec.record(
                heap,
                Step::at(
                    StepKind::Compare,
                    vec![i, left],
                    format!("Left child: {}", heap[left]),
                ),
            );
            if heap[left] < heap[smallest] {
                smallest = left;
            }
        }
        if right < heap.len() {
            rec.record(
                heap,
                Step::at(
                    StepKind::Compare,
                    vec![smallest, right],
                    format!("Right child: {}", heap[right]),
                ),
            );
            if heap[right] < heap[smallest] {
                smallest = right;
            }
        }

        if smallest == i {
            rec.record(
                heap,
                Step::at(
                    StepKind::Sorted,
                    vec![i],
                    format!("Min-heap property restored. Heap size: {}", heap.len()),
                ),
            );
            return Some(min);
        }

        heap.swap(i, smallest);
        rec.record(
            heap,
            Step::at(
                StepKind::Swap,
                vec![i, smallest],
                format!("Swapped {} with {}", heap[smallest], heap[i]),
            ),
        );
        i = smallest;
    }
}

/// Turn an arbitrary array into a min-heap in place, bottom-up
pub fn heapify<R: Recorder<Vec<i64>>>(heap: &mut Vec<i64>, rec: &mut R) {
    let n = heap.len();
    if n <= 1 {
        rec.record(
            heap,
            Step::at(StepKind::Sorted, all_positions(n), "Array is already a valid heap"),
        );
        return;
    }

    rec.record(
        heap,
        Step::new(
            StepKind::Highlight,
            format!("Building min-heap from array of {} elements", n),
        ),
    );
    for i in (0..n / 2).rev() {
        rec.record(
            heap,
            Step::at(
                StepKind::Active,
                vec![i],
                format!("Heapifying subtree rooted at index {} (value: {})", i, heap[i]),
            ),
        );
        sift_down_min(heap, i, rec);
    }

    rec.record(
        heap,
        Step::at(
            StepKind::Sorted,
            all_positions(n),
            format!("Min-heap built successfully. Root: {}", heap[0]),
        ),
    );
}

fn sift_down_min<R: Recorder<Vec<i64>>>(heap: &mut Vec<i64>, start: usize, rec: &mut R) {
    let mut i = start;
    loop {
        let smallest = [2 * i + 1, 2 * i + 2]
            .into_iter()
            .filter(|&c| c < heap.len())
            .fold(i, |best, c| if heap[c] < heap[best] { c } else { best });
        if smallest == i {
            return;
        }

        rec.record(
            heap,
            Step::at(
                StepKind::Compare,
                vec![i, smallest],
                format!("Swapping {} with {}", heap[i], heap[smallest]),
            ),
        );
        heap.swap(i, smallest);
        rec.record(
            heap,
            Step::at(
                StepKind::Swap,
                vec![i, smallest],
                "Swapped to maintain heap property",
            ),
        );
        i = smallest;
    }
}

pub fn peek<R: Recorder<Vec<i64>>>(heap: &Vec<i64>, rec: &mut R) -> Option<i64> {
    let Some(&min) = heap.first() else {
        rec.record(heap, Step::reject("❌ Heap is empty"));
        return None;
    };
    rec.record(
        heap,
        Step::at(StepKind::Search, vec![0], format!("Minimum value: {}", min)),
    );
    Some(min)
}

pub fn size<R: Recorder<Vec<i64>>>(heap: &Vec<i64>, rec: &mut R) -> usize {
    rec.record(
        heap,
        Step::at(
            StepKind::Highlight,
            all_positions(heap.len()),
            format!("Heap size: {}", heap.len()),
        ),
    );
    heap.len()
}

pub fn is_empty<R: Recorder<Vec<i64>>>(heap: &Vec<i64>, rec: &mut R) -> bool {
    let message = if heap.is_empty() {
        "Heap is empty".to_string()
    } else {
        format!("Heap has {} elements", heap.len())
    };
    rec.record(heap, Step::new(StepKind::Highlight, message));
    heap.is_empty()
}

/// Ascending in-place sort through a max-heap
pub fn sort<R: Recorder<[i64]>>(heap: &mut [i64], rec: &mut R) {
    let n = heap.len();
    if n <= 1 {
        rec.record(
            heap,
            Step::at(StepKind::Sorted, all_positions(n), "Array is already sorted"),
        );
        return;
    }

    rec.record(
        heap,
        Step::new(
            StepKind::Highlight,
            format!("Starting heap sort on {} elements", n),
        ),
    );
    rec.record(heap, Step::new(StepKind::Active, "Step 1: Building max-heap"));
    for i in (0..n / 2).rev() {
        sift_down_max(heap, n, i, rec);
    }

    for end in (1..n).rev() {
        rec.record(
            heap,
            Step::at(
                StepKind::Compare,
                vec![0, end],
                format!("Swapping root {} with {}", heap[0], heap[end]),
            ),
        );
        heap.swap(0, end);
        rec.record(
            heap,
            Step::at(
                StepKind::Swap,
                vec![0, end],
                format!("{} is now in sorted position", heap[end]),
            ),
        );
        sift_down_max(heap, end, 0, rec);
    }

    rec.record(
        heap,
        Step::at(StepKind::Sorted, all_positions(n), "Array sorted successfully"),
    );
}
