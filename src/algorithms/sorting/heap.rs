use crate::step::{all_positions, Recorder, Step, StepKind};

/// Heap sort over a max-heap built in place
pub fn heap_sort<R: Recorder<[i64]>>(data: &mut [i64], rec: &mut R) {
    let n = data.len();

    rec.record(data, Step::at(StepKind::Active, all_positions(n), "Building max heap"));
    for i in (0..n / 2).rev() {
        sift_down_max(data, n, i, rec);
    }

    for end in (1..n).rev() {
        data.swap(0, end);
        rec.record(
            data,
            Step::at(
                StepKind::Swap,
                vec![0, end],
                format!("Moving max element {} to sorted position", data[end]),
            ),
        );
        rec.record(
            data,
            Step::at(
                StepKind::Sorted,
                vec![end],
                format!("Element {} is now in its final position", data[end]),
            ),
        );
        sift_down_max(data, end, 0, rec);
    }

    rec.record(data, Step::at(StepKind::Sorted, all_positions(n), "Sorting complete!"));
}

/// Restore the max-heap property below `i` within `data[..heap_size]`
pub(crate) fn sift_down_max<R: Recorder<[i64]>>(data: &mut [i64], heap_size: usize, i: usize, rec: &mut R) {
    let mut i = i;
    loop {
        let mut largest = i;
        let left = 2 * i + 1;
        let right = 2 * i + 2;

        rec.record(
            data,
            Step::at(StepKind::Active, vec![i], format!("Heapifying at index {}", i)),
        );

        if left < heap_size {
            rec.record(
                data,
                Step::at(
                    StepKind::Compare,
                    vec![left, largest],
                    format!("Comparing left child {} with {}", data[left], data[largest]),
                ),
            );
            if data[left] > data[largest] {
                largest = left;
            }
        }
        if right < heap_size {
            rec.record(
                data,
                Step::at(
                    StepKind::Compare,
                    vec![right, largest],
                    format!("Comparing right child {} with {}", data[right], data[largest]),
                ),
            );
            if data[right] > data[largest] {
                largest = right;
            }
        }

        if largest == i {
            return;
        }
        data.swap(i, largest);
        rec.record(
            data,
            Step::at(
                StepKind::Swap,
                vec![i, largest],
                format!("Swapping {} and {}", data[largest], data[i]),
            ),
        );
        i = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_sort() {
        let mut data = vec![12, 11, 13, 5, 6, 7];
        let mut steps: Vec<Step> = Vec::new();
        heap_sort(&mut data, &mut steps);

        assert_eq!(data, vec![5, 6, 7, 11, 12, 13]);
        assert_eq!(steps[0].message, "Building max heap");
    }

    #[test]
    fn test_extraction_swap_then_sorted() {
        let mut data = vec![1, 3, 2];
        let mut steps: Vec<Step> = Vec::new();
        heap_sort(&mut data, &mut steps);

        let extraction = steps
            .iter()
            .position(|s| s.kind == StepKind::Swap && s.positions == vec![0, 2])
            .unwrap();
        assert_eq!(steps[extraction + 1].kind, StepKind::Sorted);
        assert_eq!(steps[extraction + 1].positions, vec![2]);
    }
}
