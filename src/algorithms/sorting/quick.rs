use crate::step::{all_positions, Recorder, Step, StepKind};

/// Quicksort with Lomuto partitioning
pub fn quick_sort<R: Recorder<[i64]>>(data: &mut [i64], rec: &mut R) {
    if !data.is_empty() {
        sort_range(data, 0, data.len() - 1, rec);
    }
    let n = data.len();
    rec.record(data, Step::at(StepKind::Sorted, all_positions(n), "Sorting complete!"));
}

fn sort_range<R: Recorder<[i64]>>(data: &mut [i64], low: usize, high: usize, rec: &mut R) {
    if low >= high {
        return;
    }
    let pivot = partition(data, low, high, rec);
    if pivot > low {
        sort_range(data, low, pivot - 1, rec);
    }
    sort_range(data, pivot + 1, high, rec);
}

/// Partition `data[low..=high]` around its last element and return the pivot's final
/// index. Everything left of it is strictly smaller.
pub fn partition<R: Recorder<[i64]>>(data: &mut [i64], low: usize, high: usize, rec: &mut R) -> usize {
    let pivot = data[high];
    rec.record(
        data,
        Step::at(StepKind::Active, vec![high], format!("Pivot selected: {}", pivot)),
    );

    // next slot for an element smaller than the pivot
    let mut store = low;
    for j in low..high {
        rec.record(
            data,
            Step::at(
                StepKind::Compare,
                vec![j, high],
                format!("Comparing {} with pivot {}", data[j], pivot),
            ),
        );
        if data[j] < pivot {
            if store != j {
                data.swap(store, j);
                rec.record(
                    data,
                    Step::at(
                        StepKind::Swap,
                        vec![store, j],
                        format!("Swapping {} and {}", data[store], data[j]),
                    ),
                );
            }
            store += 1;
        }
    }

    data.swap(store, high);
    rec.record(
        data,
        Step::at(
            StepKind::Swap,
            vec![store, high],
            format!("Placing pivot {} at correct position", data[store]),
        ),
    );
    rec.record(
        data,
        Step::at(
            StepKind::Sorted,
            vec![store],
            format!("Pivot {} is now in its final position", data[store]),
        ),
    );
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_sort_small() {
        let mut data = vec![3, 1, 2];
        let mut steps: Vec<Step> = Vec::new();
        quick_sort(&mut data, &mut steps);

        assert_eq!(data, vec![1, 2, 3]);
        for kind in [StepKind::Compare, StepKind::Swap, StepKind::Sorted] {
            assert!(steps.iter().any(|s| s.kind == kind), "missing {}", kind);
        }
    }

    #[test]
    fn test_partition_returns_pivot_index() {
        let mut data = vec![7, 2, 9, 1, 5];
        let pivot = partition(&mut data, 0, 4, &mut ());

        assert_eq!(pivot, 2);
        assert_eq!(data[pivot], 5);
        assert!(data[..pivot].iter().all(|&v| v < 5));
        assert!(data[pivot + 1..].iter().all(|&v| v >= 5));
    }

    #[test]
    fn test_quick_sort_duplicates() {
        let mut data = vec![4, 4, 1, 4, 0];
        quick_sort(&mut data, &mut ());
        assert_eq!(data, vec![0, 1, 4, 4, 4]);
    }
}
