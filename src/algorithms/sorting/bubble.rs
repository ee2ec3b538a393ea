use crate::step::{all_positions, Recorder, Step, StepKind};

/// Bubble sort with the early exit on a pass without swaps
pub fn bubble_sort<R: Recorder<[i64]>>(data: &mut [i64], rec: &mut R) {
    let n = data.len();

    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        let end = n - i - 1;

        for j in 0..end {
            rec.record(
                data,
                Step::at(
                    StepKind::Compare,
                    vec![j, j + 1],
                    format!("Comparing {} and {}", data[j], data[j + 1]),
                ),
            );

            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
                rec.record(
                    data,
                    Step::at(
                        StepKind::Swap,
                        vec![j, j + 1],
                        format!("Swapping {} and {}", data[j + 1], data[j]),
                    ),
                );
            }
        }

        rec.record(
            data,
            Step::at(
                StepKind::Sorted,
                vec![end],
                format!("Element {} is now in its correct position", data[end]),
            ),
        );

        if !swapped {
            if end > 0 {
                rec.record(
                    data,
                    Step::at(StepKind::Sorted, all_positions(end), "No swaps made - array is sorted"),
                );
            }
            break;
        }
    }

    rec.record(data, Step::at(StepKind::Sorted, all_positions(n), "Sorting complete!"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_sorted_steps(steps: &[Step], n: usize) -> usize {
        steps
            .iter()
            .filter(|s| s.kind == StepKind::Sorted && s.positions == all_positions(n))
            .count()
    }

    #[test]
    fn test_sorts_and_ends_with_one_full_sorted_step() {
        let mut data = vec![5, 2, 8, 1, 9];
        let mut steps: Vec<Step> = Vec::new();
        bubble_sort(&mut data, &mut steps);

        assert_eq!(data, vec![1, 2, 5, 8, 9]);
        assert!(steps.iter().any(|s| s.kind == StepKind::Compare));
        assert_eq!(full_sorted_steps(&steps, 5), 1);
        assert_eq!(steps.last().map(|s| s.positions.clone()), Some(all_positions(5)));
    }

    #[test]
    fn test_sorted_input_exits_after_one_pass() {
        let mut data = vec![1, 2, 3, 4];
        let mut steps: Vec<Step> = Vec::new();
        bubble_sort(&mut data, &mut steps);

        let compares = steps.iter().filter(|s| s.kind == StepKind::Compare).count();
        assert_eq!(compares, 3);
        assert!(steps.iter().all(|s| s.kind != StepKind::Swap));
        assert_eq!(full_sorted_steps(&steps, 4), 1);
    }

    #[test]
    fn test_empty_and_single() {
        let mut steps: Vec<Step> = Vec::new();
        bubble_sort(&mut [], &mut steps);
        assert_eq!(steps.len(), 1);

        let mut steps: Vec<Step> = Vec::new();
        let mut one = vec![7];
        bubble_sort(&mut one, &mut steps);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].positions, vec![0]);
    }

    #[test]
    fn test_compare_precedes_each_swap() {
        let mut data = vec![3, 1, 2, 1, 3];
        let mut steps: Vec<Step> = Vec::new();
        bubble_sort(&mut data, &mut steps);

        assert_eq!(data, vec![1, 1, 2, 3, 3]);
        for (i, step) in steps.iter().enumerate() {
            if step.kind == StepKind::Swap {
                assert_eq!(steps[i - 1].kind, StepKind::Compare);
                assert_eq!(steps[i - 1].positions, step.positions);
            }
        }
    }
}
