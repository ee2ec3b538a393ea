use crate::step::{all_positions, Aux, Recorder, Step, StepKind};

/// Insertion sort.
///
/// Every comparison against the key is emitted, including the one that stops the shift
/// loop, so already-sorted input costs one `compare` per element. Shifts and the final
/// placement carry an [`Aux::Written`] payload.
pub fn insertion_sort<R: Recorder<[i64]>>(data: &mut [i64], rec: &mut R) {
    let n = data.len();
    if n == 0 {
        rec.record(data, Step::at(StepKind::Sorted, Vec::new(), "Sorting complete!"));
        return;
    }

    rec.record(
        data,
        Step::at(StepKind::Sorted, vec![0], "First element is considered sorted"),
    );

    for i in 1..n {
        let key = data[i];
        rec.record(
            data,
            Step::at(
                StepKind::Active,
                vec![i],
                format!("Selecting {} to insert into sorted portion", key),
            ),
        );

        let mut hole = i;
        while hole > 0 {
            let j = hole - 1;
            if data[j] <= key {
                rec.record(
                    data,
                    Step::at(
                        StepKind::Compare,
                        vec![j, hole],
                        format!("{} <= {}, insertion point found", data[j], key),
                    ),
                );
                break;
            }

            rec.record(
                data,
                Step::at(
                    StepKind::Compare,
                    vec![j, hole],
                    format!("{} > {}, shifting {} right", data[j], key, data[j]),
                ),
            );
            data[hole] = data[j];
            rec.record(
                data,
                Step::at(
                    StepKind::Swap,
                    vec![hole],
                    format!("Shifted {} to position {}", data[hole], hole),
                )
                .with_aux(Aux::Written { value: data[hole] }),
            );
            hole = j;
        }

        data[hole] = key;
        rec.record(
            data,
            Step::at(
                StepKind::Active,
                vec![hole],
                format!("Placed {} at position {}", key, hole),
            )
            .with_aux(Aux::Written { value: key }),
        );
        rec.record(
            data,
            Step::at(
                StepKind::Sorted,
                all_positions(i + 1),
                format!("First {} elements are now sorted", i + 1),
            ),
        );
    }

    rec.record(data, Step::at(StepKind::Sorted, all_positions(n), "Sorting complete!"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::replay;

    #[test]
    fn test_insertion_sort() {
        let mut data = vec![4, 3, 2, 10, 12, 1, 5, 6];
        let mut steps: Vec<Step> = Vec::new();
        insertion_sort(&mut data, &mut steps);
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 10, 12]);
    }

    #[test]
    fn test_sorted_input_one_compare_per_element() {
        let mut data = vec![1, 2, 3, 4, 5];
        let mut steps: Vec<Step> = Vec::new();
        insertion_sort(&mut data, &mut steps);

        let compares = steps.iter().filter(|s| s.kind == StepKind::Compare).count();
        assert_eq!(compares, 4);
        assert!(steps.iter().all(|s| s.kind != StepKind::Swap));
    }

    #[test]
    fn test_written_payloads_replay() {
        let input = vec![3, 1, 2];
        let mut data = input.clone();
        let mut steps: Vec<Step> = Vec::new();
        insertion_sort(&mut data, &mut steps);

        assert_eq!(replay(&input, &steps, steps.len()), data);
    }
}
