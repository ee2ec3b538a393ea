use crate::step::{all_positions, Recorder, Step, StepKind};

/// Selection sort. The swap is applied before its step is emitted, so the step message
/// names the values at their new positions.
pub fn selection_sort<R: Recorder<[i64]>>(data: &mut [i64], rec: &mut R) {
    let n = data.len();

    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        rec.record(
            data,
            Step::at(
                StepKind::Minimum,
                vec![i],
                format!("Starting position {}, current minimum: {}", i, data[i]),
            ),
        );

        for j in i + 1..n {
            rec.record(
                data,
                Step::at(
                    StepKind::Compare,
                    vec![min_index, j],
                    format!("Comparing current minimum {} with {}", data[min_index], data[j]),
                ),
            );
            if data[j] < data[min_index] {
                min_index = j;
                rec.record(
                    data,
                    Step::at(
                        StepKind::Minimum,
                        vec![j],
                        format!("New minimum found: {} at index {}", data[j], j),
                    ),
                );
            }
        }

        if min_index != i {
            data.swap(i, min_index);
            rec.record(
                data,
                Step::at(
                    StepKind::Swap,
                    vec![i, min_index],
                    format!("Swapped minimum {} into position {}", data[i], i),
                ),
            );
        }

        rec.record(
            data,
            Step::at(
                StepKind::Sorted,
                vec![i],
                format!("Element {} is now in its correct position", data[i]),
            ),
        );
    }

    rec.record(data, Step::at(StepKind::Sorted, all_positions(n), "Sorting complete!"));
}
