use crate::step::{all_positions, Aux, Recorder, Step, StepKind};

/// Top-down merge sort. Placements write through the array left to right, each as a
/// `swap` on a single position carrying the written value.
pub fn merge_sort<R: Recorder<[i64]>>(data: &mut [i64], rec: &mut R) {
    if !data.is_empty() {
        sort_range(data, 0, data.len() - 1, rec);
    }
    let n = data.len();
    rec.record(data, Step::at(StepKind::Sorted, all_positions(n), "Sorting complete!"));
}

fn sort_range<R: Recorder<[i64]>>(data: &mut [i64], start: usize, end: usize, rec: &mut R) {
    if end <= start {
        return;
    }
    let mid = (start + end) / 2;
    sort_range(data, start, mid, rec);
    sort_range(data, mid + 1, end, rec);
    merge(data, start, mid, end, rec);
}

fn merge<R: Recorder<[i64]>>(data: &mut [i64], start: usize, mid: usize, end: usize, rec: &mut R) {
    let left = data[start..=mid].to_vec();
    let right = data[mid + 1..=end].to_vec();
    let (mut i, mut j, mut k) = (0, 0, start);

    while i < left.len() && j < right.len() {
        rec.record(
            data,
            Step::at(
                StepKind::Compare,
                vec![k],
                format!("Merging: comparing {} and {}", left[i], right[j]),
            ),
        );
        if left[i] <= right[j] {
            data[k] = left[i];
            i += 1;
        } else {
            data[k] = right[j];
            j += 1;
        }
        place(data, k, rec);
        k += 1;
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        data[k] = value;
        place(data, k, rec);
        k += 1;
    }

    for idx in start..=end {
        rec.record(
            data,
            Step::at(
                StepKind::Sorted,
                vec![idx],
                format!("Section from {} to {} merged", start, end),
            ),
        );
    }
}

fn place<R: Recorder<[i64]>>(data: &[i64], k: usize, rec: &mut R) {
    rec.record(
        data,
        Step::at(StepKind::Swap, vec![k], format!("Placed {} at position {}", data[k], k))
            .with_aux(Aux::Written { value: data[k] }),
    );
}
