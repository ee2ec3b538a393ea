//! Re-derive an array from a prefix of sorting steps
//!
//! Sorting steps are self-describing: a `swap` with two positions exchanges them, and a
//! step carrying a [`Aux::Written`] payload overwrites its single position. Every other
//! step leaves the array alone. Replaying steps `0..k` against the input therefore lands
//! on the same array the timeline captured after step `k`.

use crate::step::{Aux, Step, StepKind};

/// Apply one step to `data` in place
pub fn apply_step(data: &mut [i64], step: &Step) {
    if let Some(Aux::Written { value }) = step.aux {
        if let Some(&pos) = step.positions.first() {
            if let Some(slot) = data.get_mut(pos) {
                *slot = value;
            }
        }
        return;
    }

    if step.kind == StepKind::Swap {
        if let [a, b] = step.positions[..] {
            if a < data.len() && b < data.len() {
                data.swap(a, b);
            }
        }
    }
}

/// `initial` after the first `count` steps
pub fn replay(initial: &[i64], steps: &[Step], count: usize) -> Vec<i64> {
    let mut data = initial.to_vec();
    for step in steps.iter().take(count) {
        apply_step(&mut data, step);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_and_write() {
        let steps = vec![
            Step::at(StepKind::Compare, vec![0, 1], "compare"),
            Step::at(StepKind::Swap, vec![0, 1], "swap"),
            Step::at(StepKind::Swap, vec![2], "place").with_aux(Aux::Written { value: 9 }),
        ];
        assert_eq!(replay(&[3, 1, 2], &steps, 2), vec![1, 3, 2]);
        assert_eq!(replay(&[3, 1, 2], &steps, 3), vec![1, 3, 9]);
    }

    #[test]
    fn test_single_position_swap_without_payload_is_ignored() {
        let steps = vec![Step::at(StepKind::Swap, vec![0], "marker")];
        assert_eq!(replay(&[4, 5], &steps, 1), vec![4, 5]);
    }
}
