//! Array operations over `Vec<i64>`

use crate::step::{all_positions, Aux, Recorder, Step, StepKind};

fn invalid_index(index: usize, last: usize) -> Step {
    Step::reject(format!(
        "❌ Invalid index {}. Must be between 0 and {}",
        index, last
    ))
}

/// Insert `value` at `index` (`0..=len`), shifting the tail right
pub fn insert<R: Recorder<Vec<i64>>>(arr: &mut Vec<i64>, index: usize, value: i64, rec: &mut R) -> bool {
    if index > arr.len() {
        rec.record(arr, invalid_index(index, arr.len()));
        return false;
    }

    rec.record(
        arr,
        Step::at(
            StepKind::Highlight,
            vec![index],
            format!("Inserting {} at index {}", value, index),
        ),
    );
    for i in (index..arr.len()).rev() {
        rec.record(
            arr,
            Step::at(
                StepKind::Active,
                vec![i, i + 1],
                format!("Shifting element {} from index {} to {}", arr[i], i, i + 1),
            ),
        );
    }

    arr.insert(index, value);
    rec.record(
        arr,
        Step::at(
            StepKind::Insert,
            vec![index],
            format!("✅ Inserted {} at index {}", value, index),
        ),
    );
    settle(arr, rec);
    true
}

/// Remove the element at `index`, shifting the tail left. Returns the removed value.
pub fn delete<R: Recorder<Vec<i64>>>(arr: &mut Vec<i64>, index: usize, rec: &mut R) -> Option<i64> {
    if index >= arr.len() {
        rec.record(arr, invalid_index(index, arr.len().saturating_sub(1)));
        return None;
    }

    let removed = arr[index];
    rec.record(
        arr,
        Step::at(
            StepKind::Highlight,
            vec![index],
            format!("Deleting element {} at index {}", removed, index),
        ),
    );
    for i in index..arr.len() - 1 {
        rec.record(
            arr,
            Step::at(
                StepKind::Active,
                vec![i, i + 1],
                format!("Shifting element {} from index {} to {}", arr[i + 1], i + 1, i),
            ),
        );
    }

    arr.remove(index);
    rec.record(
        arr,
        Step::new(
            StepKind::Delete,
            format!("✅ Deleted {} from index {}", removed, index),
        ),
    );
    settle(arr, rec);
    Some(removed)
}

fn settle<R: Recorder<Vec<i64>>>(arr: &Vec<i64>, rec: &mut R) {
    rec.record(
        arr,
        Step::at(
            StepKind::Sorted,
            all_positions(arr.len()),
            format!("Array now has {} elements", arr.len()),
        ),
    );
}

/// Linear search from the front; returns the first matching index
pub fn search<R: Recorder<Vec<i64>>>(arr: &Vec<i64>, target: i64, rec: &mut R) -> Option<usize> {
    rec.record(
        arr,
        Step::new(StepKind::Highlight, format!("Searching for {} in array", target)),
    );

    for (i, &value) in arr.iter().enumerate() {
        let op = if value == target { "==" } else { "!=" };
        rec.record(
            arr,
            Step::at(
                StepKind::Compare,
                vec![i],
                format!("Checking index {}: {} {} {}", i, value, op, target),
            ),
        );
        if value == target {
            rec.record(
                arr,
                Step::at(
                    StepKind::Search,
                    vec![i],
                    format!("✅ Found {} at index {}", target, i),
                ),
            );
            return Some(i);
        }
    }

    rec.record(
        arr,
        Step::new(StepKind::Highlight, format!("❌ {} not found in array", target)),
    );
    None
}

/// Read the element at `index`
pub fn access<R: Recorder<Vec<i64>>>(arr: &Vec<i64>, index: usize, rec: &mut R) -> Option<i64> {
    let Some(&value) = arr.get(index) else {
        rec.record(arr, invalid_index(index, arr.len().saturating_sub(1)));
        return None;
    };

    rec.record(
        arr,
        Step::at(
            StepKind::Highlight,
            vec![index],
            format!("Accessing element at index {}...", index),
        ),
    );
    rec.record(
        arr,
        Step::at(
            StepKind::Search,
            vec![index],
            format!("✅ arr[{}] = {} (Direct access in O(1) time)", index, value),
        ),
    );
    Some(value)
}

/// Overwrite the element at `index`. Returns the previous value.
pub fn update<R: Recorder<Vec<i64>>>(arr: &mut Vec<i64>, index: usize, value: i64, rec: &mut R) -> Option<i64> {
    let Some(&old) = arr.get(index) else {
        rec.record(arr, invalid_index(index, arr.len().saturating_sub(1)));
        return None;
    };

    rec.record(
        arr,
        Step::at(
            StepKind::Highlight,
            vec![index],
            format!("Updating index {}: {} → {}", index, old, value),
        ),
    );
    arr[index] = value;
    rec.record(
        arr,
        Step::at(
            StepKind::Insert,
            vec![index],
            format!("✅ Updated index {} to {}", index, value),
        )
        .with_aux(Aux::Written { value }),
    );
    Some(old)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_shifts_then_settles() {
        let mut arr = vec![1, 2, 3];
        let mut steps: Vec<Step> = Vec::new();
        assert!(insert(&mut arr, 1, 9, &mut steps));

        assert_eq!(arr, vec![1, 9, 2, 3]);
        let kinds: Vec<StepKind> = steps.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::Highlight,
                StepKind::Active,
                StepKind::Active,
                StepKind::Insert,
                StepKind::Sorted,
            ]
        );
        assert_eq!(steps[1].positions, vec![2, 3]);
        assert_eq!(steps[4].positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_insert_at_end_has_no_shifts() {
        let mut arr = vec![1, 2];
        let mut steps: Vec<Step> = Vec::new();
        insert(&mut arr, 2, 3, &mut steps);
        assert_eq!(arr, vec![1, 2, 3]);
        assert!(steps.iter().all(|s| s.kind != StepKind::Active));
    }

    #[test]
    fn test_invalid_index_rejected_without_mutation() {
        let mut arr = vec![1, 2, 3];
        let mut steps: Vec<Step> = Vec::new();
        assert!(!insert(&mut arr, 4, 0, &mut steps));
        assert_eq!(delete(&mut arr, 3, &mut steps), None);
        assert_eq!(access(&arr, 7, &mut steps), None);
        assert_eq!(update(&mut arr, 3, 0, &mut steps), None);

        assert_eq!(arr, vec![1, 2, 3]);
        assert_eq!(steps.len(), 4);
        assert!(steps.iter().all(|s| s.rejected));
        assert!(steps[0].message.contains("Invalid index 4"));
    }

    #[test]
    fn test_delete_returns_value() {
        let mut arr = vec![4, 5, 6];
        let mut steps: Vec<Step> = Vec::new();
        assert_eq!(delete(&mut arr, 0, &mut steps), Some(4));
        assert_eq!(arr, vec![5, 6]);
        let shifts = steps.iter().filter(|s| s.kind == StepKind::Active).count();
        assert_eq!(shifts, 2);
    }

    #[test]
    fn test_search_found_and_missing() {
        let arr = vec![3, 8, 8];
        let mut steps: Vec<Step> = Vec::new();
        assert_eq!(search(&arr, 8, &mut steps), Some(1));
        assert_eq!(steps.last().unwrap().kind, StepKind::Search);

        let mut steps: Vec<Step> = Vec::new();
        assert_eq!(search(&arr, 5, &mut steps), None);
        let compares = steps.iter().filter(|s| s.kind == StepKind::Compare).count();
        assert_eq!(compares, 3);
        assert!(steps.last().unwrap().message.contains("not found"));
    }

    #[test]
    fn test_access_and_update() {
        let mut arr = vec![10, 20];
        let mut steps: Vec<Step> = Vec::new();
        assert_eq!(access(&arr, 1, &mut steps), Some(20));
        assert_eq!(update(&mut arr, 1, 25, &mut steps), Some(20));
        assert_eq!(arr, vec![10, 25]);
        assert_eq!(steps.last().unwrap().written_value(), Some(25));
    }
}
