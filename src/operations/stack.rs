//! Stack operations. The top of the stack is the last element of the `Vec`.

use crate::step::{all_positions, Recorder, Step, StepKind};

/// Push `value`; with a `capacity`, a full stack rejects the push
pub fn push<R: Recorder<Vec<i64>>>(
    stack: &mut Vec<i64>,
    value: i64,
    capacity: Option<usize>,
    rec: &mut R,
) -> bool {
    if let Some(capacity) = capacity.filter(|&c| stack.len() >= c) {
        rec.record(
            stack,
            Step::reject(format!(
                "❌ Stack Overflow! Cannot push {}. Stack is full (capacity: {})",
                value, capacity
            )),
        );
        return false;
    }

    rec.record(
        stack,
        Step::new(StepKind::Highlight, format!("Pushing {} onto the stack", value)),
    );
    stack.push(value);
    let top = stack.len() - 1;
    rec.record(
        stack,
        Step::at(
            StepKind::Insert,
            vec![top],
            format!("✅ Pushed {}. Stack size: {}", value, stack.len()),
        ),
    );
    rec.record(
        stack,
        Step::at(StepKind::Active, vec![top], format!("Top of stack is now {}", value)),
    );
    true
}

/// Pop the top element
pub fn pop<R: Recorder<Vec<i64>>>(stack: &mut Vec<i64>, rec: &mut R) -> Option<i64> {
    let Some(&value) = stack.last() else {
        rec.record(
            stack,
            Step::reject("❌ Stack Underflow! Cannot pop from empty stack"),
        );
        return None;
    };
    let top = stack.len() - 1;

    rec.record(
        stack,
        Step::at(
            StepKind::Highlight,
            vec![top],
            format!("Popping {} from the stack", value),
        ),
    );
    stack.pop();
    rec.record(
        stack,
        Step::at(
            StepKind::Delete,
            vec![top],
            format!("Removed top element {}", value),
        ),
    );

    match stack.last() {
        Some(&new_top) => rec.record(
            stack,
            Step::at(
                StepKind::Active,
                vec![stack.len() - 1],
                format!(
                    "✅ Popped {}. New top: {}. Stack size: {}",
                    value,
                    new_top,
                    stack.len()
                ),
            ),
        ),
        None => rec.record(
            stack,
            Step::new(
                StepKind::Highlight,
                format!("✅ Popped {}. Stack is now empty", value),
            ),
        ),
    }
    Some(value)
}

/// Read the top element
pub fn peek<R: Recorder<Vec<i64>>>(stack: &Vec<i64>, rec: &mut R) -> Option<i64> {
    let Some(&value) = stack.last() else {
        rec.record(stack, Step::reject("❌ Cannot peek. Stack is empty"));
        return None;
    };
    let top = stack.len() - 1;

    rec.record(
        stack,
        Step::at(StepKind::Highlight, vec![top], "Peeking at top of stack"),
    );
    rec.record(
        stack,
        Step::at(
            StepKind::Search,
            vec![top],
            format!("✅ Top element is {}. Stack size: {}", value, stack.len()),
        ),
    );
    Some(value)
}

/// Search from the top down. Returns the 1-based position counted from the top.
pub fn search<R: Recorder<Vec<i64>>>(stack: &Vec<i64>, target: i64, rec: &mut R) -> Option<usize> {
    if stack.is_empty() {
        rec.record(stack, Step::reject("❌ Stack is empty"));
        return None;
    }

    rec.record(
        stack,
        Step::new(
            StepKind::Highlight,
            format!("Searching for {} in stack (top to bottom)", target),
        ),
    );
    for i in (0..stack.len()).rev() {
        let depth = stack.len() - i;
        let op = if stack[i] == target { "==" } else { "!=" };
        rec.record(
            stack,
            Step::at(
                StepKind::Compare,
                vec![i],
                format!("Checking position {}: {} {} {}", depth, stack[i], op, target),
            ),
        );
        if stack[i] == target {
            rec.record(
                stack,
                Step::at(
                    StepKind::Search,
                    vec![i],
                    format!("✅ Found {} at position {} from top", target, depth),
                ),
            );
            return Some(depth);
        }
    }

    rec.record(
        stack,
        Step::new(StepKind::Highlight, format!("❌ {} not found in stack", target)),
    );
    None
}

pub fn is_empty<R: Recorder<Vec<i64>>>(stack: &Vec<i64>, rec: &mut R) -> bool {
    rec.record(
        stack,
        Step::new(StepKind::Highlight, "Checking if stack is empty..."),
    );
    let empty = stack.is_empty();
    let verdict = format!(
        "✅ Stack is {} (size: {})",
        if empty { "EMPTY" } else { "NOT EMPTY" },
        stack.len()
    );
    let step = if empty {
        Step::new(StepKind::Highlight, verdict)
    } else {
        Step::at(StepKind::Search, vec![stack.len() - 1], verdict)
    };
    rec.record(stack, step);
    empty
}

pub fn size<R: Recorder<Vec<i64>>>(stack: &Vec<i64>, rec: &mut R) -> usize {
    let n = stack.len();
    rec.record(
        stack,
        Step::at(StepKind::Highlight, all_positions(n), "Counting stack elements..."),
    );
    rec.record(
        stack,
        Step::at(
            StepKind::Search,
            all_positions(n),
            format!("✅ Stack size: {} element{}", n, if n == 1 { "" } else { "s" }),
        ),
    );
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_lifo() {
        let mut stack = Vec::new();
        let mut steps: Vec<Step> = Vec::new();
        push(&mut stack, 1, None, &mut steps);
        push(&mut stack, 2, None, &mut steps);

        assert_eq!(pop(&mut stack, &mut steps), Some(2));
        assert_eq!(stack, vec![1]);
        assert!(steps.last().unwrap().message.contains("New top: 1"));
    }

    #[test]
    fn test_overflow_and_underflow() {
        let mut stack = vec![1, 2];
        let mut steps: Vec<Step> = Vec::new();
        assert!(!push(&mut stack, 3, Some(2), &mut steps));
        assert_eq!(stack, vec![1, 2]);
        assert!(steps[0].rejected);
        assert!(steps[0].message.contains("Stack Overflow"));

        let mut empty = Vec::new();
        let mut steps: Vec<Step> = Vec::new();
        assert_eq!(pop(&mut empty, &mut steps), None);
        assert_eq!(steps.len(), 1);
        assert!(steps[0].message.contains("Stack Underflow"));
    }

    #[test]
    fn test_pop_last_element_reports_empty() {
        let mut stack = vec![5];
        let mut steps: Vec<Step> = Vec::new();
        pop(&mut stack, &mut steps);
        assert!(steps.last().unwrap().message.contains("now empty"));
    }

    #[test]
    fn test_search_counts_from_top() {
        let stack = vec![7, 8, 9];
        let mut steps: Vec<Step> = Vec::new();
        assert_eq!(search(&stack, 7, &mut steps), Some(3));
        let visited: Vec<usize> = steps
            .iter()
            .filter(|s| s.kind == StepKind::Compare)
            .map(|s| s.positions[0])
            .collect();
        assert_eq!(visited, vec![2, 1, 0]);
    }

    #[test]
    fn test_peek_size_is_empty() {
        let stack = vec![3, 4];
        let mut steps: Vec<Step> = Vec::new();
        assert_eq!(peek(&stack, &mut steps), Some(4));
        assert_eq!(size(&stack, &mut steps), 2);
        assert!(!is_empty(&stack, &mut steps));
        assert!(is_empty(&Vec::new(), &mut steps));
        assert_eq!(peek(&Vec::new(), &mut steps), None);
    }
}
