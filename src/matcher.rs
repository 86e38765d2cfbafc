//! Cursor-based tree matcher
//!
//! Walks the value tree depth-first, advancing a per-branch cursor through the
//! compiled step sequence and collecting every value at which the cursor
//! completes the sequence. The cursor is an immutable index passed by
//! argument down each recursive call: sibling branches never share state, and
//! there is no backtracking: a branch either continues deeper with whatever
//! index it holds, or it dies out without producing a match.
//!
//! Traversal order is deterministic regardless of how the source container
//! iterates: list children in original index order, map and record children in
//! lexicographically sorted key order.

use crate::ast::{CmpOp, Operand, Predicate, Selector, Step};
use crate::coerce::FromValue;
use crate::value::Value;

/// Collect every match of `selector` under `root`, coerced to `T` in
/// visitation order. Candidates that fail coercion are dropped silently.
pub fn collect<T: FromValue>(root: &Value, selector: &Selector) -> Vec<T> {
    let mut out = Vec::new();
    if !selector.is_empty() {
        walk(root, "", 0, &selector.steps, &mut out);
    }
    out
}

/// Visit one (key, value) pair with the step index inherited from the parent
/// branch. The root is visited with the empty key.
fn walk<T: FromValue>(
    value: &Value,
    key: &str,
    step_index: usize,
    steps: &[Step],
    out: &mut Vec<T>,
) {
    let step = &steps[step_index];
    let name_matched = step.is_wildcard() || eq_fold(&step.name, key);

    match value.projection() {
        Some(children) => {
            let mut index = step_index;
            if name_matched && predicates_hold(step, &children) {
                index += 1;
                if index == steps.len() {
                    // Full match: the container itself is a result. Step back
                    // by one so deeper repetitions of the final step keep
                    // matching along the branches below this point.
                    index -= 1;
                    push_match(value, out);
                }
            }
            for (child_key, child) in &children {
                walk(child, child_key, index, steps, out);
            }
        }
        None => {
            // Scalars carry no children, so only a predicate-free final step
            // can close the sequence here; there is nothing to recurse into.
            if name_matched && step.predicates.is_empty() && step_index + 1 == steps.len() {
                push_match(value, out);
            }
        }
    }
}

fn push_match<T: FromValue>(value: &Value, out: &mut Vec<T>) {
    if let Some(coerced) = T::from_value(value) {
        out.push(coerced);
    }
}

/// All predicates of a step must hold at this location (AND semantics).
fn predicates_hold(step: &Step, children: &[(String, &Value)]) -> bool {
    step.predicates
        .iter()
        .all(|p| predicate_holds(p, children))
}

/// A predicate whose field is absent from the projection is not satisfied.
/// Non-coercible values fail numeric comparisons without erroring.
fn predicate_holds(predicate: &Predicate, children: &[(String, &Value)]) -> bool {
    let Some((_, value)) = children.iter().find(|(k, _)| k == &predicate.field) else {
        return false;
    };

    match (predicate.op, &predicate.operand) {
        (CmpOp::Eq, Operand::Text(text)) => value.render() == *text,
        (CmpOp::Like, Operand::Text(text)) => value.render().contains(text.as_str()),
        (CmpOp::Ne, Operand::Text(text)) => value.render() != *text,
        (CmpOp::Gt, Operand::Number(n)) => value.as_f64().is_some_and(|x| x > *n),
        (CmpOp::Ge, Operand::Number(n)) => value.as_f64().is_some_and(|x| x >= *n),
        (CmpOp::Lt, Operand::Number(n)) => value.as_f64().is_some_and(|x| x < *n),
        (CmpOp::Le, Operand::Number(n)) => value.as_f64().is_some_and(|x| x <= *n),
        _ => false,
    }
}

/// Case-insensitive (simple Unicode fold) key comparison.
fn eq_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
