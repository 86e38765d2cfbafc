//! Unit tests for the cursor-based tree matcher

use pickpath::matcher::collect;
use pickpath::parser::parse;
use pickpath::value::Value;
use serde_json::json;

fn tree(v: serde_json::Value) -> Value {
    Value::from(v)
}

#[test]
fn test_name_match_at_any_depth() {
    let root = tree(json!({
        "a": { "b": { "target": 1 } },
        "c": { "target": 2 },
        "target": 3,
    }));
    let found: Vec<i64> = collect(&root, &parse("target"));
    // sorted-key traversal: a.b.target, c.target, then the top-level target
    assert_eq!(found, vec![1, 2, 3]);
}

#[test]
fn test_name_match_is_case_insensitive() {
    let root = tree(json!({ "UserName": "bob" }));
    let found: Vec<String> = collect(&root, &parse("username"));
    assert_eq!(found, vec!["bob"]);
}

#[test]
fn test_wildcard_step_matches_every_key() {
    let root = tree(json!({ "b": 1, "a": 2 }));
    let found: Vec<i64> = collect(&root, &parse("[]"));
    // the root map matches too but does not coerce to i64; children follow
    // in sorted-key order
    assert_eq!(found, vec![2, 1]);
}

#[test]
fn test_map_children_visited_in_sorted_key_order() {
    let root = tree(json!({
        "b": { "x": "from-b" },
        "a": { "x": "from-a" },
    }));
    let found: Vec<String> = collect(&root, &parse("x"));
    assert_eq!(found, vec!["from-a", "from-b"]);
}

#[test]
fn test_list_children_visited_in_index_order() {
    let root = tree(json!({ "xs": [10, 2, 30, 4, 50, 6, 70, 8, 90, 10, 110] }));
    let found: Vec<i64> = collect(&root, &parse("xs []"));
    // never lexicographic by index ("10" < "2"), always original order
    assert_eq!(found, vec![10, 2, 30, 4, 50, 6, 70, 8, 90, 10, 110]);
}

#[test]
fn test_steps_matched_strictly_in_sequence() {
    let root = tree(json!({
        "a": { "b": { "c": 1 } },
        "b": { "c": 2 },
    }));
    let found: Vec<i64> = collect(&root, &parse("a b c"));
    assert_eq!(found, vec![1]);

    // intermediate keys that match no step are simply passed through
    let found: Vec<i64> = collect(&root, &parse("a c"));
    assert_eq!(found, vec![1]);

    // but steps are never reordered
    let found: Vec<i64> = collect(&root, &parse("b a"));
    assert!(found.is_empty());
}

#[test]
fn test_predicates_are_anded() {
    let root = tree(json!({
        "items": [
            { "kind": "x", "size": 5, "id": 1 },
            { "kind": "x", "size": 9, "id": 2 },
            { "kind": "y", "size": 9, "id": 3 },
        ],
    }));
    let found: Vec<i64> = collect(&root, &parse("items [kind=x,size>6] id"));
    assert_eq!(found, vec![2]);
}

#[test]
fn test_predicate_on_absent_field_never_matches() {
    let root = tree(json!({ "items": [ { "id": 1 } ] }));
    let found: Vec<i64> = collect(&root, &parse("items [missing=1] id"));
    assert!(found.is_empty());
}

#[test]
fn test_numeric_predicate_against_non_numeric_child() {
    let root = tree(json!({
        "items": [
            { "level": "not a number", "id": 1 },
            { "level": {"nested": true}, "id": 2 },
            { "level": "7", "id": 3 },
        ],
    }));
    // numeric strings coerce, everything else silently fails
    let found: Vec<i64> = collect(&root, &parse("items [level>5] id"));
    assert_eq!(found, vec![3]);
}

#[test]
fn test_invalid_predicate_silences_branch() {
    let root = tree(json!({ "items": [ { "level": 9, "id": 1 } ] }));
    let found: Vec<i64> = collect(&root, &parse("items [level>notanumber] id"));
    assert!(found.is_empty());
}

#[test]
fn test_like_and_not_equal_operators() {
    let root = tree(json!({
        "posts": [
            { "title": "learning rust", "id": 1 },
            { "title": "cooking",       "id": 2 },
        ],
    }));
    let found: Vec<i64> = collect(&root, &parse("posts [title*=rust] id"));
    assert_eq!(found, vec![1]);

    let found: Vec<i64> = collect(&root, &parse("posts [title!=cooking] id"));
    assert_eq!(found, vec![1]);
}

#[test]
fn test_final_container_itself_is_the_match() {
    let root = tree(json!({ "contact": { "email": "a@b", "phone": "1" } }));
    let found: Vec<Value> = collect(&root, &parse("contact"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].get("email"), Some(&Value::from("a@b")));
}

#[test]
fn test_repeated_nested_structures_all_match() {
    // the step-back-by-one rule: after a full match, deeper repetitions of
    // the final step along the same branch keep matching
    let root = tree(json!({
        "comments": [
            { "user": "a", "comments": [ { "user": "b" } ] },
        ],
    }));
    let found: Vec<Value> = collect(&root, &parse("comments"));
    assert_eq!(found.len(), 2);
}

#[test]
fn test_scalar_terminal_match() {
    let root = tree(json!({ "id": 42 }));
    let found: Vec<i64> = collect(&root, &parse("id"));
    assert_eq!(found, vec![42]);
}

#[test]
fn test_final_step_predicates_never_match_scalars() {
    // a scalar has no children for the predicate to inspect
    let root = tree(json!({ "id": 42 }));
    let found: Vec<i64> = collect(&root, &parse("id [x=1]"));
    assert!(found.is_empty());
}

#[test]
fn test_wildcard_first_step_includes_root() {
    let root = tree(json!({ "a": 1 }));
    let found: Vec<Value> = collect(&root, &parse("[]"));
    // root matches the wildcard (visited with the empty key), then its child
    assert_eq!(found.len(), 2);
    assert_eq!(found[1], Value::Int(1));
}

#[test]
fn test_named_first_step_does_not_match_root() {
    let root = tree(json!({ "a": 1 }));
    let found: Vec<Value> = collect(&root, &parse("nosuch"));
    assert!(found.is_empty());
}

#[test]
fn test_empty_selector_yields_nothing() {
    let root = tree(json!({ "a": 1 }));
    let found: Vec<Value> = collect(&root, &parse(""));
    assert!(found.is_empty());
}

#[test]
fn test_coercion_failure_drops_candidate() {
    let root = tree(json!({ "a": { "nested": true }, "b": 7 }));
    // both keys match the wildcard; only the scalar coerces to i64
    let found: Vec<i64> = collect(&root, &parse("[]"));
    assert_eq!(found, vec![7]);
}

#[test]
fn test_record_fields_match_like_map_entries() {
    let root = Value::record(
        "User",
        vec![
            ("id", Value::Int(7)),
            ("name", Value::from("ada")),
        ],
    );
    let found: Vec<i64> = collect(&root, &parse("id"));
    assert_eq!(found, vec![7]);

    let found: Vec<i64> = collect(&root, &parse("[name=ada] id"));
    assert_eq!(found, vec![7]);
}

#[test]
fn test_idempotent_evaluation() {
    let root = tree(json!({
        "users": [ { "id": 1 }, { "id": 2 } ],
    }));
    let sel = parse("users id");
    let first: Vec<i64> = collect(&root, &sel);
    let second: Vec<i64> = collect(&root, &sel);
    assert_eq!(first, second);
    assert_eq!(first, vec![1, 2]);
}
