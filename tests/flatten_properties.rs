//! Behavioural and property tests for the flattener's public API.

use config_manifest::document::parse_document;
use config_manifest::flatten::{FlattenOptions, flatten, flatten_with, unflatten};
use config_manifest::models::{Mapping, Node, Scalar};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{Value, json};
use std::path::Path;

fn yaml(content: &str) -> Node {
    parse_document(content, Path::new("test.yaml")).unwrap()
}

fn flat_json(node: &Node) -> Value {
    serde_json::to_value(flatten(node).unwrap()).unwrap()
}

// ---------------------------------------------------------------------------
// Worked examples
// ---------------------------------------------------------------------------

#[test]
fn two_level_document() {
    let doc = yaml("a:\n  b: 1\n  c: 2\nd: 3\n");
    assert_eq!(flat_json(&doc), json!({"a.b": 1, "a.c": 2, "d": 3}));
}

#[test]
fn three_level_chain() {
    let doc = yaml("a:\n  b:\n    c: x\n");
    assert_eq!(flat_json(&doc), json!({"a.b.c": "x"}));
}

#[test]
fn list_of_mappings_stays_verbatim() {
    let doc = yaml("a:\n  - x: 1\n");
    assert_eq!(flat_json(&doc), json!({"a": [{"x": 1}]}));
}

#[test]
fn flat_input_is_a_fixed_point() {
    let doc = yaml("a: 1\nb: 2\n");
    assert_eq!(flat_json(&doc), json!({"a": 1, "b": 2}));
}

#[test]
fn merged_anchor_flattens_under_the_merging_key() {
    let doc = yaml("base: &b\n  x: 1\nsvc:\n  <<: *b\n  y: 2\n");
    assert_eq!(
        flat_json(&doc),
        json!({"base.x": 1, "svc.x": 1, "svc.y": 2})
    );
}

#[test]
fn empty_document() {
    assert!(flatten(&yaml("")).unwrap().is_empty());
}

#[test]
fn leaf_types_are_not_coerced() {
    let doc = yaml("s: \"42\"\ni: 42\nf: 4.5\nb: false\nn: null\nl: [1, \"1\"]\n");
    let flat = flatten(&doc).unwrap();
    assert_eq!(*flat["s"], Node::Scalar(Scalar::String("42".into())));
    assert_eq!(*flat["i"], Node::Scalar(Scalar::Integer(42)));
    assert_eq!(*flat["f"], Node::Scalar(Scalar::Float(4.5)));
    assert_eq!(*flat["b"], Node::Scalar(Scalar::Bool(false)));
    assert_eq!(*flat["n"], Node::Scalar(Scalar::Null));
    assert_eq!(
        *flat["l"],
        Node::List(vec![
            Node::Scalar(Scalar::Integer(1)),
            Node::Scalar(Scalar::String("1".into())),
        ])
    );
}

#[test]
fn custom_separator_round_trips() {
    let doc = yaml("a.b:\n  c: 1\n");
    let options = FlattenOptions {
        separator: "::".into(),
        ..FlattenOptions::default()
    };
    let flat = flatten_with(&doc, &options).unwrap();
    assert!(flat.contains_key("a.b::c"));
    assert_eq!(unflatten(&flat, "::"), doc);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,5}"
}

fn leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        Just(Node::Scalar(Scalar::Null)),
        any::<bool>().prop_map(Node::from),
        any::<i64>().prop_map(Node::from),
        "[a-zA-Z .]{0,8}".prop_map(|s| Node::Scalar(Scalar::String(s))),
        prop::collection::vec(any::<i64>().prop_map(Node::from), 0..3).prop_map(Node::List),
    ]
}

/// Trees with non-empty nested mappings and keys free of the separator.
fn subtree() -> impl Strategy<Value = Node> {
    leaf().prop_recursive(4, 48, 4, |inner| {
        prop::collection::vec((key(), inner), 1..4)
            .prop_map(|entries| Node::Mapping(entries.into_iter().collect::<Mapping>()))
    })
}

fn document() -> impl Strategy<Value = Node> {
    prop::collection::vec((key(), subtree()), 0..5)
        .prop_map(|entries| Node::Mapping(entries.into_iter().collect::<Mapping>()))
}

fn count_leaves(node: &Node) -> usize {
    match node {
        Node::Mapping(mapping) => mapping.values().map(count_leaves).sum(),
        _ => 1,
    }
}

proptest! {
    #[test]
    fn prop_unflatten_inverts_flatten(doc in document()) {
        let flat = flatten(&doc).unwrap();
        prop_assert_eq!(&unflatten(&flat, "."), &doc);
    }

    #[test]
    fn prop_one_entry_per_leaf(doc in document()) {
        let flat = flatten(&doc).unwrap();
        prop_assert_eq!(flat.len(), count_leaves(&doc));
        prop_assert!(flat.values().all(|value| !value.is_mapping()));
    }

    #[test]
    fn prop_depth_one_is_identity(entries in prop::collection::vec((key(), leaf()), 0..6)) {
        let doc = Node::Mapping(entries.into_iter().collect::<Mapping>());
        let flat = flatten(&doc).unwrap();
        let mapping = doc.as_mapping().unwrap();
        prop_assert_eq!(flat.len(), mapping.len());
        for (key, value) in mapping {
            prop_assert!(std::ptr::eq(flat[key.as_str()], value));
        }
    }
}
