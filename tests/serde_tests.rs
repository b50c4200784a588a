//! Serde interop for `Node`.
//!
//! `Node` implements `Serialize` and `Deserialize`, so any self-describing
//! serde format can act as the external parser. JSON through serde_json is
//! the reference case.

use node_decode::{decode, node, Node};

#[test]
fn json_parses_into_a_node_tree() {
    let root: Node = serde_json::from_str(r#"{"a": [1, 2], "b": null}"#).unwrap();
    assert_eq!(root, node!({"a": [1, 2], "b": null}));
}

#[test]
fn json_numbers_become_scalar_text() {
    let root: Node = serde_json::from_str(r#"[1, -2, 2.5, true, "x"]"#).unwrap();
    assert_eq!(root, node!(["1", "-2", "2.5", "true", "x"]));
}

#[test]
fn json_derived_nodes_decode_like_any_other() {
    let root: Node = serde_json::from_str(r#"{"sizes": [1, 2, 3]}"#).unwrap();
    let sizes: Vec<u8> = decode(root.get("sizes").unwrap()).unwrap();
    assert_eq!(sizes, vec![1, 2, 3]);
}

#[test]
fn nodes_serialize_back_to_json() {
    let tree = node!({"name": "Alice", "tags": ["a", "b"]});
    let json = serde_json::to_string(&tree).unwrap();
    assert_eq!(json, r#"{"name":"Alice","tags":["a","b"]}"#);
}

#[test]
fn null_serializes_to_json_null() {
    let json = serde_json::to_string(&Node::Null).unwrap();
    assert_eq!(json, "null");
}
