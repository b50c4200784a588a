//! Loading node trees from YAML documents.
//!
//! Document syntax is the external parser's business: this module is a thin
//! pass-through over `yaml-rust2` that turns its parsed values into [`Node`]
//! trees. Anchors and aliases are resolved by the parser before we see them,
//! and parsed scalars are rendered back to literal text, since the decoders
//! interpret scalar text themselves.
//!
//! ## Examples
//!
//! ```rust
//! use node_decode::yaml::from_str;
//! use node_decode::decode;
//! use indexmap::IndexMap;
//!
//! let root = from_str("a: [1, 2]\nb: [3]").unwrap();
//! let map: IndexMap<String, Vec<u32>> = decode(&root).unwrap();
//! assert_eq!(map["a"], vec![1, 2]);
//! ```

use crate::{Error, Node, NodeMap};
use std::io;
use std::path::Path;
use yaml_rust2::{Yaml, YamlLoader};

/// Parses a YAML document into a node tree.
///
/// Empty input yields a Null root. Multi-document input yields the first
/// document.
///
/// # Errors
///
/// Returns [`Error::Syntax`] for malformed YAML, for duplicate mapping
/// keys (rejected by the parser), for non-scalar mapping keys, and for
/// unresolvable aliases.
pub fn from_str(text: &str) -> Result<Node, Error> {
    let documents = YamlLoader::load_from_str(text).map_err(Error::syntax)?;
    match documents.first() {
        Some(document) => node_from_yaml(document),
        None => Ok(Node::Null),
    }
}

/// Parses a YAML document from a reader into a node tree.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise as [`from_str`].
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Node, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(Error::io)?;
    from_str(&text)
}

/// Reads a YAML file into a node tree.
///
/// # Errors
///
/// Returns [`Error::Io`] naming the path if the file cannot be read,
/// otherwise as [`from_str`].
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Node, Error> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|error| Error::Io(format!("failed to read {}: {error}", path.display())))?;
    from_str(&text)
}

fn node_from_yaml(yaml: &Yaml) -> Result<Node, Error> {
    match yaml {
        Yaml::Null => Ok(Node::Null),
        // Real keeps the raw document text; the other scalar variants were
        // already interpreted by the parser, so render them back.
        Yaml::Real(text) => Ok(Node::Scalar(text.clone())),
        Yaml::Integer(value) => Ok(Node::Scalar(value.to_string())),
        Yaml::Boolean(value) => Ok(Node::Scalar(value.to_string())),
        Yaml::String(text) => Ok(Node::Scalar(text.clone())),
        Yaml::Array(items) => {
            let children = items
                .iter()
                .map(node_from_yaml)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Node::Sequence(children))
        }
        Yaml::Hash(entries) => {
            let mut map = NodeMap::with_capacity(entries.len());
            for (key, value) in entries.iter() {
                let key = scalar_key(key)
                    .ok_or_else(|| Error::syntax("mapping keys must be scalars"))?;
                map.insert(key, node_from_yaml(value)?);
            }
            Ok(Node::Mapping(map))
        }
        Yaml::Alias(_) | Yaml::BadValue => Err(Error::syntax("unresolvable yaml value")),
    }
}

fn scalar_key(yaml: &Yaml) -> Option<String> {
    match yaml {
        Yaml::Real(text) => Some(text.clone()),
        Yaml::Integer(value) => Some(value.to_string()),
        Yaml::Boolean(value) => Some(value.to_string()),
        Yaml::String(text) => Some(text.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node;

    #[test]
    fn parses_mappings_in_document_order() {
        let root = from_str("b: 2\na: 1").unwrap();
        assert_eq!(root, node!({"b": 2, "a": 1}));
    }

    #[test]
    fn scalars_keep_their_text() {
        let root = from_str("[42, \"42\", 2.5, true, ~]").unwrap();
        assert_eq!(root, node!(["42", "42", "2.5", "true", null]));
    }

    #[test]
    fn empty_input_is_null() {
        assert_eq!(from_str("").unwrap(), Node::Null);
    }

    #[test]
    fn multi_document_input_takes_the_first() {
        let root = from_str("a: 1\n---\nb: 2").unwrap();
        assert_eq!(root, node!({"a": 1}));
    }

    #[test]
    fn aliases_are_resolved_by_the_parser() {
        let root = from_str("a: &anchor 1\nb: *anchor").unwrap();
        assert_eq!(root, node!({"a": 1, "b": 1}));
    }

    #[test]
    fn non_scalar_keys_are_rejected() {
        let error = from_str("[1, 2]: x").unwrap_err();
        assert!(matches!(error, Error::Syntax(_)));
    }

    #[test]
    fn duplicate_mapping_keys_are_a_syntax_error() {
        let error = from_str("host: first\nhost: second").unwrap_err();
        match error {
            Error::Syntax(message) => assert!(message.contains("duplicated key")),
            other => panic!("expected Syntax error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_yaml_is_a_syntax_error() {
        let error = from_str("a: [1, 2").unwrap_err();
        assert!(matches!(error, Error::Syntax(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = read_file("/definitely/not/here.yaml").unwrap_err();
        match error {
            Error::Io(message) => assert!(message.contains("/definitely/not/here.yaml")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
