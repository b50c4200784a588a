//! The document node tree.
//!
//! This module provides [`Node`], the dynamically-typed tree value that
//! decoders consume. A node is one of four kinds: null, scalar (carrying its
//! literal text), sequence, or string-keyed mapping. Nodes are produced once,
//! by the yaml front end, the [`node!`](crate::node!) macro, or the `From`
//! impls below, and are treated as read-only by every decoder.
//!
//! ## Usage Patterns
//!
//! ### Creating Nodes
//!
//! ```rust
//! use node_decode::{node, Node};
//!
//! let null = Node::Null;
//! let scalar = Node::from(42);
//! let tree = node!({
//!     "name": "Alice",
//!     "tags": ["rust", "yaml"]
//! });
//! ```
//!
//! ### Inspecting Nodes
//!
//! ```rust
//! use node_decode::{Kind, Node};
//!
//! let node = Node::from(true);
//! assert_eq!(node.kind(), Kind::Scalar);
//! assert_eq!(node.as_scalar(), Some("true"));
//! ```

use crate::NodeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A tree-structured document value.
///
/// Scalars carry their literal text; numeric and boolean interpretation is
/// the decoders' job, so one scalar can decode as `u8`, `i64` or `String`
/// depending on the requested target type.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Node {
    #[default]
    Null,
    Scalar(String),
    Sequence(Vec<Node>),
    Mapping(NodeMap),
}

/// The coarse kind of a [`Node`], used in shape checks and error context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Null,
    Scalar,
    Sequence,
    Mapping,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Scalar => "scalar",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

impl Node {
    /// Returns the kind of this node.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Node::Null => Kind::Null,
            Node::Scalar(_) => Kind::Scalar,
            Node::Sequence(_) => Kind::Sequence,
            Node::Mapping(_) => Kind::Mapping,
        }
    }

    /// Returns `true` if this node is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Returns `true` if this node is a scalar.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    /// Returns `true` if this node is a sequence.
    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }

    /// Returns `true` if this node is a mapping.
    #[inline]
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    /// Returns the literal text if this node is a scalar.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the child nodes if this node is a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(children) => Some(children),
            _ => None,
        }
    }

    /// Returns the entry map if this node is a mapping.
    #[must_use]
    pub fn as_mapping(&self) -> Option<&NodeMap> {
        match self {
            Node::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a key if this node is a mapping.
    ///
    /// Returns `None` both for absent keys and for non-mapping nodes.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Mapping(map) => map.get(key),
            _ => None,
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::Scalar(value.to_string())
                }
            }
        )*
    };
}

impl_from_scalar!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(children: Vec<Node>) -> Self {
        Node::Sequence(children)
    }
}

impl From<NodeMap> for Node {
    fn from(map: NodeMap) -> Self {
        Node::Mapping(map)
    }
}

impl From<()> for Node {
    fn from((): ()) -> Self {
        Node::Null
    }
}

impl<T> From<Option<T>> for Node
where
    T: Into<Node>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Node::Null,
        }
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Scalar(text) => serializer.serialize_str(text),
            Node::Sequence(children) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(children.len()))?;
                for child in children {
                    seq.serialize_element(child)?;
                }
                seq.end()
            }
            Node::Mapping(map) => {
                use serde::ser::SerializeMap;
                let mut entries = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    entries.serialize_entry(key, value)?;
                }
                entries.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = Node;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any document node")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Node::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Node::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Node::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Node::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Node::from(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Node::from(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Node::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Node::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut children = Vec::new();
                while let Some(child) = seq.next_element()? {
                    children.push(child);
                }
                Ok(Node::Sequence(children))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut entries = NodeMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    entries.insert(key, value);
                }
                Ok(Node::Mapping(entries))
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(Node::Null.kind(), Kind::Null);
        assert_eq!(Node::from("x").kind(), Kind::Scalar);
        assert_eq!(Node::Sequence(vec![]).kind(), Kind::Sequence);
        assert_eq!(Node::Mapping(NodeMap::new()).kind(), Kind::Mapping);
    }

    #[test]
    fn scalar_from_keeps_literal_text() {
        assert_eq!(Node::from(42).as_scalar(), Some("42"));
        assert_eq!(Node::from(true).as_scalar(), Some("true"));
        assert_eq!(Node::from(2.5).as_scalar(), Some("2.5"));
    }

    #[test]
    fn get_on_non_mapping_is_none() {
        assert_eq!(Node::from(1).get("a"), None);
        assert_eq!(Node::Null.get("a"), None);
    }

    #[test]
    fn option_from() {
        assert_eq!(Node::from(None::<i32>), Node::Null);
        assert_eq!(Node::from(Some(7)), Node::from(7));
    }

    #[test]
    fn kind_display() {
        assert_eq!(Kind::Mapping.to_string(), "mapping");
        assert_eq!(Kind::Null.to_string(), "null");
    }
}
