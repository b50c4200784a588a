//! Encoding typed values back into document nodes.
//!
//! [`Encode`] is the symmetric capability to [`Decode`](crate::Decode):
//! every type the decoders cover can also be rendered back into a [`Node`]
//! tree with canonical scalar literals, so `decode(encode(x)) == x` for the
//! primitives and the composites over them. Encoding is infallible: any
//! value of an encodable type has a node representation.
//!
//! Rendering a node tree back to document *text* is out of scope; nodes are
//! the exchange format with the external parser.
//!
//! ## Examples
//!
//! ```rust
//! use node_decode::{decode, encode, Node};
//!
//! let node = encode(&[1u8, 2, 3]);
//! assert_eq!(decode::<[u8; 3]>(&node), Ok([1, 2, 3]));
//! ```

use crate::{Node, NodeMap};
use indexmap::IndexMap;

/// A type that can be rendered as a document node.
pub trait Encode {
    /// Builds the node representation of this value.
    fn encode(&self) -> Node;
}

/// Encodes any `T: Encode` into a node.
///
/// Free-function twin of [`Encode::encode`], matching [`decode`](crate::decode).
pub fn encode<T: Encode + ?Sized>(value: &T) -> Node {
    value.encode()
}

macro_rules! impl_encode_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Encode for $ty {
                fn encode(&self) -> Node {
                    Node::Scalar(self.to_string())
                }
            }
        )*
    };
}

impl_encode_via_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl Encode for String {
    fn encode(&self) -> Node {
        Node::Scalar(self.clone())
    }
}

impl Encode for str {
    fn encode(&self) -> Node {
        Node::Scalar(self.to_string())
    }
}

impl Encode for Node {
    fn encode(&self) -> Node {
        self.clone()
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self) -> Node {
        match self {
            Some(value) => value.encode(),
            None => Node::Null,
        }
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self) -> Node {
        Node::Sequence(self.iter().map(Encode::encode).collect())
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self) -> Node {
        Node::Sequence(self.iter().map(Encode::encode).collect())
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self) -> Node {
        self.as_slice().encode()
    }
}

impl<T: Encode> Encode for IndexMap<String, T> {
    fn encode(&self) -> Node {
        let mut map = NodeMap::with_capacity(self.len());
        for (key, value) in self {
            map.insert(key.clone(), value.encode());
        }
        Node::Mapping(map)
    }
}
