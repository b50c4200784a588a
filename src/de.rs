//! Typed decoding of document nodes.
//!
//! This module provides the [`Decode`] trait, the dispatch point that maps
//! a target type to its conversion routine, together with implementations
//! for the primitive scalar types and the standard composites. Dispatch is
//! resolved at compile time: asking for a type without a `Decode` impl is a
//! build error, and composite impls are bounded on `T: Decode`, so a
//! `Vec<T>` over a non-decodable element type is rejected at compile time
//! as well.
//!
//! Decoding is fail-fast: the first failure in a subtree is returned
//! immediately, with one trace entry appended per enclosing composite so the
//! error names the full path from the failure site back to the root.
//!
//! ## Examples
//!
//! ```rust
//! use node_decode::{decode, node};
//!
//! let numbers: Vec<u32> = decode(&node!([1, 2, 3])).unwrap();
//! assert_eq!(numbers, vec![1, 2, 3]);
//!
//! let err = decode::<Vec<u32>>(&node!([1, "x"])).unwrap_err();
//! assert_eq!(err.format_trace(), "1 (scalar)");
//! ```

use crate::error::{DecodeError, NodeDescription};
use crate::expect::{expect_mapping, expect_scalar, expect_sequence, expect_sequence_len};
use crate::Node;
use indexmap::IndexMap;

/// A type that can be decoded from a document node.
///
/// Implementations exist for the primitive scalar types (`String`, `bool`,
/// `char`, the integer widths, `f32`/`f64`), for `[T; N]`, `Vec<T>`,
/// `Option<T>` and `IndexMap<String, T>` over any `T: Decode`, and for
/// [`Node`] itself (identity). Implement it for your own types to make them
/// available to the composite decoders:
///
/// ```rust
/// use node_decode::{decode, decode_child, node, Decode, DecodeError, Node};
///
/// struct Endpoint {
///     host: String,
///     port: u16,
/// }
///
/// impl Decode for Endpoint {
///     fn decode(node: &Node) -> Result<Self, DecodeError> {
///         Ok(Endpoint {
///             host: decode_child(node, "host")?,
///             port: decode_child(node, "port")?,
///         })
///     }
/// }
///
/// let endpoints: Vec<Endpoint> = decode(&node!([
///     {"host": "localhost", "port": 8080}
/// ])).unwrap();
/// assert_eq!(endpoints[0].port, 8080);
/// ```
pub trait Decode: Sized {
    /// Decodes a value of this type from a node.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] on the first shape, size or scalar failure
    /// anywhere in the subtree.
    fn decode(node: &Node) -> Result<Self, DecodeError>;
}

/// Decodes a node into any `T: Decode`.
///
/// Free-function entry point for turbofish call sites; equivalent to
/// `T::decode(node)`.
///
/// # Examples
///
/// ```rust
/// use node_decode::{decode, node};
///
/// assert_eq!(decode::<i32>(&node!(42)), Ok(42));
/// ```
///
/// # Errors
///
/// Returns a [`DecodeError`] describing the first failure and its path.
pub fn decode<T: Decode>(node: &Node) -> Result<T, DecodeError> {
    T::decode(node)
}

fn scalar_error(text: &str, target: &str) -> DecodeError {
    DecodeError::new(format!("failed to parse \"{text}\" as {target}"))
}

macro_rules! impl_decode_via_parse {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Decode for $ty {
                fn decode(node: &Node) -> Result<Self, DecodeError> {
                    let text = expect_scalar(node)?;
                    text.parse()
                        .map_err(|_| scalar_error(text, stringify!($ty)))
                }
            }
        )*
    };
}

// str::parse rejects both malformed syntax and out-of-range magnitudes, so
// no width ever truncates or wraps.
impl_decode_via_parse!(
    char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

macro_rules! impl_decode_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Decode for $ty {
                fn decode(node: &Node) -> Result<Self, DecodeError> {
                    let text = expect_scalar(node)?;
                    let value: $ty = text
                        .parse()
                        .map_err(|_| scalar_error(text, stringify!($ty)))?;
                    // parse saturates overflowing literals to infinity;
                    // only an explicit infinity spelling may stay infinite.
                    if value.is_infinite() && text.contains(|c: char| c.is_ascii_digit()) {
                        return Err(scalar_error(text, stringify!($ty)));
                    }
                    Ok(value)
                }
            }
        )*
    };
}

impl_decode_float!(f32, f64);

impl Decode for String {
    fn decode(node: &Node) -> Result<Self, DecodeError> {
        Ok(expect_scalar(node)?.to_string())
    }
}

impl Decode for bool {
    fn decode(node: &Node) -> Result<Self, DecodeError> {
        // YAML 1.2 core-schema spellings.
        match expect_scalar(node)? {
            "true" | "True" | "TRUE" => Ok(true),
            "false" | "False" | "FALSE" => Ok(false),
            text => Err(scalar_error(text, "bool")),
        }
    }
}

impl Decode for Node {
    fn decode(node: &Node) -> Result<Self, DecodeError> {
        Ok(node.clone())
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(node: &Node) -> Result<Self, DecodeError> {
        if node.is_null() {
            return Ok(None);
        }
        T::decode(node).map(Some)
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode(node: &Node) -> Result<Self, DecodeError> {
        let children = expect_sequence_len(node, N)?;

        let mut elements = Vec::with_capacity(N);
        for (index, child) in children.iter().enumerate() {
            match T::decode(child) {
                Ok(element) => elements.push(element),
                Err(error) => {
                    return Err(
                        error.append_trace(NodeDescription::new(index.to_string(), child.kind()))
                    )
                }
            }
        }

        // Length was validated against N above.
        Ok(elements.try_into().unwrap_or_else(|_| unreachable!()))
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(node: &Node) -> Result<Self, DecodeError> {
        // Null means the empty collection, so an omitted list decodes
        // without a document-side `[]`.
        if node.is_null() {
            return Ok(Vec::new());
        }
        let children = expect_sequence(node)?;

        let mut result = Vec::with_capacity(children.len());
        for (index, child) in children.iter().enumerate() {
            match T::decode(child) {
                Ok(element) => result.push(element),
                Err(error) => {
                    return Err(
                        error.append_trace(NodeDescription::new(index.to_string(), child.kind()))
                    )
                }
            }
        }

        Ok(result)
    }
}

impl<T: Decode> Decode for IndexMap<String, T> {
    fn decode(node: &Node) -> Result<Self, DecodeError> {
        let map = expect_mapping(node)?;

        let mut result = IndexMap::with_capacity(map.len());
        for (key, value) in map {
            match T::decode(value) {
                Ok(element) => {
                    result.insert(key.clone(), element);
                }
                Err(error) => {
                    return Err(error.append_trace(NodeDescription::new(key.as_str(), value.kind())))
                }
            }
        }

        Ok(result)
    }
}

/// Decodes the value under `key` of a mapping node.
///
/// # Examples
///
/// ```rust
/// use node_decode::{decode_child, node};
///
/// let config = node!({"port": 8080});
/// assert_eq!(decode_child::<u16>(&config, "port"), Ok(8080));
/// assert!(decode_child::<u16>(&config, "host").is_err());
/// ```
///
/// # Errors
///
/// Fails if the node is not a mapping, if the key is absent (`no such key`),
/// or if the value fails to decode. In the last case the error gains a
/// trace entry naming the key.
pub fn decode_child<T: Decode>(node: &Node, key: &str) -> Result<T, DecodeError> {
    let map = expect_mapping(node)?;
    let child = map.get(key).ok_or_else(|| DecodeError::missing_key(key))?;
    T::decode(child).map_err(|error| error.append_trace(NodeDescription::new(key, child.kind())))
}

/// Decodes the value under `key` into `output`, if the key exists.
///
/// An absent key (or a non-mapping node) leaves `output` untouched, which
/// makes this the helper for optional fields whose default was assigned
/// beforehand. This is the one sanctioned recovery from a lookup failure;
/// a present key whose value fails to decode still propagates the error.
///
/// # Examples
///
/// ```rust
/// use node_decode::{node, set_if_exists};
///
/// let config = node!({"port": 9000});
/// let mut port: u16 = 8080;
/// let mut host = "localhost".to_string();
///
/// set_if_exists(&mut port, &config, "port").unwrap();
/// set_if_exists(&mut host, &config, "host").unwrap();
///
/// assert_eq!(port, 9000);
/// assert_eq!(host, "localhost");
/// ```
///
/// # Errors
///
/// Fails only if the key is present and its value fails to decode.
pub fn set_if_exists<T: Decode>(
    output: &mut T,
    node: &Node,
    key: &str,
) -> Result<(), DecodeError> {
    let Some(child) = node.get(key) else {
        return Ok(());
    };
    *output = T::decode(child)
        .map_err(|error| error.append_trace(NodeDescription::new(key, child.kind())))?;
    Ok(())
}
