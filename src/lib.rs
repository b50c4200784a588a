//! # node_decode
//!
//! Decode tree-structured document nodes into typed Rust values, with errors
//! that name exactly where in the tree the failure occurred.
//!
//! A [`Node`] is one of four kinds (null, scalar, sequence, or string-keyed
//! mapping) produced by an external parser (the bundled YAML front end in
//! [`yaml`], or your own via [`Node`]'s constructors). The [`Decode`] trait
//! maps each target type to its conversion routine at compile time; the
//! composite impls recurse through dispatch for their element types, so any
//! nesting of arrays, sequences, maps and scalars decodes with one call.
//!
//! ## Key Features
//!
//! - **Compile-time dispatch**: a type without a `Decode` impl is a build
//!   error, never a runtime surprise; composites require decodable elements
//!   through their trait bounds
//! - **Path-traced errors**: every failure carries the chain of indices and
//!   keys from the failing node back to the root, deepest first
//! - **Fail-fast**: the first failure in a subtree is the one reported; no
//!   partial values, no error aggregation
//! - **Strict scalars**: numeric decoding rejects malformed and out-of-range
//!   literals instead of truncating or wrapping
//!
//! ## Quick Start
//!
//! ```rust
//! use node_decode::{decode, yaml};
//! use indexmap::IndexMap;
//!
//! let root = yaml::from_str("\
//! thresholds:
//!   low: [1, 2, 3]
//!   high: [10, 20, 30]
//! ").unwrap();
//!
//! let thresholds: IndexMap<String, Vec<u32>> =
//!     decode(root.get("thresholds").unwrap()).unwrap();
//! assert_eq!(thresholds["high"], vec![10, 20, 30]);
//! ```
//!
//! ## Error Traces
//!
//! ```rust
//! use node_decode::{decode, node};
//! use indexmap::IndexMap;
//!
//! let root = node!({"a": [1, "x"]});
//! let err = decode::<IndexMap<String, Vec<i64>>>(&root).unwrap_err();
//!
//! assert_eq!(
//!     err.to_string(),
//!     "failed to parse \"x\" as i64 at 1 (scalar) -> a (sequence)"
//! );
//! ```
//!
//! ## Structs
//!
//! Implement [`Decode`] by hand with [`decode_child`] and [`set_if_exists`],
//! or describe the fields declaratively with [`decode_struct`]:
//!
//! ```rust
//! use node_decode::{decode_struct, node, Field};
//!
//! let config = node!({"host": "example.com", "port": 9000});
//!
//! let mut host = String::new();
//! let mut port: u16 = 8080;
//!
//! decode_struct(&config, &mut [
//!     Field::required("host", &mut host),
//!     Field::optional("port", &mut port),
//! ]).unwrap();
//!
//! assert_eq!((host.as_str(), port), ("example.com", 9000));
//! ```
//!
//! ## Scope
//!
//! Document syntax, anchor/alias resolution and schema validation beyond
//! shape and size belong to the external parser. The node tree is read-only
//! during decoding and decoding is a bounded synchronous descent, so one
//! parsed tree may be decoded concurrently from multiple threads.

pub mod de;
pub mod error;
pub mod expect;
pub mod fields;
pub mod macros;
pub mod map;
pub mod node;
pub mod ser;
pub mod yaml;

pub use de::{decode, decode_child, set_if_exists, Decode};
pub use error::{DecodeError, Error, NodeDescription, Result, ShapeError};
pub use fields::{decode_struct, Field};
pub use map::NodeMap;
pub use node::{Kind, Node};
pub use ser::{encode, Encode};
pub use yaml::{from_reader, from_str, read_file};
