//! Error types for node decoding.
//!
//! Decoding failures are reported through [`DecodeError`], which carries a
//! message and a *trace*: the path through the node tree from the failure
//! site back up to the root. Every composite decoder appends one trace entry
//! describing its own position (a sequence index or a mapping key) as the
//! error propagates outward, so the caller receives the complete path in a
//! single value.
//!
//! ## Error Categories
//!
//! - **Shape mismatches**: the node kind differs from what a decoder
//!   required ([`ShapeError::Kind`])
//! - **Size mismatches**: a sequence length differs from an exact required
//!   count ([`ShapeError::Len`])
//! - **Missing keys**: a required mapping key is absent
//! - **Scalar failures**: a scalar's text is malformed or out of range for
//!   the target type
//! - **I/O and syntax failures**: file loading and document parsing, raised
//!   by the yaml front end as [`Error::Io`] and [`Error::Syntax`]
//!
//! ## Examples
//!
//! ```rust
//! use node_decode::{decode, node};
//! use indexmap::IndexMap;
//!
//! let root = node!({"a": [1, "x"]});
//! let err = decode::<IndexMap<String, Vec<i64>>>(&root).unwrap_err();
//!
//! // The trace reads deepest-first: the failing element, then its parent.
//! assert_eq!(err.trace[0].name, "1");
//! assert_eq!(err.trace[1].name, "a");
//! ```

use crate::Kind;
use std::fmt;
use thiserror::Error;

/// Top-level error for loading and decoding documents.
///
/// [`DecodeError`] is the interesting case; `Io` and `Syntax` come from the
/// document-loading front end and are passed through uninterpreted.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while reading a document from disk
    #[error("IO error: {0}")]
    Io(String),

    /// Document syntax error from the external parser
    #[error("syntax error: {0}")]
    Syntax(String),

    /// Typed decoding failure, with a trace through the node tree
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl Error {
    /// Creates an I/O error for file reading failures.
    pub fn io<T: fmt::Display>(msg: T) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a syntax error for malformed document text.
    pub fn syntax<T: fmt::Display>(msg: T) -> Self {
        Error::Syntax(msg.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A shape or size mismatch detected by the validators in [`crate::expect`].
///
/// Carries no trace; decoders convert it into a [`DecodeError`] at the point
/// of use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Node kind differs from what the decoder required.
    #[error("unexpected node type, expected {expected}, got {found}")]
    Kind { expected: Kind, found: Kind },

    /// Sequence or mapping length differs from an exact required count.
    #[error("wrong number of elements, expected {expected}, got {found}")]
    Len { expected: usize, found: usize },
}

/// One step of a path through the node tree, used as error context.
///
/// `name` is a sequence index rendered as text, or a mapping key.
/// `user_type` is a caller-supplied type label (empty unless a field
/// description provided one). `kind` is the node kind observed at that step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDescription {
    pub name: String,
    pub user_type: String,
    pub kind: Kind,
}

impl NodeDescription {
    /// Creates a description with an empty `user_type`.
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        NodeDescription {
            name: name.into(),
            user_type: String::new(),
            kind,
        }
    }

    /// Creates a description carrying a type label.
    pub fn typed(name: impl Into<String>, user_type: impl Into<String>, kind: Kind) -> Self {
        NodeDescription {
            name: name.into(),
            user_type: user_type.into(),
            kind,
        }
    }
}

impl fmt::Display for NodeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.user_type.is_empty() {
            write!(f, "{} ({})", self.name, self.kind)
        } else {
            write!(f, "{}: {} ({})", self.name, self.user_type, self.kind)
        }
    }
}

/// An error that occurred while decoding a node tree into a typed value.
///
/// The trace is ordered innermost-first: the first entry is the deepest node
/// at which the failure was detected, the last entry is closest to the root.
/// Enclosing decoders append their own entry with [`DecodeError::push_trace`]
/// or [`DecodeError::append_trace`] as the error propagates outward; the
/// error is otherwise immutable once constructed.
///
/// # Examples
///
/// ```rust
/// use node_decode::{decode, node};
///
/// let err = decode::<Vec<i32>>(&node!(["1", "two"])).unwrap_err();
/// assert!(err.message.contains("two"));
/// assert_eq!(err.trace[0].name, "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// A human readable description of the failure.
    pub message: String,

    /// The path through the node tree, deepest node first.
    pub trace: Vec<NodeDescription>,
}

impl DecodeError {
    /// Creates a new decode error with an empty trace.
    pub fn new(message: impl Into<String>) -> Self {
        DecodeError {
            message: message.into(),
            trace: Vec::new(),
        }
    }

    /// Creates the error for a required mapping key that is absent.
    pub fn missing_key(key: &str) -> Self {
        DecodeError::new(format!("no such key: {key}"))
    }

    /// Appends a node description to the trace, in place.
    pub fn push_trace(&mut self, description: NodeDescription) -> &mut Self {
        self.trace.push(description);
        self
    }

    /// Appends a node description to the trace, by value.
    ///
    /// The owned twin of [`DecodeError::push_trace`], for use in return
    /// position where the error is not reused.
    #[must_use]
    pub fn append_trace(mut self, description: NodeDescription) -> Self {
        self.trace.push(description);
        self
    }

    /// Formats the node trace as a string, deepest node first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use node_decode::{decode, node};
    /// use indexmap::IndexMap;
    ///
    /// let err = decode::<IndexMap<String, Vec<i64>>>(&node!({"a": [1, "x"]})).unwrap_err();
    /// assert_eq!(err.format_trace(), "1 (scalar) -> a (sequence)");
    /// ```
    #[must_use]
    pub fn format_trace(&self) -> String {
        let steps: Vec<String> = self.trace.iter().map(ToString::to_string).collect();
        steps.join(" -> ")
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.trace.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} at {}", self.message, self.format_trace())
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<ShapeError> for DecodeError {
    fn from(error: ShapeError) -> Self {
        DecodeError::new(error.to_string())
    }
}
