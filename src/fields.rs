//! Declarative decoding of mapping nodes into struct fields.
//!
//! [`decode_struct`] walks a mapping's entries in document order and routes
//! each one to a [`Field`] description: a key, an optional display type
//! name, a required flag and a setter into the output struct. Unknown keys
//! are rejected, required keys must appear, and a failing field gains a
//! trace entry carrying its key and type name.
//!
//! This is the hand-rolled counterpart to a derive: it needs no macro and
//! works with defaults already assigned to the output.
//!
//! ## Examples
//!
//! ```rust
//! use node_decode::{decode_struct, node, Field};
//!
//! let config = node!({"host": "example.com", "retries": 5});
//!
//! let mut host = String::new();
//! let mut retries: u32 = 3;
//! let mut timeout: u32 = 30;
//!
//! decode_struct(&config, &mut [
//!     Field::required("host", &mut host),
//!     Field::optional("retries", &mut retries),
//!     Field::optional("timeout", &mut timeout),
//! ]).unwrap();
//!
//! assert_eq!(host, "example.com");
//! assert_eq!(retries, 5);
//! assert_eq!(timeout, 30);
//! ```

use crate::error::{DecodeError, NodeDescription};
use crate::expect::expect_mapping;
use crate::{Decode, Node};

/// Description of one struct field: a mapping key bound to a target.
///
/// The setter is type-erased so one `decode_struct` call can mix targets of
/// different types; dispatch still happens at compile time when the field is
/// constructed.
pub struct Field<'a> {
    key: String,
    type_name: String,
    required: bool,
    set: Box<dyn FnMut(&Node) -> Result<(), DecodeError> + 'a>,
}

impl<'a> Field<'a> {
    fn new<T: Decode>(key: impl Into<String>, target: &'a mut T, required: bool) -> Self {
        Field {
            key: key.into(),
            type_name: String::new(),
            required,
            set: Box::new(move |node| {
                *target = T::decode(node)?;
                Ok(())
            }),
        }
    }

    /// A field that must be present in the mapping.
    pub fn required<T: Decode>(key: impl Into<String>, target: &'a mut T) -> Self {
        Field::new(key, target, true)
    }

    /// A field that may be absent; the target keeps its prior value.
    pub fn optional<T: Decode>(key: impl Into<String>, target: &'a mut T) -> Self {
        Field::new(key, target, false)
    }

    /// Attaches a display type name, shown in error traces for this field.
    #[must_use]
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }
}

/// Decodes a mapping node into a set of field descriptions.
///
/// Entries are visited in document order. Decoding is fail-fast: the first
/// unknown key, failing field or (after the walk) missing required field is
/// returned immediately.
///
/// # Errors
///
/// - the node is not a mapping
/// - an entry's key matches no field: ``unknown property `key` ``
/// - a field's value fails to decode (the error gains a trace entry with the
///   field's key and type name)
/// - a required field never appeared: ``missing property `key` ``
pub fn decode_struct(node: &Node, fields: &mut [Field<'_>]) -> Result<(), DecodeError> {
    let map = expect_mapping(node)?;

    let mut seen = vec![false; fields.len()];

    for (key, value) in map {
        let Some(index) = fields.iter().position(|field| field.key == *key) else {
            return Err(DecodeError::new(format!("unknown property `{key}`")));
        };
        if let Err(error) = (fields[index].set)(value) {
            let field = &fields[index];
            return Err(error.append_trace(NodeDescription::typed(
                field.key.as_str(),
                field.type_name.as_str(),
                value.kind(),
            )));
        }
        seen[index] = true;
    }

    for (field, seen) in fields.iter().zip(seen) {
        if field.required && !seen {
            return Err(DecodeError::new(format!("missing property `{}`", field.key)));
        }
    }

    Ok(())
}
