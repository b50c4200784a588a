//! Shape validators.
//!
//! Every decoder starts by asserting the coarse kind of its input node (and,
//! where the target type fixes it, the exact element count). The validators
//! here perform that check and hand back the node's payload on success, so a
//! decoder never has to match on [`Node`] itself.
//!
//! Failures are plain [`ShapeError`] values without a trace; the calling
//! decoder converts them into a [`DecodeError`](crate::DecodeError) at the
//! point of use.

use crate::error::ShapeError;
use crate::{Kind, Node, NodeMap};

/// Succeeds with the literal text iff the node is a scalar.
pub fn expect_scalar(node: &Node) -> Result<&str, ShapeError> {
    node.as_scalar().ok_or(ShapeError::Kind {
        expected: Kind::Scalar,
        found: node.kind(),
    })
}

/// Succeeds with the child nodes iff the node is a sequence.
pub fn expect_sequence(node: &Node) -> Result<&[Node], ShapeError> {
    node.as_sequence().ok_or(ShapeError::Kind {
        expected: Kind::Sequence,
        found: node.kind(),
    })
}

/// Succeeds iff the node is a sequence with exactly `len` children.
pub fn expect_sequence_len(node: &Node, len: usize) -> Result<&[Node], ShapeError> {
    let children = expect_sequence(node)?;
    if children.len() != len {
        return Err(ShapeError::Len {
            expected: len,
            found: children.len(),
        });
    }
    Ok(children)
}

/// Succeeds with the entry map iff the node is a mapping.
pub fn expect_mapping(node: &Node) -> Result<&NodeMap, ShapeError> {
    node.as_mapping().ok_or(ShapeError::Kind {
        expected: Kind::Mapping,
        found: node.kind(),
    })
}

/// Succeeds iff the node is a mapping with exactly `len` entries.
pub fn expect_mapping_len(node: &Node, len: usize) -> Result<&NodeMap, ShapeError> {
    let map = expect_mapping(node)?;
    if map.len() != len {
        return Err(ShapeError::Len {
            expected: len,
            found: map.len(),
        });
    }
    Ok(map)
}
