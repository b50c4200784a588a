//! The [`node!`](crate::node!) construction macro.

/// Builds a [`Node`](crate::Node) tree from a JSON-like literal.
///
/// Scalars go through `Node::from`, so numbers and booleans become scalar
/// nodes carrying their canonical text.
///
/// # Examples
///
/// ```rust
/// use node_decode::{node, Node};
///
/// let tree = node!({
///     "name": "Alice",
///     "scores": [1, 2, 3],
///     "nickname": null
/// });
///
/// assert_eq!(tree.get("name"), Some(&Node::from("Alice")));
/// assert!(tree.get("nickname").unwrap().is_null());
/// ```
#[macro_export]
macro_rules! node {
    // Null
    (null) => {
        $crate::Node::Null
    };

    // Empty sequence
    ([]) => {
        $crate::Node::Sequence(vec![])
    };

    // Non-empty sequence
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Node::Sequence(vec![$($crate::node!($elem)),*])
    };

    // Empty mapping
    ({}) => {
        $crate::Node::Mapping($crate::NodeMap::new())
    };

    // Non-empty mapping
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::NodeMap::new();
        $(
            map.insert($key.to_string(), $crate::node!($value));
        )*
        $crate::Node::Mapping(map)
    }};

    // Any scalar expression
    ($other:expr) => {
        $crate::Node::from($other)
    };
}
