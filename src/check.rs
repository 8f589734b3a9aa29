//! Structural validation of a tree.

use std::cmp;

use thiserror::Error;

use crate::balance::balance_factor;
use crate::node::{Key, Node};

/// The first broken invariant found while validating a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("key {key} is on the wrong side of ancestor key {ancestor}")]
    Order { key: Key, ancestor: Key },
    #[error("key {key} caches height {cached}, actual height is {actual}")]
    Height {
        key: Key,
        cached: usize,
        actual: usize,
    },
    #[error("key {key} has balance factor {factor}")]
    Unbalanced { key: Key, factor: isize },
    #[error("tree holds {actual} nodes, {recorded} recorded")]
    Len { recorded: usize, actual: usize },
}

/// Checks ordering, cached heights and the AVL condition of every node.
/// Returns the number of nodes.
pub fn validate<V>(node: Option<&Node<V>>) -> Result<usize, InvariantViolation> {
    validate_within(node, None, None).map(|(count, _)| count)
}

// Returns (node count, height). Keys must lie strictly between the bounds.
fn validate_within<V>(
    node: Option<&Node<V>>,
    lower: Option<Key>,
    upper: Option<Key>,
) -> Result<(usize, usize), InvariantViolation> {
    let node = match node {
        None => return Ok((0, 0)),
        Some(node) => node,
    };
    if let Some(ancestor) = lower.filter(|&lower| node.key <= lower) {
        return Err(InvariantViolation::Order {
            key: node.key,
            ancestor,
        });
    }
    if let Some(ancestor) = upper.filter(|&upper| node.key >= upper) {
        return Err(InvariantViolation::Order {
            key: node.key,
            ancestor,
        });
    }

    let (left_count, left_height) = validate_within(node.left(), lower, Some(node.key))?;
    let (right_count, right_height) = validate_within(node.right(), Some(node.key), upper)?;

    let actual = 1 + cmp::max(left_height, right_height);
    if node.height != actual {
        return Err(InvariantViolation::Height {
            key: node.key,
            cached: node.height,
            actual,
        });
    }

    let factor = balance_factor(Some(node));
    if !(-1..=1).contains(&factor) {
        return Err(InvariantViolation::Unbalanced {
            key: node.key,
            factor,
        });
    }

    Ok((1 + left_count + right_count, actual))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::{height, update_height};
    use crate::node::create_node;

    #[test]
    fn test_valid() {
        assert_eq!(validate::<()>(None), Ok(0));

        let mut root = create_node(2, ());
        root.left = Some(create_node(1, ()));
        root.right = Some(create_node(3, ()));
        update_height(&mut root);
        assert_eq!(validate(Some(&*root)), Ok(3));
        assert_eq!(height(Some(&*root)), root.height());
    }

    #[test]
    fn test_order_violation() {
        let mut root = create_node(5, ());
        let mut left = create_node(3, ());
        left.right = Some(create_node(6, ()));
        update_height(&mut left);
        root.left = Some(left);
        root.right = Some(create_node(8, ()));
        update_height(&mut root);
        assert_eq!(
            validate(Some(&*root)),
            Err(InvariantViolation::Order {
                key: 6,
                ancestor: 5
            })
        );
    }

    #[test]
    fn test_height_violation() {
        let mut root = create_node(2, ());
        root.left = Some(create_node(1, ()));
        assert_eq!(
            validate(Some(&*root)),
            Err(InvariantViolation::Height {
                key: 2,
                cached: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn test_unbalanced() {
        let mut middle = create_node(2, ());
        middle.right = Some(create_node(3, ()));
        update_height(&mut middle);
        let mut root = create_node(1, ());
        root.right = Some(middle);
        update_height(&mut root);
        let err = validate(Some(&*root)).unwrap_err();
        assert_eq!(err, InvariantViolation::Unbalanced { key: 1, factor: -2 });
        assert_eq!(err.to_string(), "key 1 has balance factor -2");
    }
}
