use std::cmp;

use crate::node::{link_height, Node};

/// Shape of a subtree with respect to the AVL condition.
///
/// `LeftHeavy`/`RightHeavy` need a single rotation, the zigzag cases need a
/// double rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Balance {
    Balanced,
    LeftHeavy,
    LeftZigzag,
    RightHeavy,
    RightZigzag,
}

/// Height of the subtree computed by walking it, 0 for the empty subtree.
///
/// This is O(n) and only meant as a reference for the cached heights.
pub fn height<V>(node: Option<&Node<V>>) -> usize {
    match node {
        None => 0,
        Some(node) => 1 + cmp::max(height(node.left()), height(node.right())),
    }
}

/// Recomputes the cached height from the cached heights of the children.
pub fn update_height<V>(node: &mut Node<V>) {
    node.height = 1 + cmp::max(link_height(&node.left), link_height(&node.right));
}

/// Left height minus right height, 0 for the empty subtree.
pub fn balance_factor<V>(node: Option<&Node<V>>) -> isize {
    match node {
        None => 0,
        Some(node) => link_height(&node.left) as isize - link_height(&node.right) as isize,
    }
}

/// Classifies the balance of a node whose children are already balanced.
/// A single insert or delete below never leaves a factor beyond +2 or -2.
pub fn classify<V>(node: &Node<V>) -> Balance {
    let factor = balance_factor(Some(node));
    debug_assert!(
        (-2..=2).contains(&factor),
        "balance factor {factor} out of range at key {}",
        node.key
    );
    if factor > 1 {
        if balance_factor(node.left()) < 0 {
            Balance::LeftZigzag
        } else {
            Balance::LeftHeavy
        }
    } else if factor < -1 {
        if balance_factor(node.right()) > 0 {
            Balance::RightZigzag
        } else {
            Balance::RightHeavy
        }
    } else {
        Balance::Balanced
    }
}

/// Rotates clockwise: the left child becomes the subtree root.
//
//       y        x
//      / \      / \
//     x   c -> a   y
//    / \          / \
//   a   b        b   c
pub fn right_rotation<V>(mut y: Box<Node<V>>) -> Box<Node<V>> {
    debug_assert!(y.left.is_some(), "right rotation at key {} without left child", y.key);
    match y.left.take() {
        Some(mut x) => {
            y.left = x.right.take();
            update_height(&mut y);
            x.right = Some(y);
            update_height(&mut x);
            x
        }
        None => y,
    }
}

/// Rotates counter-clockwise: the right child becomes the subtree root.
pub fn left_rotation<V>(mut y: Box<Node<V>>) -> Box<Node<V>> {
    debug_assert!(y.right.is_some(), "left rotation at key {} without right child", y.key);
    match y.right.take() {
        Some(mut x) => {
            y.right = x.left.take();
            update_height(&mut y);
            x.left = Some(y);
            update_height(&mut x);
            x
        }
        None => y,
    }
}

/// Right-rotates the right child, then left-rotates the node.
pub fn right_left_rotation<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    if let Some(right) = node.right.take() {
        node.right = Some(right_rotation(right));
    }
    left_rotation(node)
}

/// Left-rotates the left child, then right-rotates the node.
pub fn left_right_rotation<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    if let Some(left) = node.left.take() {
        node.left = Some(left_rotation(left));
    }
    right_rotation(node)
}

/// Restores the AVL condition at a node whose height is up to date.
/// Returns the new subtree root, which is `node` itself when already balanced.
pub fn rotation<V>(node: Box<Node<V>>) -> Box<Node<V>> {
    match classify(&node) {
        Balance::Balanced => node,
        Balance::LeftHeavy => right_rotation(node),
        Balance::LeftZigzag => left_right_rotation(node),
        Balance::RightHeavy => left_rotation(node),
        Balance::RightZigzag => right_left_rotation(node),
    }
}
