use std::cmp::Ordering;
use std::mem;

use crate::balance::{rotation, update_height};
use crate::node::{create_node, Key, Link, Node};

/// Returns the node holding the smallest key greater than `node.key`
/// within its right subtree, or `None` if `node` has no right child.
pub fn successor<V>(node: &Node<V>) -> Option<&Node<V>> {
    node.right().map(leftmost)
}

pub(crate) fn leftmost<V>(mut node: &Node<V>) -> &Node<V> {
    while let Some(left) = node.left() {
        node = left;
    }
    node
}

pub(crate) fn rightmost<V>(mut node: &Node<V>) -> &Node<V> {
    while let Some(right) = node.right() {
        node = right;
    }
    node
}

/// Looks up the node holding `key`.
pub fn search<V>(node: Option<&Node<V>>, key: Key) -> Option<&Node<V>> {
    let node = node?;
    match key.cmp(&node.key) {
        Ordering::Equal => Some(node),
        Ordering::Less => search(node.left(), key),
        Ordering::Greater => search(node.right(), key),
    }
}

pub(crate) fn search_mut<V>(node: Option<&mut Node<V>>, key: Key) -> Option<&mut Node<V>> {
    let node = node?;
    match key.cmp(&node.key) {
        Ordering::Equal => Some(node),
        Ordering::Less => search_mut(node.left.as_deref_mut(), key),
        Ordering::Greater => search_mut(node.right.as_deref_mut(), key),
    }
}

/// Inserts `(key, value)` into the subtree and returns its new root.
///
/// An existing key keeps its value; the passed value is dropped.
#[must_use = "the subtree root may have changed"]
pub fn insert<V>(node: Link<V>, key: Key, value: V) -> Box<Node<V>> {
    insert_entry(node, key, value).0
}

/// Removes `key` from the subtree and returns its new root.
/// Removing an absent key leaves the subtree unchanged.
#[must_use = "the subtree root may have changed"]
pub fn delete<V>(node: Link<V>, key: Key) -> Link<V> {
    remove_entry(node, key).0
}

/// Same as [`insert`], but hands a rejected value back to the caller.
pub(crate) fn insert_entry<V>(node: Link<V>, key: Key, value: V) -> (Box<Node<V>>, Option<V>) {
    let mut node = match node {
        None => return (create_node(key, value), None),
        Some(node) => node,
    };
    let rejected = match key.cmp(&node.key) {
        Ordering::Equal => return (node, Some(value)),
        Ordering::Less => {
            let (left, rejected) = insert_entry(node.left.take(), key, value);
            node.left = Some(left);
            rejected
        }
        Ordering::Greater => {
            let (right, rejected) = insert_entry(node.right.take(), key, value);
            node.right = Some(right);
            rejected
        }
    };
    (retrace(node), rejected)
}

/// Same as [`delete`], but also returns the removed value.
pub(crate) fn remove_entry<V>(node: Link<V>, key: Key) -> (Link<V>, Option<V>) {
    let mut node = match node {
        None => return (None, None),
        Some(node) => node,
    };
    let removed = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, removed) = remove_entry(node.left.take(), key);
            node.left = left;
            removed
        }
        Ordering::Greater => {
            let (right, removed) = remove_entry(node.right.take(), key);
            node.right = right;
            removed
        }
        Ordering::Equal => {
            if node.left.is_none() {
                let Node { value, right, .. } = *node;
                return (right, Some(value));
            }
            let successor_key = match successor(&node) {
                None => {
                    let Node { value, left, .. } = *node;
                    return (left, Some(value));
                }
                Some(successor) => successor.key,
            };

            // The successor has no left child, so removing it below unlinks it.
            let (right, successor_value) = remove_entry(node.right.take(), successor_key);
            debug_assert!(successor_value.is_some());
            node.right = right;
            node.key = successor_key;
            successor_value.map(|value| mem::replace(&mut node.value, value))
        }
    };
    (Some(retrace(node)), removed)
}

// Runs on the way back up from a modified child.
fn retrace<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    update_height(&mut node);
    rotation(node)
}
