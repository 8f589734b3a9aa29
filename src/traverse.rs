use std::fmt::{self, Write};
use std::iter::FusedIterator;

use crate::node::{Key, Link, Node};

/// Writes one line per node in ascending key order: the node's depth in
/// spaces, then ` key [height]`.
pub fn write_inorder<V, W: Write>(node: Option<&Node<V>>, out: &mut W) -> fmt::Result {
    write_inorder_at(node, 0, out)
}

fn write_inorder_at<V, W: Write>(node: Option<&Node<V>>, depth: usize, out: &mut W) -> fmt::Result {
    if let Some(node) = node {
        write_inorder_at(node.left(), depth + 1, out)?;
        writeln!(out, "{:depth$} {} [{}]", "", node.key, node.height)?;
        write_inorder_at(node.right(), depth + 1, out)?;
    }
    Ok(())
}

/// Returns the listing produced by [`write_inorder`].
pub fn inorder_listing<V>(node: Option<&Node<V>>) -> String {
    let mut listing = String::new();
    // Writing to a String never fails.
    let _ = write_inorder(node, &mut listing);
    listing
}

/// Releases every node of the tree, children before parents.
pub fn release<V>(link: Link<V>) {
    if let Some(mut node) = link {
        release(node.left.take());
        release(node.right.take());
    }
}

/// An iterator over the entries of a tree in ascending key order.
pub struct Iter<'a, V> {
    stack: Vec<&'a Node<V>>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(root: Option<&'a Node<V>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<V>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some((node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}
