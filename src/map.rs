use std::fmt;

use crate::check::{validate, InvariantViolation};
use crate::node::{Key, Link, Node};
use crate::traverse::{self, Iter};
use crate::tree;

/// An ordered map from integer keys to values, implemented with an AVL tree.
///
/// Inserting a key that is already present keeps the stored value.
///
/// ```
/// use int_avl::AvlTreeMap;
/// let mut map = AvlTreeMap::new();
/// map.insert(2, "two");
/// map.insert(1, "one");
/// assert!(!map.insert(1, "uno"));
/// assert_eq!(map.get(1), Some(&"one"));
/// assert_eq!(map.remove(1), Some("one"));
/// assert!(map.get(1).is_none());
/// ```
pub struct AvlTreeMap<V> {
    root: Link<V>,
    num_nodes: usize,
}

/// An iterator over the keys of a map.
pub struct Keys<'a, V> {
    iter: Iter<'a, V>,
}

/// An iterator over the values of a map.
pub struct Values<'a, V> {
    iter: Iter<'a, V>,
}

impl<V> AvlTreeMap<V> {
    /// Creates an empty map.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns true if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree, 0 if empty.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.height())
    }

    /// Returns the root node, if any.
    pub fn root(&self) -> Option<&Node<V>> {
        self.root.as_deref()
    }

    /// Clears the map, deallocating all memory.
    pub fn clear(&mut self) {
        traverse::release(self.root.take());
        self.num_nodes = 0;
    }

    /// Returns a reference to the value corresponding to the key.
    pub fn get(&self, key: Key) -> Option<&V> {
        tree::search(self.root(), key).map(Node::value)
    }

    /// Returns references to the key-value pair corresponding to the key.
    pub fn get_key_value(&self, key: Key) -> Option<(Key, &V)> {
        tree::search(self.root(), key).map(|node| (node.key(), node.value()))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: Key) -> Option<&mut V> {
        tree::search_mut(self.root.as_deref_mut(), key).map(Node::value_mut)
    }

    /// Returns true if the map contains a value for the key.
    pub fn contains_key(&self, key: Key) -> bool {
        tree::search(self.root(), key).is_some()
    }

    /// Returns the entry with the smallest key.
    pub fn first_key_value(&self) -> Option<(Key, &V)> {
        self.root()
            .map(tree::leftmost)
            .map(|node| (node.key(), node.value()))
    }

    /// Returns the entry with the largest key.
    pub fn last_key_value(&self) -> Option<(Key, &V)> {
        self.root()
            .map(tree::rightmost)
            .map(|node| (node.key(), node.value()))
    }

    /// Inserts a key-value pair into the map.
    /// Returns false, dropping `value`, if the key was already present.
    pub fn insert(&mut self, key: Key, value: V) -> bool {
        let (root, rejected) = tree::insert_entry(self.root.take(), key, value);
        self.root = Some(root);
        let inserted = rejected.is_none();
        if inserted {
            self.num_nodes += 1;
        }
        self.consistency_check();
        inserted
    }

    /// Removes a key from the map.
    /// Returns the value at the key if the key was previously in the map.
    pub fn remove(&mut self, key: Key) -> Option<V> {
        let (root, removed) = tree::remove_entry(self.root.take(), key);
        self.root = root;
        if removed.is_some() {
            debug_assert!(self.num_nodes >= 1);
            self.num_nodes -= 1;
        }
        self.consistency_check();
        removed
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self.root(), self.num_nodes)
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys { iter: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    pub fn values(&self) -> Values<'_, V> {
        Values { iter: self.iter() }
    }

    /// Lists every key with its subtree height, one line per node, indented
    /// by depth.
    pub fn inorder_listing(&self) -> String {
        traverse::inorder_listing(self.root())
    }

    /// Validates ordering, cached heights, balance and the element count.
    pub fn check_consistency(&self) -> Result<(), InvariantViolation> {
        let actual = validate(self.root())?;
        if actual != self.num_nodes {
            return Err(InvariantViolation::Len {
                recorded: self.num_nodes,
                actual,
            });
        }
        Ok(())
    }

    #[cfg(feature = "consistency_check")]
    fn consistency_check(&self) {
        if let Err(violation) = self.check_consistency() {
            panic!("AVL tree is inconsistent: {violation}");
        }
    }

    #[cfg(not(feature = "consistency_check"))]
    fn consistency_check(&self) {}
}

impl<V> Drop for AvlTreeMap<V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<V> Default for AvlTreeMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for AvlTreeMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> Extend<(Key, V)> for AvlTreeMap<V> {
    fn extend<I: IntoIterator<Item = (Key, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> FromIterator<(Key, V)> for AvlTreeMap<V> {
    fn from_iter<I: IntoIterator<Item = (Key, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, V> IntoIterator for &'a AvlTreeMap<V> {
    type Item = (Key, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> Iterator for Keys<'_, V> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
