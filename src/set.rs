use super::check::InvariantViolation;
use super::map::{AvlTreeMap, Keys};
use super::node::Key;

/// An ordered set of integer keys implemented with an AVL tree.
#[derive(Default)]
pub struct AvlTreeSet {
    map: AvlTreeMap<()>,
}

impl AvlTreeSet {
    /// Creates an empty set.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self {
            map: AvlTreeMap::new(),
        }
    }

    /// Returns true if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Clears the set, deallocating all memory.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns true if the set contains the key.
    pub fn contains(&self, key: Key) -> bool {
        self.map.contains_key(key)
    }

    /// Adds a key to the set.
    /// Returns whether the key was newly inserted.
    pub fn insert(&mut self, key: Key) -> bool {
        self.map.insert(key, ())
    }

    /// Removes a key from the set.
    /// Returns whether the key was previously in the set.
    pub fn remove(&mut self, key: Key) -> bool {
        self.map.remove(key).is_some()
    }

    /// Gets an iterator over the keys of the set, in ascending order.
    pub fn iter(&self) -> Keys<'_, ()> {
        self.map.keys()
    }

    pub fn check_consistency(&self) -> Result<(), InvariantViolation> {
        self.map.check_consistency()
    }
}

impl Extend<Key> for AvlTreeSet {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        self.map.extend(iter.into_iter().map(|key| (key, ())));
    }
}

impl FromIterator<Key> for AvlTreeSet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
