/// Key type of the tree. Keys are unique and totally ordered.
pub type Key = i32;

/// Owned link to a subtree. `None` is the empty subtree.
pub type Link<V> = Option<Box<Node<V>>>;

/// A tree node. Each node exclusively owns its two subtrees.
pub struct Node<V> {
    pub(crate) key: Key,
    pub(crate) value: V,
    pub(crate) left: Link<V>,
    pub(crate) right: Link<V>,
    pub(crate) height: usize,
}

/// Creates a leaf node with height 1.
pub fn create_node<V>(key: Key, value: V) -> Box<Node<V>> {
    Box::new(Node {
        key,
        value,
        left: None,
        right: None,
        height: 1,
    })
}

impl<V> Node<V> {
    pub fn key(&self) -> Key {
        self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn left(&self) -> Option<&Node<V>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<V>> {
        self.right.as_deref()
    }

    /// Cached height of the subtree rooted at this node. A leaf has height 1.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Cached height of a link, 0 for the empty subtree.
pub(crate) fn link_height<V>(link: &Link<V>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}
