//! An integer-keyed map and set implemented with an AVL tree.
//!
//! Every subtree is exclusively owned by its parent. The tree functions take
//! the owned subtree root and return the new owned root, so the caller always
//! replaces its root with the returned one:
//!
//! ```
//! use int_avl::{delete, insert, search};
//! let mut root = None;
//! for key in [10, 20, 30] {
//!     root = Some(insert(root, key, key.to_string()));
//! }
//! assert_eq!(root.as_ref().map(|node| node.key()), Some(20));
//! assert_eq!(search(root.as_deref(), 30).map(|node| node.value().as_str()), Some("30"));
//! let root = delete(root, 20);
//! assert!(search(root.as_deref(), 20).is_none());
//! ```
//!
//! [`AvlTreeMap`] and [`AvlTreeSet`] wrap a root and keep track of the size.

mod balance;
mod check;
mod map;
mod node;
mod set;
mod traverse;
mod tree;

pub use balance::{
    balance_factor, classify, height, left_right_rotation, left_rotation, right_left_rotation,
    right_rotation, rotation, update_height, Balance,
};
pub use check::{validate, InvariantViolation};
pub use map::{AvlTreeMap, Keys, Values};
pub use node::{create_node, Key, Link, Node};
pub use set::AvlTreeSet;
pub use traverse::{inorder_listing, release, write_inorder, Iter};
pub use tree::{delete, insert, search, successor};


#[cfg(test)]
mod proptests;
