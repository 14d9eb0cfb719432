//! An unbalanced Binary Search Tree (BST) mapping ordered keys to opaque
//! payloads, with sorted iteration.
//!
//! ## Binary Search Tree
//!
//! A BST is defined recursively using the notion of a `Node`. A `Node` stores
//! a key, a payload associated with that key, and up to two child `Node`s.
//! The important invariants are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less
//!    than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    greater than its own key.
//!
//! These invariants mean a lookup only ever walks one root-to-leaf path, and
//! that visiting the left subtree, then the node, then the right subtree
//! (an in-order traversal) yields the keys in sorted order.
//!
//! This tree does no rebalancing: inserting keys in sorted order degenerates
//! it into a chain whose height equals the number of keys, so lookups and
//! inserts are `O(height)` with no logarithmic guarantee. That trade-off is
//! deliberate; see [`boxed::Tree`] for the details, including the policy on
//! duplicate keys (they are silently ignored).

#![deny(missing_docs)]

pub mod boxed;
