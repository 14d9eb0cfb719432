//! A BST with single-owner `Box`ed nodes. Each node exclusively owns its two
//! children, so the structure is a true tree (acyclic, every node reachable
//! from exactly one parent) and ordinary ownership rules enforce that.
//!
//! The tree never rebalances and has no delete operation: a node is allocated
//! the first time its key is inserted and stays where it landed. Inserting a
//! key that is already present leaves the tree untouched, existing payload
//! included.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::boxed::Tree;
//!
//! let mut tree = Tree::with_root("Federico", "07/10/1992");
//! tree.insert("Luca", "02/05/1963");
//! tree.insert("Livia", "12/04/1963");
//! tree.insert("Carlo", "02/05/1963");
//!
//! // Keys come back in sorted order, regardless of insertion order.
//! let names: Vec<_> = tree.keys().copied().collect();
//! assert_eq!(names, ["Carlo", "Federico", "Livia", "Luca"]);
//!
//! // Payloads ride along untouched and can be looked up by key.
//! assert_eq!(tree.find(&"Luca"), Some(&"02/05/1963"));
//!
//! // Re-inserting an existing key is a silent no-op.
//! tree.insert("Luca", "01/01/2000");
//! assert_eq!(tree.find(&"Luca"), Some(&"02/05/1963"));
//! ```

use std::cmp::Ordering;

type Link<K, V> = Option<Box<Node<K, V>>>;

/// An unbalanced Binary Search Tree mapping keys to payloads. This can be
/// used for inserting and finding entries and for walking all keys in sorted
/// order.
///
/// Two behaviors distinguish it from a general-purpose map:
///
/// * Inserting a key that is already present does nothing at all - the
///   existing payload is kept and no error is raised. See [`insert`].
/// * No rebalancing is performed, so the shape of the tree (and therefore
///   [`height`]) is entirely determined by the insertion order. Sorted input
///   degenerates the tree into a chain.
///
/// [`insert`]: Tree::insert
/// [`height`]: Tree::height
#[derive(Clone, Debug)]
pub struct Tree<K, V> {
    root: Link<K, V>,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Generates a new `Tree` whose single node holds the given key and
    /// payload. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::boxed::Tree;
    ///
    /// let tree = Tree::with_root(1, "one");
    ///
    /// assert_eq!(tree.height(), 1);
    /// assert_eq!(tree.find(&1), Some(&"one"));
    /// ```
    pub fn with_root(key: K, payload: V) -> Self {
        Self {
            root: Some(Node::new_boxed(key, payload)),
        }
    }

    /// Returns `true` if the tree contains no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given payload into the tree stored at the given key.
    ///
    /// If the key is already present this is a silent no-op: the existing
    /// node keeps its payload and nothing is allocated. This is defined
    /// behavior, not a failure, so there is no return value to signal it.
    /// On a new key exactly one node is allocated, as a leaf at the position
    /// the descent ran off the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1, 2);
    /// assert_eq!(tree.find(&1), Some(&2));
    ///
    /// // A duplicate key leaves the original payload in place.
    /// tree.insert(1, 3);
    /// assert_eq!(tree.find(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, payload: V)
    where
        K: Ord,
    {
        match self.root {
            Some(ref mut root) => root.insert(key, payload),
            None => self.root = Some(Node::new_boxed(key, payload)),
        }
    }

    /// Potentially finds the payload associated with the given key in this
    /// tree. If no node has the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.root.as_deref().and_then(|n| n.find(key))
    }

    /// Like [`find`] but returns a mutable reference, letting the caller
    /// update a payload in place. The tree itself never touches payloads,
    /// and keys cannot be reached mutably at all - changing a key out from
    /// under the tree would break the ordering invariant.
    ///
    /// [`find`]: Tree::find
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::boxed::Tree;
    ///
    /// let mut tree = Tree::with_root("Rita", "12/04/1963");
    ///
    /// if let Some(birthday) = tree.find_mut(&"Rita") {
    ///     *birthday = "13/04/1963";
    /// }
    ///
    /// assert_eq!(tree.find(&"Rita"), Some(&"13/04/1963"));
    /// ```
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        self.root.as_deref_mut().and_then(|n| n.find_mut(key))
    }

    /// Gets the height of this tree: 0 when empty, 1 for a single node, and
    /// in general one more than the taller of the root's subtrees.
    ///
    /// Because nothing rebalances the tree, the height is a property of the
    /// insertion order. Inserting n keys in sorted order produces a chain of
    /// height n.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(2, ());
    /// assert_eq!(tree.height(), 1);
    ///
    /// tree.insert(1, ());
    /// tree.insert(3, ());
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }

    /// Returns an iterator over the tree's entries in ascending key order
    /// (an in-order traversal: left subtree, node, right subtree).
    ///
    /// The traversal is lazy and restartable - each call starts fresh from
    /// the root over whatever the tree holds at that point. It uses an
    /// explicit stack rather than recursion, so even a fully degenerate tree
    /// cannot overflow the call stack during iteration.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [5, 3, 8, 1, 4] {
    ///     tree.insert(key, key * 10);
    /// }
    ///
    /// let entries: Vec<_> = tree.iter().map(|(k, v)| (*k, *v)).collect();
    /// assert_eq!(entries, [(1, 10), (3, 30), (4, 40), (5, 50), (8, 80)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Returns an iterator over the tree's keys in ascending order. This is
    /// [`iter`] with the payloads dropped.
    ///
    /// [`iter`]: Tree::iter
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// An in-order iterator over a [`Tree`]'s entries, created by [`Tree::iter`].
///
/// The stack holds the path of nodes whose left subtrees have been fully
/// yielded but which have not been yielded themselves, so its depth is
/// bounded by the tree's height.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    /// Pushes `node` and the chain of left children below it. The node on
    /// top of the stack afterwards holds the smallest unvisited key.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((&node.key, &node.payload))
    }
}

/// A node holds a key used for searching/sorting and the payload associated
/// with that key. The payload is opaque to the tree and passed through
/// unmodified.
#[derive(Clone, Debug)]
struct Node<K, V> {
    key: K,
    payload: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, payload: V) -> Box<Self> {
        Box::new(Node {
            key,
            payload,
            left: None,
            right: None,
        })
    }

    fn insert(&mut self, key: K, payload: V)
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => match self.left {
                Some(ref mut left) => left.insert(key, payload),
                None => self.left = Some(Self::new_boxed(key, payload)),
            },
            // Duplicate key: leave the existing node and payload untouched.
            Ordering::Equal => {}
            Ordering::Greater => match self.right {
                Some(ref mut right) => right.insert(key, payload),
                None => self.right = Some(Self::new_boxed(key, payload)),
            },
        }

        if cfg!(debug_assertions) {
            if let Some(ref left) = self.left {
                assert!(self.key > left.key);
            }
            if let Some(ref right) = self.right {
                assert!(self.key < right.key);
            }
        }
    }

    fn find(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left.as_deref().and_then(|n| n.find(key)),
            Ordering::Equal => Some(&self.payload),
            Ordering::Greater => self.right.as_deref().and_then(|n| n.find(key)),
        }
    }

    fn find_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left.as_deref_mut().and_then(|n| n.find_mut(key)),
            Ordering::Equal => Some(&mut self.payload),
            Ordering::Greater => self.right.as_deref_mut().and_then(|n| n.find_mut(key)),
        }
    }

    /// One more than the taller subtree, recomputed on every call. Nothing
    /// caches heights because nothing rebalances.
    fn height(&self) -> usize {
        let left = self.left.as_deref().map_or(0, Self::height);
        let right = self.right.as_deref().map_or(0, Self::height);
        left.max(right) + 1
    }
}
