//! An unbalanced BST storing a set of values. Every node exclusively owns its children through
//! a `Box` so there is no sharing, no parent pointer, and no `unsafe`.
//!
//! The tree never rebalances itself. Inserting values in ascending (or descending) order builds
//! a tree shaped like a linked list, so every operation here walks the tree with a loop or an
//! explicit stack instead of recursing once per level.
//!
//! # Examples
//!
//! ```
//! use classics::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.min(), None);
//!
//! for value in [50, 30, 70, 20, 40, 60, 80] {
//!     tree.insert(value);
//! }
//! assert_eq!(tree.in_order(), vec![20, 30, 40, 50, 60, 70, 80]);
//! assert!(tree.contains(&40));
//! assert!(!tree.contains(&100));
//! assert_eq!(tree.min(), Some(&20));
//!
//! // Inserting a value that's already there does nothing.
//! tree.insert(40);
//! assert_eq!(tree.len(), 7);
//!
//! // Removing the root promotes its in-order successor.
//! tree.remove(&50);
//! assert_eq!(tree.in_order(), vec![20, 30, 40, 60, 70, 80]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

/// A Binary Search Tree holding distinct values of `T`. This can be used for inserting,
/// searching for, and removing values as well as visiting them in ascending order.
///
/// Duplicate values are ignored on insert so the tree behaves like a set.
pub struct Tree<T> {
    root: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Boxes dropping their children would recurse once per level, so children are detached and
    // dropped from a stack instead.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone + Ord,
{
    /// Re-inserting the values in pre-order rebuilds exactly the same shape.
    fn clone(&self) -> Self {
        self.pre_order().into_iter().cloned().collect()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` into the tree. If an equal value is already stored the tree is left
    /// unchanged and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use classics::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.in_order(), vec![1, 2]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let link = self.search_mut(&value);
        if link.is_none() {
            *link = Some(Node::new_boxed(value));
        }
    }

    /// Returns whether a value equal to `value` is stored in the tree. This takes `O(height)`
    /// which, since the tree is never rebalanced, can be `O(n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classics::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.search(value).is_some()
    }

    /// Removes the value equal to `value` from the tree. If the tree doesn't contain it, nothing
    /// happens.
    ///
    /// A node with a single child is replaced by that child. A node with two children takes the
    /// value of its in-order successor (the smallest value in its right subtree) and the
    /// successor's node is spliced out instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use classics::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// tree.remove(&2);
    /// assert_eq!(tree.in_order(), vec![1, 3]);
    ///
    /// // Removing a missing value is a no-op.
    /// tree.remove(&2);
    /// assert_eq!(tree.in_order(), vec![1, 3]);
    /// ```
    pub fn remove(&mut self, value: &T)
    where
        T: Ord,
    {
        Node::splice_out(self.search_mut(value));
    }

    /// Returns the smallest value in the tree, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classics::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), None);
    ///
    /// tree.extend([5, 3, 8]);
    /// assert_eq!(tree.min(), Some(&3));
    /// ```
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns the largest value in the tree, or `None` if it is empty.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Returns every value in the tree, in ascending order, in a newly allocated `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classics::tree::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.in_order(), vec![1, 2, 3]);
    /// ```
    pub fn in_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns an iterator visiting the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }

    /// Counts the values in the tree. The tree doesn't track its size so this visits every node.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a lone root has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use classics::tree::Tree;
    ///
    /// // Ascending inserts degrade into a list.
    /// let tree: Tree<_> = (0..10).collect();
    /// assert_eq!(tree.height(), 10);
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Finds the link that holds `value`. If `value` isn't in the tree this is the empty link
    /// where it would be attached as a leaf.
    fn search(&self, value: &T) -> &Link<T>
    where
        T: Ord,
    {
        let mut link = &self.root;
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = &node.left,
                Ordering::Equal => break,
                Ordering::Greater => link = &node.right,
            }
        }
        link
    }

    /// Same as [`Tree::search`] but the link can be used to attach or detach a node.
    fn search_mut(&mut self, value: &T) -> &mut Link<T>
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        loop {
            match link.as_deref().map(|node| value.cmp(&node.value)) {
                None | Some(Ordering::Equal) => return link,
                Some(ordering) => {
                    if let Some(node) = link {
                        link = node.child_mut(ordering);
                    }
                }
            }
        }
    }

    /// The values in pre-order: each node before its left subtree, and that before its right.
    fn pre_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            values.push(&node.value);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        values
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The child to descend into when the searched value compares as `ordering` to this node's.
    fn child_mut(&mut self, ordering: Ordering) -> &mut Link<T> {
        match ordering {
            Ordering::Less => &mut self.left,
            Ordering::Equal | Ordering::Greater => &mut self.right,
        }
    }

    /// Removes the node held in `link` (if any), putting whatever keeps the subtree ordered in
    /// its place.
    fn splice_out(link: &mut Link<T>)
    where
        T: Ord,
    {
        let Some(mut node) = link.take() else {
            return;
        };
        *link = match (node.left.take(), node.right.take()) {
            (None, right) => right,
            (left, None) => left,
            (left, mut right) => {
                if let Some(successor) = Self::take_min(&mut right) {
                    node.value = successor;
                }
                node.left = left;
                node.right = right;
                Some(node)
            }
        };

        if cfg!(debug_assertions) {
            if let Some(node) = link.as_deref() {
                if let Some(left) = node.left.as_deref() {
                    assert!(left.value < node.value);
                }
                if let Some(right) = node.right.as_deref() {
                    assert!(node.value < right.value);
                }
            }
        }
    }

    /// Detaches the leftmost node of the subtree in `link` and returns its value. The leftmost
    /// node has no left child so it is simply replaced by its right subtree.
    fn take_min(link: &mut Link<T>) -> Option<T> {
        let mut link = link;
        while link.as_deref().is_some_and(|node| node.left.is_some()) {
            if let Some(node) = link {
                link = &mut node.left;
            }
        }

        let Node { value, right, .. } = *link.take()?;
        *link = right;
        Some(value)
    }
}

/// An iterator over the values of a [`Tree`] in ascending order. Created by [`Tree::iter`].
///
/// The iterator keeps the path of nodes whose values are still to be yielded on a stack, so it
/// uses `O(height)` memory.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: &'a Link<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root.as_deref());
        iter
    }

    /// Pushes `node` and all of its left descendants. The last one pushed is the smallest.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
