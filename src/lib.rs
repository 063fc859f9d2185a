//! This crate collects a few classic data structures and algorithms, written mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! may have a left and a right child `Node`. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` (where `height` is the number of
//! `Node`s on the longest path from the root to a leaf). The [`tree::Tree`]
//! here never rebalances, so inserting sorted input gives it a height of `N`.
//! BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree.
//!
//! ## Sorting
//!
//! The [`sort`] module has two in-place sorts over slices: bubble sort, which
//! is `O(N^2)` but stops as soon as a pass makes no swaps, and merge sort,
//! which is `O(N lg N)` and uses `O(N)` extra memory.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod sort;
pub mod tree;

#[cfg(test)]
mod test;
