//! # libtrie
//!
//! A [prefix tree](https://en.wikipedia.org/wiki/Trie) (trie) for exact word lookup and
//! prefix completion over a vocabulary that grows one word at a time.
//!
//! Every node owns its children, so a [`PrefixTree`](trie::PrefixTree) is a plain value
//! that can be moved, cloned and shared across threads like any other collection.
//!
//! ## Features
//!
//! - **Generic over character type**: works with `char`, `u8`, `u16` or `u32` through
//!   [`TrieChar`](trie::TrieChar)
//! - **Compact nodes**: nodes with one or two children store them inline; wider nodes
//!   switch to a hash map
//! - **Lazy completion**: [`Completions`](trie::Completions) walks the subtree on demand
//!
//! ## Quick Start
//!
//! ```
//! use libtrie::trie::PrefixTree;
//!
//! let mut tree = PrefixTree::<char>::new();
//! tree.insert("cat");
//! tree.insert("car");
//! tree.insert("cart");
//! tree.insert("dog");
//!
//! assert!(tree.contains("cat"));
//! assert!(!tree.contains("ca"));
//!
//! let mut found = tree.completions("ca");
//! found.sort();
//! assert_eq!(found, ["car", "cart", "cat"]);
//! ```
//!
//! ## Case handling
//!
//! [`insert`](trie::PrefixTree::insert) and [`contains`](trie::PrefixTree::contains)
//! compare characters exactly. [`completions`](trie::PrefixTree::completions)
//! lowercases the ASCII letters of the prefix before looking it up and echoes the prefix
//! as typed in front of each match:
//!
//! ```
//! use libtrie::trie::PrefixTree;
//!
//! let tree: PrefixTree = ["cat", "Cow"].into_iter().collect();
//! assert!(!tree.contains("Cat"));
//! assert_eq!(tree.completions("CA"), ["CAt"]);
//! assert!(tree.completions("Co").is_empty());
//! ```
//!
//! ## Generic Usage
//!
//! ```
//! use libtrie::trie::PrefixTree;
//!
//! let tree: PrefixTree<u8> = [vec![1, 2, 3], vec![1, 2, 4], vec![2, 3, 4]]
//!     .into_iter()
//!     .collect();
//! assert!(tree.contains([1, 2, 3]));
//! assert!(!tree.contains([1, 2, 5]));
//! assert_eq!(tree.completions_iter([1, 2]).count(), 2);
//! ```
//!
//! Completion order is unspecified and must not be treated as alphabetical.

#![warn(missing_docs)]

/// Core trie data structure: node types, tree, completion and loading.
pub mod trie;
