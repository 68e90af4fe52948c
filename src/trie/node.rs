use std::iter::FusedIterator;
use std::slice;

use hashbrown::hash_map::{self, HashMap};
use smallvec::SmallVec;

use super::char_trait::TrieChar;

type Edge<C> = (C, Box<TrieNode<C>>);

/// Children stored inline before switching to a hash map.
const FEW: usize = 2;

/// A compact representation of the children of a TrieNode that doesn't build a hash map
/// until there are at least three children.
enum Children<C: TrieChar> {
    /// Up to two children, in insertion order.
    Few(SmallVec<[Edge<C>; FEW]>),
    /// Three or more children keyed by letter.
    Many(HashMap<C, Box<TrieNode<C>>>),
}

impl<C: TrieChar> Default for Children<C> {
    fn default() -> Self {
        Children::Few(SmallVec::new())
    }
}

impl<C: TrieChar> Children<C> {
    /// Builds children from edges with distinct letters, keeping their order when they fit inline.
    fn from_edges(edges: SmallVec<[Edge<C>; FEW]>) -> Self {
        if edges.len() <= FEW {
            Children::Few(edges)
        } else {
            Children::Many(edges.into_iter().collect())
        }
    }

    #[inline]
    fn get(&self, letter: C) -> Option<&TrieNode<C>> {
        match self {
            Children::Few(edges) => edges
                .iter()
                .find(|(ch, _)| *ch == letter)
                .map(|(_, node)| &**node),
            Children::Many(children) => children.get(&letter).map(|node| &**node),
        }
    }

    /// Returns the child for `letter`, pushing an empty one if there is none.
    fn get_or_push(&mut self, letter: C) -> (&mut TrieNode<C>, bool) {
        let spill = matches!(self, Children::Few(edges)
            if edges.len() == FEW && edges.iter().all(|(ch, _)| *ch != letter));
        if spill {
            *self = match std::mem::take(self) {
                Children::Few(edges) => Children::Many(edges.into_iter().collect()),
                many => many,
            };
        }

        match self {
            Children::Few(edges) => {
                let (index, created) = match edges.iter().position(|(ch, _)| *ch == letter) {
                    Some(index) => (index, false),
                    None => {
                        edges.push((letter, Box::default()));
                        (edges.len() - 1, true)
                    }
                };
                (&mut *edges[index].1, created)
            }
            Children::Many(children) => {
                let mut created = false;
                let node = children.entry(letter).or_insert_with(|| {
                    created = true;
                    Box::default()
                });
                (&mut **node, created)
            }
        }
    }

    /// Moves every child node into `out`, leaving no children behind.
    fn drain_into(&mut self, out: &mut Vec<Box<TrieNode<C>>>) {
        match std::mem::take(self) {
            Children::Few(edges) => out.extend(edges.into_iter().map(|(_, node)| node)),
            Children::Many(children) => out.extend(children.into_values()),
        }
    }

    fn len(&self) -> usize {
        match self {
            Children::Few(edges) => edges.len(),
            Children::Many(children) => children.len(),
        }
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> ChildIter<'_, C> {
        let inner = match self {
            Children::Few(edges) => Inner::Inline(edges.iter()),
            Children::Many(children) => Inner::Map(children.iter()),
        };
        ChildIter { inner }
    }
}

/// An iterator over the children of a TrieNode.
///
/// The order is insertion order for nodes with one or two children and
/// unspecified for wider nodes. Callers must not rely on it being alphabetical.
#[derive(Clone)]
pub struct ChildIter<'t, C: TrieChar> {
    inner: Inner<'t, C>,
}

#[derive(Clone)]
enum Inner<'t, C: TrieChar> {
    Inline(slice::Iter<'t, Edge<C>>),
    Map(hash_map::Iter<'t, C, Box<TrieNode<C>>>),
}

impl<'t, C: TrieChar> Iterator for ChildIter<'t, C> {
    type Item = (C, &'t TrieNode<C>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Inline(edges) => edges.next().map(|(ch, node)| (*ch, &**node)),
            Inner::Map(children) => children.next().map(|(ch, node)| (*ch, &**node)),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Inline(edges) => edges.size_hint(),
            Inner::Map(children) => children.size_hint(),
        }
    }
}

impl<C: TrieChar> ExactSizeIterator for ChildIter<'_, C> {}

impl<C: TrieChar> FusedIterator for ChildIter<'_, C> {}

/// A node in the prefix tree.
///
/// Each node exclusively owns its children; the tree is a strict arborescence
/// with no back-references. Dropping and cloning walk the subtree with an
/// explicit stack, so word length is not limited by the thread's stack size.
pub struct TrieNode<C: TrieChar> {
    children: Children<C>,
    terminal: bool,
}

impl<C: TrieChar> Default for TrieNode<C> {
    fn default() -> Self {
        TrieNode::new(false)
    }
}

impl<C: TrieChar> TrieNode<C> {
    /// Creates a node with no children.
    ///
    /// # Arguments
    ///
    /// * `terminal` - Whether this node represents the end of an inserted word
    pub fn new(terminal: bool) -> Self {
        TrieNode {
            children: Children::default(),
            terminal,
        }
    }

    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, letter: C) -> Option<&TrieNode<C>> {
        self.children.get(letter)
    }

    /// True if the path to this node spells an inserted word.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns an iterator over all children of this node.
    #[inline]
    pub fn children(&self) -> ChildIter<'_, C> {
        self.children.iter()
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Marks this node as the end of a word. Returns false if it already was.
    pub(crate) fn mark_terminal(&mut self) -> bool {
        !std::mem::replace(&mut self.terminal, true)
    }

    /// Returns the child for `letter`, creating an empty one if needed.
    ///
    /// The flag is true when the child was created by this call.
    pub(crate) fn child_or_insert(&mut self, letter: C) -> (&mut TrieNode<C>, bool) {
        self.children.get_or_push(letter)
    }
}

impl<C: TrieChar> Drop for TrieNode<C> {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut pending = Vec::new();
        self.children.drain_into(&mut pending);
        // Each popped node is childless by the time its own drop runs.
        while let Some(mut node) = pending.pop() {
            node.children.drain_into(&mut pending);
        }
    }
}

/// A node whose children are still being copied.
struct CloneFrame<'t, C: TrieChar> {
    letter: Option<C>,
    terminal: bool,
    pending: ChildIter<'t, C>,
    built: SmallVec<[Edge<C>; FEW]>,
}

impl<'t, C: TrieChar> CloneFrame<'t, C> {
    fn new(letter: Option<C>, source: &'t TrieNode<C>) -> Self {
        CloneFrame {
            letter,
            terminal: source.terminal,
            pending: source.children(),
            built: SmallVec::new(),
        }
    }
}

impl<C: TrieChar> Clone for TrieNode<C> {
    fn clone(&self) -> Self {
        let mut stack = vec![CloneFrame::new(None, self)];
        while let Some(frame) = stack.last_mut() {
            if let Some((letter, child)) = frame.pending.next() {
                stack.push(CloneFrame::new(Some(letter), child));
                continue;
            }
            let Some(frame) = stack.pop() else { break };
            let node = TrieNode {
                children: Children::from_edges(frame.built),
                terminal: frame.terminal,
            };
            match (stack.last_mut(), frame.letter) {
                (Some(parent), Some(letter)) => parent.built.push((letter, Box::new(node))),
                _ => return node,
            }
        }
        TrieNode::new(self.terminal)
    }
}

// Prints one level only.
impl<C: TrieChar> std::fmt::Debug for TrieNode<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letters: SmallVec<[C; 8]> = self.children().map(|(ch, _)| ch).collect();
        f.debug_struct("TrieNode")
            .field("terminal", &self.terminal)
            .field("children", &letters)
            .finish()
    }
}
