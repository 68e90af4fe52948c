use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::char_trait::TrieChar;
use super::node::TrieNode;
use super::word::WordBuf;

/// A lazy depth-first walk over every word below a prefix node.
///
/// Created by [`PrefixTree::completions_iter`](super::PrefixTree::completions_iter).
/// Each stack frame owns the path that leads to its node, so no buffer is
/// shared between frames and the tree is only ever borrowed immutably.
///
/// A node's own word is produced before the words below it. Siblings are
/// visited in [`TrieNode::children`] order, which is not alphabetical.
#[derive(Clone)]
pub struct Completions<'t, C: TrieChar> {
    stack: Vec<(&'t TrieNode<C>, WordBuf<C>)>,
}

impl<'t, C: TrieChar> Completions<'t, C> {
    /// Starts a walk at `node`, with `path` emitted in front of every word found.
    pub(crate) fn new(node: &'t TrieNode<C>, path: WordBuf<C>) -> Self {
        Completions {
            stack: vec![(node, path)],
        }
    }

    /// A walk that yields nothing, used when the prefix is absent.
    pub(crate) fn empty() -> Self {
        Completions { stack: Vec::new() }
    }

    /// Queues the children of `node` so the first child is popped first.
    ///
    /// The first child takes over `path`; only its siblings copy it.
    fn push_children(&mut self, node: &'t TrieNode<C>, mut path: WordBuf<C>) {
        let mut children = node.children();
        let Some((first, first_child)) = children.next() else {
            return;
        };
        let rest: SmallVec<[_; 8]> = children.collect();
        for (ch, child) in rest.into_iter().rev() {
            let mut child_path = path.clone();
            child_path.push(ch);
            self.stack.push((child, child_path));
        }
        path.push(first);
        self.stack.push((first_child, path));
    }
}

impl<C: TrieChar> Iterator for Completions<'_, C> {
    type Item = Vec<C>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, path)) = self.stack.pop() {
            if !node.is_terminal() {
                self.push_children(node, path);
            } else if node.child_count() == 0 {
                return Some(path.into_vec());
            } else {
                self.push_children(node, path.clone());
                return Some(path.into_vec());
            }
        }
        None
    }
}

impl<C: TrieChar> FusedIterator for Completions<'_, C> {}

impl<C: TrieChar> std::fmt::Debug for Completions<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completions")
            .field("pending", &self.stack.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn node_with_words(words: &[&str]) -> TrieNode<char> {
        let mut root = TrieNode::new(false);
        for word in words {
            let mut node = &mut root;
            for ch in word.chars() {
                node = node.child_or_insert(ch).0;
            }
            node.mark_terminal();
        }
        root
    }

    #[test]
    fn empty_walk_yields_nothing() {
        let mut walk = Completions::<char>::empty();
        assert_eq!(walk.next(), None);
        assert_eq!(walk.next(), None);
    }

    #[test]
    fn start_node_word_comes_first() {
        let root = node_with_words(&["car", "cart", "carts"]);
        let car = "car".chars().try_fold(&root, |n, ch| n.get(ch)).unwrap();
        let words: Vec<String> = Completions::new(car, "car".chars().collect())
            .map(|w| w.into_iter().collect())
            .collect();
        assert_eq!(words, ["car", "cart", "carts"]);
    }

    #[test]
    fn path_is_emitted_verbatim() {
        let root = node_with_words(&["ab", "ac"]);
        let a = root.get('a').unwrap();
        let mut words: Vec<String> = Completions::new(a, "A".chars().collect())
            .map(|w| w.into_iter().collect())
            .collect();
        words.sort();
        assert_eq!(words, ["Ab", "Ac"]);
    }

    #[test]
    fn every_descendant_visited_once() {
        let words = ["a", "ab", "abc", "abd", "ae", "b", "bcd", "bce", "bcf", "bcg"];
        let root = node_with_words(&words);
        let mut found: Vec<String> = Completions::new(&root, WordBuf::new())
            .map(|w| w.into_iter().collect())
            .collect();
        found.sort();
        assert_eq!(found, words);
    }

    #[test]
    fn siblings_follow_child_order() {
        let root = node_with_words(&["b", "a"]);
        let order: Vec<char> = root.children().map(|(ch, _)| ch).collect();
        let found: Vec<char> = Completions::new(&root, WordBuf::new())
            .map(|w| w[0])
            .collect();
        assert_eq!(found, order);
    }

    #[test]
    fn deep_chain_with_words_along_the_way() {
        let root = node_with_words(&["ab", "abcd", "abcdef"]);
        let found: Vec<String> = Completions::new(&root, WordBuf::new())
            .map(|w| w.into_iter().collect())
            .collect();
        assert_eq!(found, ["ab", "abcd", "abcdef"]);
    }
}
