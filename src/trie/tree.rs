use tracing::trace;

use super::char_trait::TrieChar;
use super::completions::Completions;
use super::node::TrieNode;
use super::word::{IntoWord, WordBuf};

/// A growable prefix tree over words of `C` (`char` by default).
///
/// The tree owns every node. Nodes are created lazily the first time an
/// insertion extends a path and are never removed.
///
/// Exact operations ([`insert`](PrefixTree::insert), [`contains`](PrefixTree::contains),
/// [`has_prefix`](PrefixTree::has_prefix)) match characters verbatim.
/// Completion ([`completions_iter`](PrefixTree::completions_iter)) lowercases each ASCII
/// letter of the prefix before descending, and reports matches using the prefix
/// exactly as given.
///
/// # Examples
///
/// ```
/// use libtrie::trie::PrefixTree;
///
/// let mut tree = PrefixTree::<char>::new();
/// for word in ["cat", "car", "cart", "dog"] {
///     tree.insert(word);
/// }
/// assert!(tree.contains("cat"));
/// assert!(!tree.contains("ca"));
///
/// let mut found = tree.completions("ca");
/// found.sort();
/// assert_eq!(found, ["car", "cart", "cat"]);
/// assert!(tree.completions("z").is_empty());
/// ```
#[derive(Clone)]
pub struct PrefixTree<C: TrieChar = char> {
    root: TrieNode<C>,
    words: usize,
    nodes: usize,
}

impl<C: TrieChar> PrefixTree<C> {
    /// Creates an empty tree holding only the root node.
    pub fn new() -> Self {
        PrefixTree {
            root: TrieNode::new(false),
            words: 0,
            nodes: 1,
        }
    }

    /// Returns a reference to the root node.
    ///
    /// Use [`get()`](TrieNode::get), [`is_terminal()`](TrieNode::is_terminal) and
    /// [`children()`](TrieNode::children) to walk the tree by hand.
    pub fn root(&self) -> &TrieNode<C> {
        &self.root
    }

    /// Returns the number of distinct words in the tree.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Returns true if no word, not even the empty one, has been inserted.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Returns the number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Adds a word to the tree.
    ///
    /// Returns `true` if the word was added, `false` if it was already present.
    /// Inserting the empty word marks the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::PrefixTree;
    ///
    /// let mut tree = PrefixTree::<char>::new();
    /// assert!(tree.insert("fake"));
    /// assert!(!tree.insert("fake")); // already present
    /// assert!(tree.contains("fake"));
    /// ```
    pub fn insert(&mut self, word: impl IntoWord<C>) -> bool {
        let word = word.collect_word();
        let mut node = &mut self.root;
        let mut created = 0;
        for &ch in word.iter() {
            let (child, new) = node.child_or_insert(ch);
            created += usize::from(new);
            node = child;
        }
        let added = node.mark_terminal();

        if created > 0 {
            trace!(created, depth = word.len(), "prefix tree grew");
        }
        self.nodes += created;
        self.words += usize::from(added);
        added
    }

    /// Returns `true` if the exact word was inserted.
    ///
    /// A word that is only a prefix of inserted words is not contained.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::PrefixTree;
    ///
    /// let tree: PrefixTree = ["cart"].into_iter().collect();
    /// assert!(tree.contains("cart"));
    /// assert!(!tree.contains("car"));
    /// assert!(!tree.contains("Cart"));
    /// ```
    pub fn contains(&self, word: impl IntoWord<C>) -> bool {
        self.find(&word.collect_word())
            .is_some_and(|node| node.is_terminal())
    }

    /// Returns `true` if any inserted word starts with `prefix`, matched verbatim.
    pub fn has_prefix(&self, prefix: impl IntoWord<C>) -> bool {
        self.find(&prefix.collect_word()).is_some()
    }

    /// Returns a lazy iterator over every inserted word that starts with `prefix`.
    ///
    /// ASCII letters in `prefix` are lowercased before descending. Each item is
    /// `prefix` as given followed by the characters below the prefix node. The
    /// iteration order is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::PrefixTree;
    ///
    /// let tree: PrefixTree<u8> = [b"cab".to_vec(), b"cat".to_vec()].into_iter().collect();
    /// let mut found: Vec<Vec<u8>> = tree.completions_iter(*b"CA").collect();
    /// found.sort();
    /// assert_eq!(found, [b"CAb".to_vec(), b"CAt".to_vec()]);
    /// ```
    pub fn completions_iter(&self, prefix: impl IntoWord<C>) -> Completions<'_, C> {
        let prefix = prefix.collect_word();
        let start = prefix
            .iter()
            .try_fold(&self.root, |node, &ch| node.get(ch.fold_case()));
        match start {
            Some(node) => Completions::new(node, prefix),
            None => Completions::empty(),
        }
    }

    /// Returns a lazy iterator over every word in the tree, in unspecified order.
    pub fn iter(&self) -> Completions<'_, C> {
        Completions::new(&self.root, WordBuf::new())
    }

    fn find(&self, word: &[C]) -> Option<&TrieNode<C>> {
        word.iter().try_fold(&self.root, |node, &ch| node.get(ch))
    }
}

impl PrefixTree<char> {
    /// Returns every inserted word that starts with `prefix`.
    ///
    /// See [`completions_iter`](PrefixTree::completions_iter) for the matching rules.
    /// The result is empty when no word matches. Its order is unspecified; sort it
    /// if a stable order is needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::PrefixTree;
    ///
    /// let tree: PrefixTree = ["cat"].into_iter().collect();
    /// assert_eq!(tree.completions("CA"), ["CAt"]);
    /// ```
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        self.completions_iter(prefix)
            .map(|word| word.into_iter().collect())
            .collect()
    }

    /// Returns every word in the tree, in unspecified order.
    pub fn words(&self) -> Vec<String> {
        self.completions("")
    }
}

impl<C: TrieChar> Default for PrefixTree<C> {
    fn default() -> Self {
        PrefixTree::new()
    }
}

impl<C: TrieChar, W: IntoWord<C>> Extend<W> for PrefixTree<C> {
    fn extend<I: IntoIterator<Item = W>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<C: TrieChar, W: IntoWord<C>> FromIterator<W> for PrefixTree<C> {
    fn from_iter<I: IntoIterator<Item = W>>(words: I) -> Self {
        let mut tree = PrefixTree::new();
        tree.extend(words);
        tree
    }
}

impl<'t, C: TrieChar> IntoIterator for &'t PrefixTree<C> {
    type Item = Vec<C>;
    type IntoIter = Completions<'t, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C: TrieChar> std::fmt::Debug for PrefixTree<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrefixTree")
            .field("words", &self.words)
            .field("node_count", &self.nodes)
            .finish()
    }
}
