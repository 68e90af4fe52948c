/// Trait for types that can serve as trie edge labels.
pub mod char_trait;
/// Lazy depth-first completion iterator.
pub mod completions;
/// Loading word lists from readers and files.
pub mod loader;
/// Trie node and children module containing the core tree structure.
pub mod node;
/// The prefix tree and its insert, lookup and completion operations.
pub mod tree;
/// Conversion of strings and sequences into words.
pub mod word;

pub use char_trait::TrieChar;
pub use completions::Completions;
pub use loader::LoadError;
pub use node::{ChildIter, TrieNode};
pub use tree::PrefixTree;
pub use word::{IntoWord, WordBuf};

#[cfg(test)]
mod test {
    use super::{PrefixTree, TrieNode};

    fn walk<'t>(root: &'t TrieNode<char>, path: &str) -> Option<&'t TrieNode<char>> {
        path.chars().try_fold(root, |n, ch| n.get(ch))
    }

    #[test]
    fn nodes_along_a_path() {
        let words = ["TEST", "TESTER", "WTEST"];
        let tree: PrefixTree = words.into_iter().collect();
        let root = tree.root();

        let n = root.get('T').unwrap();
        assert!(!n.is_terminal());

        let n = n.get('E').unwrap();
        assert!(!n.is_terminal());

        let n = n.get('S').unwrap();
        assert!(!n.is_terminal());

        let n = n.get('T').unwrap();
        assert!(n.is_terminal());

        let n = n.get('E').unwrap();
        assert!(!n.is_terminal());

        let n = n.get('R').unwrap();
        assert!(n.is_terminal());
        assert_eq!(n.child_count(), 0);

        assert!(n.get('T').is_none());
    }

    #[test]
    fn shared_prefixes_are_not_duplicated() {
        let tree: PrefixTree = ["ABCDEF", "ABCDXY", "AB"].into_iter().collect();
        // root + ABCDEF + XY
        assert_eq!(tree.node_count(), 1 + 6 + 2);
        let d = walk(tree.root(), "ABCD").unwrap();
        assert_eq!(d.child_count(), 2);
        assert!(walk(tree.root(), "AB").unwrap().is_terminal());
    }

    #[test]
    fn unicode_words() {
        let mut tree = PrefixTree::<char>::new();
        tree.insert("授人以渔");
        tree.insert("授人以鱼不如授人以渔");
        assert!(tree.contains("授人以渔"));
        assert!(!tree.contains("授人以"));
        let mut found = tree.completions("授人以");
        found.sort();
        assert_eq!(found, ["授人以渔", "授人以鱼不如授人以渔"]);
        assert!(!tree.contains("ÅTMINSTON"));
    }
}
