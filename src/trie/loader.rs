use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::tree::PrefixTree;

/// Errors that can occur when loading a word list.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The word list file could not be opened.
    #[error("failed to open word list {}", path.display())]
    Open {
        /// The path that was passed in.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A line could not be read, including lines that are not valid UTF-8.
    #[error("failed to read word list at line {line}")]
    Read {
        /// 1-based number of the offending line.
        line: usize,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl PrefixTree<char> {
    /// Builds a tree from a word list, one word per line.
    ///
    /// Trailing whitespace is trimmed. Empty lines and lines starting with '#'
    /// are skipped. Words can come in any order and may repeat.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::PrefixTree;
    ///
    /// let list = "# fruit\nbanana\napple\n\ncherry\n";
    /// let tree = PrefixTree::from_reader(list.as_bytes()).unwrap();
    /// assert_eq!(tree.len(), 3);
    /// assert!(tree.contains("apple"));
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut tree = PrefixTree::new();
        tree.load(reader)?;
        Ok(tree)
    }

    /// Builds a tree from a word list file.
    ///
    /// See [`from_reader`](PrefixTree::from_reader) for the file format.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use libtrie::trie::PrefixTree;
    ///
    /// let tree = PrefixTree::from_file("dictionary.txt").unwrap();
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let tree = Self::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), words = tree.len(), "loaded word list");
        Ok(tree)
    }

    /// Inserts every word of a word list into this tree.
    ///
    /// Returns how many words were read, duplicates included. Words read before
    /// an error stay in the tree.
    pub fn load<R: BufRead>(&mut self, mut reader: R) -> Result<usize, LoadError> {
        // Instead of using BufRead::lines() we call read_line repeatedly which lets us
        // reuse the same string instead of allocating a new string for every line.
        let mut buf = String::with_capacity(80);
        let mut line = 0;
        let mut read = 0;
        loop {
            line += 1;
            match reader.read_line(&mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(source) => return Err(LoadError::Read { line, source }),
            }
            let word = buf.trim_end();
            if !word.is_empty() && !is_comment(word) {
                self.insert(word);
                read += 1;
            }
            buf.clear();
        }
        debug!(
            read,
            words = self.len(),
            nodes = self.node_count(),
            "word list read"
        );
        Ok(read)
    }
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn comment_that_starts_with_pound() {
        assert!(is_comment("# This is a comment"));
    }

    #[test]
    fn comment_with_whitespace_before_pound() {
        assert!(is_comment("        # This is a comment with whitespace"));
    }

    #[test]
    fn non_comment() {
        assert!(!is_comment("REVERBERATE"));
        assert!(!is_comment(" REVERBERATE"));
        assert!(!is_comment("C#"));
    }

    #[test]
    fn skips_blanks_and_comments() {
        let list = "# header\nzulu\n\n   \nalfa  \n  # indented comment\r\nbravo\r\n";
        let tree = PrefixTree::from_reader(Cursor::new(list)).unwrap();
        let mut words = tree.words();
        words.sort();
        assert_eq!(words, ["alfa", "bravo", "zulu"]);
    }

    #[test]
    fn unsorted_and_repeated_words_are_fine() {
        let mut tree = PrefixTree::<char>::new();
        let read = tree.load(Cursor::new("delta\nalfa\ndelta\n")).unwrap();
        assert_eq!(read, 3);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn load_extends_existing_tree() {
        let mut tree: PrefixTree = ["cat"].into_iter().collect();
        tree.load(Cursor::new("car\ncart")).unwrap();
        let mut found = tree.completions("ca");
        found.sort();
        assert_eq!(found, ["car", "cart", "cat"]);
    }

    #[test]
    fn invalid_utf8_reports_line() {
        let mut bytes = b"alfa\nbravo\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let mut tree = PrefixTree::<char>::new();
        let err = tree.load(Cursor::new(bytes)).unwrap_err();
        match &err {
            LoadError::Read { line, source } => {
                assert_eq!(*line, 3);
                assert_eq!(source.kind(), io::ErrorKind::InvalidData);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(tree.contains("alfa"));
        assert!(tree.contains("bravo"));
        assert_eq!(err.to_string(), "failed to read word list at line 3");
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("libtrie-no-such-word-list.txt");
        let err = PrefixTree::from_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("libtrie-no-such-word-list.txt"));
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!("libtrie-words-{}.txt", std::process::id()));
        std::fs::write(&path, "# test list\ncake\nbake\nbaker\n").unwrap();
        let tree = PrefixTree::from_file(&path);
        std::fs::remove_file(&path).unwrap();

        let tree = tree.unwrap();
        assert_eq!(tree.len(), 3);
        assert!(tree.contains("baker"));
        assert!(!tree.contains("bak"));
        let mut found = tree.completions("BAKE");
        found.sort();
        assert_eq!(found, ["BAKE", "BAKEr"]);
    }
}
