use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as edge labels in a prefix tree.
///
/// Implemented for `char`, `u8`, `u16` and `u32`.
///
/// - `Copy`: edges store labels by value
/// - `Eq + Hash`: looking up children in wide nodes
/// - `Debug`: debug printing of nodes
pub trait TrieChar: Copy + Eq + Hash + Debug {
    /// Maps an ASCII uppercase letter to its lowercase form.
    ///
    /// Every other value, including non-ASCII letters, is returned unchanged.
    fn fold_case(self) -> Self;
}

impl TrieChar for char {
    #[inline]
    fn fold_case(self) -> Self {
        self.to_ascii_lowercase()
    }
}

impl TrieChar for u8 {
    #[inline]
    fn fold_case(self) -> Self {
        self.to_ascii_lowercase()
    }
}

impl TrieChar for u16 {
    #[inline]
    fn fold_case(self) -> Self {
        match u8::try_from(self) {
            Ok(b) => b.to_ascii_lowercase().into(),
            Err(_) => self,
        }
    }
}

impl TrieChar for u32 {
    #[inline]
    fn fold_case(self) -> Self {
        match u8::try_from(self) {
            Ok(b) => b.to_ascii_lowercase().into(),
            Err(_) => self,
        }
    }
}
