mod keys;
mod string_dictionary;
mod value_dictionary;

pub use keys::Keys;
pub use string_dictionary::StringDictionary;
pub use value_dictionary::Dictionary;

use crate::error::DictError;

/// Shared read interface of the two dictionary flavors:
/// [StringDictionary](struct.StringDictionary.html) (string to string) and
/// [Dictionary](struct.Dictionary.html)`<T>` (string to any `T: Clone`).
///
/// The two flavors are resolved statically per call site rather than through
/// a trait object: they store their associated values differently (node
/// numbers into a second trie vs. plain cloned values), so there is no
/// shared layout to erase behind `dyn`.
pub trait LoudsMultimap {
    type Value;

    /// Looks up all values associated with `key`, in the order they were
    /// passed to the constructor.
    ///
    /// # Failures
    /// `key` is not reachable by descending the key trie, or it resolves to
    /// a node with no associated values - which happens when `key` is a
    /// strict prefix of a stored key, or an extension of one that stops
    /// short of any actually-stored key.
    fn lookup(&self, key: &str) -> Result<Vec<Self::Value>, DictError>;

    /// Same as [lookup](#tymethod.lookup), except an absent key yields an
    /// empty `Vec` instead of `DictError::KeyAbsent`.
    fn lookup_or_empty(&self, key: &str) -> Result<Vec<Self::Value>, DictError> {
        match self.lookup(key) {
            Err(DictError::KeyAbsent(_)) => Ok(Vec::new()),
            other => other,
        }
    }

    /// Stored keys, lazily, in lexicographic order.
    fn keys(&self) -> Keys<'_>;
}
