use std::collections::HashMap;

use super::{Keys, LoudsMultimap};
use crate::error::DictError;
use crate::louds::{LoudsNodeNum, WordNodeNumberMap};

/// Flavor O of the dictionary: string keys mapped to values of any type `T`.
///
/// Unlike [StringDictionary](struct.StringDictionary.html), values are not
/// themselves indexed by a trie - they are cloned directly into the
/// per-key list - since an arbitrary `T` has no string representation to
/// build a second trie from.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemSize, mem_dbg::MemDbg))]
pub struct Dictionary<T> {
    key_trie: WordNodeNumberMap,
    key_node_nums: Vec<LoudsNodeNum>,
    key_to_values: HashMap<u64, Vec<T>>,
}

impl<T: Clone> Dictionary<T> {
    /// Builds a dictionary from a `keys` array and a parallel `values`
    /// array of any type. A key occurring more than once accumulates every
    /// value it was paired with, preserving insertion order.
    ///
    /// # Failures
    /// `keys.len() != values.len()`, or `keys` contains an empty string.
    pub fn build(keys: &[impl AsRef<str>], values: &[T]) -> Result<Dictionary<T>, DictError> {
        if keys.len() != values.len() {
            return Err(DictError::Domain(format!(
                "keys and values must have the same length ({} != {})",
                keys.len(),
                values.len()
            )));
        }
        if keys.iter().any(|k| k.as_ref().is_empty()) {
            return Err(DictError::Domain(
                "keys must not contain an empty string".to_string(),
            ));
        }

        let key_trie = WordNodeNumberMap::build(keys)?;

        let mut key_to_values: HashMap<u64, Vec<T>> = HashMap::new();
        for (key, value) in keys.iter().zip(values.iter()) {
            let key_node = key_trie.get_node_number(key.as_ref())?;
            key_to_values
                .entry(key_node.value())
                .or_insert_with(Vec::new)
                .push(value.clone());
        }

        let mut key_node_nums: Vec<LoudsNodeNum> = key_to_values
            .keys()
            .map(|&v| LoudsNodeNum::new(v))
            .collect();
        // Node numbers are assigned in trie BFS order, not lexicographic
        // order, so `keys()` must sort by the resolved word instead.
        key_node_nums.sort_by(|&a, &b| {
            key_trie
                .get_word(a)
                .expect("a key trie's own node numbers are always resolvable")
                .cmp(
                    &key_trie
                        .get_word(b)
                        .expect("a key trie's own node numbers are always resolvable"),
                )
        });

        Ok(Dictionary {
            key_trie,
            key_node_nums,
            key_to_values,
        })
    }
}

impl<T: Clone> LoudsMultimap for Dictionary<T> {
    type Value = T;

    fn lookup(&self, key: &str) -> Result<Vec<T>, DictError> {
        let key_node = self.key_trie.get_node_number(key)?;
        match self.key_to_values.get(&key_node.value()) {
            Some(values) if !values.is_empty() => Ok(values.clone()),
            _ => Err(DictError::KeyAbsent(key.to_string())),
        }
    }

    fn keys(&self) -> Keys<'_> {
        Keys::new(&self.key_trie, &self.key_node_nums)
    }
}
