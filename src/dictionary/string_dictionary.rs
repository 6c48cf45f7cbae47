use std::collections::HashMap;

use super::{Keys, LoudsMultimap};
use crate::error::DictError;
use crate::louds::{LoudsNodeNum, WordNodeNumberMap};

/// Flavor S of the dictionary: string keys mapped to string values.
///
/// Keys and values live in two independent tries, so a value string is
/// stored once regardless of how many keys point at it; each key's entry in
/// [key_to_value_nodes](#structfield.key_to_value_nodes) is a node number
/// into the value trie rather than a copy of the string.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemSize, mem_dbg::MemDbg))]
pub struct StringDictionary {
    key_trie: WordNodeNumberMap,
    key_node_nums: Vec<LoudsNodeNum>,
    value_trie: WordNodeNumberMap,
    key_to_value_nodes: HashMap<u64, Vec<LoudsNodeNum>>,
}

impl StringDictionary {
    /// Builds a dictionary from parallel `keys`/`values` arrays. A key
    /// occurring more than once accumulates every value it was paired with,
    /// preserving insertion order and duplicates.
    ///
    /// # Failures
    /// `keys.len() != values.len()`, or either array contains an empty
    /// string.
    pub fn build(
        keys: &[impl AsRef<str>],
        values: &[impl AsRef<str>],
    ) -> Result<StringDictionary, DictError> {
        Self::build_with(keys, values, false)
    }

    /// Same as [build](#method.build), except a `(key, value)` pair already
    /// seen is dropped instead of accumulating again. First occurrence wins
    /// for ordering.
    pub fn build_deduped(
        keys: &[impl AsRef<str>],
        values: &[impl AsRef<str>],
    ) -> Result<StringDictionary, DictError> {
        Self::build_with(keys, values, true)
    }

    fn build_with(
        keys: &[impl AsRef<str>],
        values: &[impl AsRef<str>],
        dedup: bool,
    ) -> Result<StringDictionary, DictError> {
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
        if values.iter().any(|v| v.as_ref().is_empty()) {
            return Err(DictError::Domain(
                "values must not contain an empty string".to_string(),
            ));
        }

        let key_trie = WordNodeNumberMap::build(keys)?;
        let value_trie = WordNodeNumberMap::build(values)?;

        let mut key_to_value_nodes: HashMap<u64, Vec<LoudsNodeNum>> = HashMap::new();
        let mut seen: std::collections::HashSet<(u64, u64)> = std::collections::HashSet::new();
        for (key, value) in keys.iter().zip(values.iter()) {
            let key_node = key_trie.get_node_number(key.as_ref())?;
            let value_node = value_trie.get_node_number(value.as_ref())?;

            if dedup && !seen.insert((key_node.value(), value_node.value())) {
                continue;
            }
            key_to_value_nodes
                .entry(key_node.value())
                .or_insert_with(Vec::new)
                .push(value_node);
        }

        let mut key_node_nums: Vec<LoudsNodeNum> = key_to_value_nodes
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

        Ok(StringDictionary {
            key_trie,
            key_node_nums,
            value_trie,
            key_to_value_nodes,
        })
    }
}

impl LoudsMultimap for StringDictionary {
    type Value = String;

    fn lookup(&self, key: &str) -> Result<Vec<String>, DictError> {
        let key_node = self.key_trie.get_node_number(key)?;
        match self.key_to_value_nodes.get(&key_node.value()) {
            Some(value_nodes) if !value_nodes.is_empty() => value_nodes
                .iter()
                .map(|&node| self.value_trie.get_word(node))
                .collect(),
            _ => Err(DictError::KeyAbsent(key.to_string())),
        }
    }

    fn keys(&self) -> Keys<'_> {
        Keys::new(&self.key_trie, &self.key_node_nums)
    }
}

#[cfg(test)]
mod build_and_lookup_tests {
    use super::{LoudsMultimap, StringDictionary};

    #[test]
    fn win_hot_scenario() {
        let dict = StringDictionary::build(&["Win", "hot"], &["Lose", "cold"]).unwrap();
        assert_eq!(dict.lookup("Win").unwrap(), vec!["Lose".to_string()]);
        assert_eq!(dict.lookup("hot").unwrap(), vec!["cold".to_string()]);
        assert!(dict.lookup("won").is_err());
    }

    #[test]
    fn multi_value_association_preserves_insertion_order() {
        let keys = [
            "あけます",
            "あけます",
            "あけます",
            "あけました",
            "あけました",
            "あけました",
        ];
        let values = [
            "開けます",
            "明けます",
            "空けます",
            "開けました",
            "明けました",
            "空けました",
        ];
        let dict = StringDictionary::build(&keys, &values).unwrap();

        assert_eq!(
            dict.lookup("あけます").unwrap(),
            vec!["開けます", "明けます", "空けます"]
        );
        assert_eq!(
            dict.lookup("あけました").unwrap(),
            vec!["開けました", "明けました", "空けました"]
        );
    }

    #[test]
    fn keys_round_trips_with_lookup() {
        let dict = StringDictionary::build(&["an", "i", "of"], &["a", "b", "c"]).unwrap();
        for key in dict.keys() {
            assert!(dict.lookup(&key).is_ok());
        }
    }

    #[test]
    fn keys_are_lexicographic_not_node_number_order() {
        // "i" terminates at a lower trie node number than "an" does (BFS
        // visits the root's single-character children before "an"'s second
        // character), so this also guards against sorting by node number.
        let dict = StringDictionary::build(
            &["an", "i", "of", "one", "our", "out"],
            &["a", "b", "c", "d", "e", "f"],
        )
        .unwrap();
        let keys: Vec<String> = dict.keys().collect();
        assert_eq!(keys, vec!["an", "i", "of", "one", "our", "out"]);
    }

    #[test]
    fn empty_construction_is_allowed() {
        let keys: [&str; 0] = [];
        let values: [&str; 0] = [];
        let dict = StringDictionary::build(&keys, &values).unwrap();
        assert!(dict.keys().next().is_none());
        assert!(dict.lookup("anything").is_err());
    }

    #[test]
    fn empty_key_string_is_domain_error() {
        assert!(StringDictionary::build(&[""], &["x"]).is_err());
    }

    #[test]
    fn empty_value_string_is_domain_error() {
        assert!(StringDictionary::build(&["x"], &[""]).is_err());
    }

    #[test]
    fn mismatched_lengths_is_domain_error() {
        assert!(StringDictionary::build(&["a", "b"], &["x"]).is_err());
    }

    #[test]
    fn prefix_of_stored_key_is_key_absent() {
        let dict = StringDictionary::build(&["then"], &["value"]).unwrap();
        assert!(dict.lookup("the").is_err());
    }

    #[test]
    fn extension_of_stored_key_is_key_absent() {
        let dict = StringDictionary::build(&["the"], &["value"]).unwrap();
        assert!(dict.lookup("then").is_err());
    }

    #[test]
    fn build_deduped_drops_repeated_pairs() {
        let dict =
            StringDictionary::build_deduped(&["a", "a", "a"], &["x", "x", "y"]).unwrap();
        assert_eq!(dict.lookup("a").unwrap(), vec!["x".to_string(), "y".to_string()]);
    }
}
