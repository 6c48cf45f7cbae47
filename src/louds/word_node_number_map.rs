use super::{Louds, LoudsNodeNum};
use crate::error::DictError;
use crate::fid::Fid;
use crate::internal_data_structure::char_trie::CharTrie;

/// Two-way translation between a word and the node number of the trie node
/// it terminates at.
///
/// Built once from a word list and never mutated afterwards. Lookups cost
/// _O(len(word))_ trie descents, each of which is _O(children at that node)_
/// rank/select operations on the underlying [Louds](../struct.Louds.html).
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemSize, mem_dbg::MemDbg))]
pub struct WordNodeNumberMap {
    louds: Louds,
    labels: Vec<u16>,
}

impl WordNodeNumberMap {
    /// Builds the map from `words`. Words do not need to be sorted or
    /// deduplicated; duplicates simply map to the same node number.
    ///
    /// # Failures
    /// `words` contains an empty string.
    pub fn build(words: &[impl AsRef<str>]) -> Result<WordNodeNumberMap, DictError> {
        if words.iter().any(|w| w.as_ref().is_empty()) {
            return Err(DictError::Domain(
                "word list must not contain an empty string".to_string(),
            ));
        }

        let code_unit_words: Vec<Vec<u16>> = words
            .iter()
            .map(|w| w.as_ref().encode_utf16().collect())
            .collect();
        let (bits, labels) = CharTrie::build(&code_unit_words);

        let louds = Louds {
            lbs: Fid::from(&bits[..]),
        };
        Ok(WordNodeNumberMap { louds, labels })
    }

    /// Looks up the node number `word` terminates at.
    ///
    /// # Failures
    /// `word` (or any prefix of it) is not reachable by descending the trie
    /// one code unit at a time from the root.
    pub fn get_node_number(&self, word: &str) -> Result<LoudsNodeNum, DictError> {
        if word.is_empty() {
            return Err(DictError::KeyAbsent(word.to_string()));
        }

        let mut node_num = LoudsNodeNum::new(1);
        for code_unit in word.encode_utf16() {
            match self.find_child(&node_num, code_unit) {
                Some(child) => node_num = child,
                None => return Err(DictError::KeyAbsent(word.to_string())),
            }
        }
        Ok(node_num)
    }

    fn find_child(&self, node_num: &LoudsNodeNum, code_unit: u16) -> Option<LoudsNodeNum> {
        for child_index in self.louds.parent_to_children(node_num) {
            let child_num = self.louds.index_to_node_num(&child_index);
            if self.labels[child_num.value() as usize] == code_unit {
                return Some(child_num);
            }
        }
        None
    }

    /// Reconstructs the word that terminates at `node_num`. `get_word` of the
    /// root (node #1) is the empty string.
    ///
    /// # Failures
    /// `node_num` is out of range for this map's label array, or the
    /// reconstructed code units are not valid UTF-16 (cannot happen for a
    /// `node_num` this map itself produced).
    pub fn get_word(&self, node_num: LoudsNodeNum) -> Result<String, DictError> {
        if node_num.value() as usize >= self.labels.len() {
            return Err(DictError::Domain(format!(
                "node number {} is out of range for {} labels",
                node_num.value(),
                self.labels.len()
            )));
        }

        let mut code_units: Vec<u16> = Vec::new();
        let mut n = node_num;
        while n.value() != 1 {
            code_units.push(self.labels[n.value() as usize]);
            let index = self.louds.node_num_to_index(&n);
            n = self.louds.child_to_parent(&index);
        }
        code_units.reverse();

        String::from_utf16(&code_units)
            .map_err(|_| DictError::Domain("reconstructed word is not valid UTF-16".to_string()))
    }
}
