use crate::louds::{LoudsNodeNum, WordNodeNumberMap};

/// Lazy iterator over a dictionary's stored keys, yielded in lexicographic
/// order. Built by [LoudsMultimap::keys](../trait.LoudsMultimap.html#tymethod.keys).
pub struct Keys<'a> {
    trie: &'a WordNodeNumberMap,
    node_nums: std::slice::Iter<'a, LoudsNodeNum>,
}

impl<'a> Keys<'a> {
    pub(crate) fn new(trie: &'a WordNodeNumberMap, node_nums: &'a [LoudsNodeNum]) -> Keys<'a> {
        Keys {
            trie,
            node_nums: node_nums.iter(),
        }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.node_nums.next().map(|&node_num| {
            self.trie
                .get_word(node_num)
                .expect("a key trie's own node numbers are always resolvable")
        })
    }
}
