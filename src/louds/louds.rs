use super::{Louds, LoudsIndex, LoudsNodeNum};

impl Louds {
    /// # Panics
    /// `node_num` does not exist in this LOUDS.
    pub fn node_num_to_index(&self, node_num: &LoudsNodeNum) -> LoudsIndex {
        assert!(node_num.value() > 0);

        let index = self.lbs.select(node_num.value()).expect(&format!(
            "NodeNum({}) does not exist in this LOUDS",
            node_num.value(),
        ));
        LoudsIndex::new(index)
    }

    /// # Panics
    /// `index` does not point to any node in this LOUDS.
    pub fn index_to_node_num(&self, index: &LoudsIndex) -> LoudsNodeNum {
        self.validate_index(&index);

        let node_num = self.lbs.rank(index.value());
        LoudsNodeNum::new(node_num)
    }

    /// # Panics
    /// - `index` does not point to any node in this LOUDS.
    /// - `index == 0`: (node#1 is root and doesn't have parent)
    pub fn child_to_parent(&self, index: &LoudsIndex) -> LoudsNodeNum {
        self.validate_index(&index);
        assert!(index.value != 0, "node#1 is root and doesn't have parent");

        let parent_node_num = self.lbs.rank0(index.value());
        LoudsNodeNum::new(parent_node_num)
    }

    /// # Panics
    /// `node_num` does not exist in this LOUDS.
    pub fn parent_to_children(&self, node_num: &LoudsNodeNum) -> Vec<LoudsIndex> {
        assert!(node_num.value() > 0);

        let parent_start_index = self.lbs.select0(node_num.value()).expect(&format!(
            "NodeNum({}) does not exist in this LOUDS",
            node_num.value(),
        )) + 1;

        let mut children_index: Vec<u64> = vec![];
        let mut i = parent_start_index;
        loop {
            if self.lbs.access(i) == false {
                break;
            } else {
                children_index.push(i);
            }
            i += 1;
        }

        children_index.iter().map(|i| LoudsIndex::new(*i)).collect()
    }

    /// # Panics
    /// `index` does not point to any node in this LOUDS.
    fn validate_index(&self, index: &LoudsIndex) {
        assert_eq!(
            self.lbs.access(index.value()),
            true,
            "LBS[index={:?}] must be '1'",
            index,
        );
    }
}


#[cfg(test)]
mod node_num_to_index_failure_tests {
    use crate::{BitString, LoudsBuilder, LoudsNodeNum};

    macro_rules! parameterized_node_not_found_tests {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            #[should_panic]
            fn $name() {
                let (in_s, node_num) = $value;
                let bs = BitString::new(in_s);
                let louds = LoudsBuilder::from_bit_string(bs).build();
                let _ = louds.node_num_to_index(&LoudsNodeNum::new(node_num));
            }
        )*
        }
    }

    parameterized_node_not_found_tests! {
        t1_1: ("10_0", 0),
        t1_2: ("10_0", 2),

        t2_1: ("10_10_0", 0),
        t2_2: ("10_10_0", 3),

        t3_1: ("10_1110_10_0_1110_0_0_10_110_0_0_0", 0),
        t3_2: ("10_1110_10_0_1110_0_0_10_110_0_0_0", 12),
    }
}
