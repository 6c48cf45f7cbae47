mod louds;
mod louds_builder;
mod louds_index;
mod louds_node_num;
mod word_node_number_map;

pub use word_node_number_map::WordNodeNumberMap;

use crate::fid::{Fid, FidBuilder};

/// LOUDS (Level-Order Unary Degree Sequence): the unlabeled tree shape of a
/// succinct trie, represented as a single bit sequence (LBS, "LOUDS Bit
/// Sequence") and answered via `rank`/`select` on the underlying `Fid`.
///
/// Node numbers are 1-origin and assigned in BFS order; node #1 is the tree's
/// real root. Indexes into the LBS are 0-origin.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemSize, mem_dbg::MemDbg))]
pub struct Louds {
    lbs: Fid,
}

/// Builds a [Louds](struct.Louds.html) from an LBS literal.
pub struct LoudsBuilder {
    bv_builder: FidBuilder,
}

/// 0-origin position in the LBS bit sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemSize, mem_dbg::MemDbg))]
pub struct LoudsIndex {
    value: u64,
}

/// 1-origin, BFS-order node number. Node #1 is the tree's root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemSize, mem_dbg::MemDbg))]
pub struct LoudsNodeNum {
    value: u64,
}
