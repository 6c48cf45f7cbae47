//! # louds-dict
//!
//! `louds-dict` is a compact, immutable multimap from Unicode strings to value
//! lists, built on top of a LOUDS (Level-Order Unary Degree Sequence) succinct
//! trie. Given a parallel pair of `keys`/`values` arrays, it answers
//! `lookup(key)` and enumerates stored keys, both in terms of succinct
//! rank/select operations on a bit vector rather than pointer-chasing nodes.
//!
//! The structure is build-once / read-many: there is no insertion, deletion,
//! or mutation after construction, and no persistence format.

pub use bit_string::BitString;
pub use dictionary::{Dictionary, Keys, LoudsMultimap, StringDictionary};
pub use error::DictError;
pub use fid::{Fid, FidBuilder};
pub use louds::{Louds, LoudsBuilder, LoudsIndex, LoudsNodeNum, WordNodeNumberMap};

pub mod bit_string;
pub mod dictionary;
pub mod error;
pub mod fid;
mod internal_data_structure;
pub mod louds;
