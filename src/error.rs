/// The two recoverable error kinds of the dictionary's public API.
///
/// Anything else - a rank/select call made on a position the index tables
/// say cannot exist - is a programming error against the LOUDS invariants and
/// panics instead of going through this type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictError {
    /// Construction input was malformed: mismatched `keys`/`values` lengths,
    /// an empty key, an empty value (flavor S), or a node number out of range
    /// for a label array.
    #[error("malformed input: {0}")]
    Domain(String),

    /// A queried key is not in the stored key set, or it resolves to a node
    /// that has no associated values (e.g. it is a pure prefix of stored
    /// keys).
    #[error("key not found: {0:?}")]
    KeyAbsent(String),
}
