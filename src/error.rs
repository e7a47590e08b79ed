use thiserror::Error;

/// Errors reported while building the skip tables for a pattern.
///
/// Searching itself never fails: once a pattern has been validated,
/// every text is scannable and "no match" is an empty result, not an
/// error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A zero-length pattern has no well-defined skip tables; advancing
    /// by its good-suffix entry would never make forward progress.
    #[error("pattern must contain at least one code unit")]
    EmptyPattern,

    /// The pattern contains a code unit the dense bad-character table
    /// cannot index. Use [`TableKind::Sparse`](crate::TableKind) for
    /// patterns outside the dense alphabet bound.
    #[error("pattern unit {unit:?} (U+{code:04X}) is outside the dense alphabet bound U+{limit:04X}")]
    UnsupportedCharacter {
        unit: char,
        code: u32,
        limit: u32,
    },
}
