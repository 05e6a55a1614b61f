use thiserror::Error;

/// Fatal conditions for a render cycle. There are no transient failures
/// here, so nothing is retried; every variant aborts the render.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankingError {
    /// The podium needs three rows on each end; a shorter table is
    /// reported rather than truncated.
    #[error("podium requires at least 3 rows, sheet has {found}")]
    InsufficientRows { found: usize },

    /// A required header is absent from the first four sheet columns.
    #[error("required column '{name}' not found in sheet header")]
    MissingColumn { name: String },

    /// A data row that cannot be used: short record or non-numeric
    /// average/match count. No coercion, no row skipping.
    #[error("malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
}
