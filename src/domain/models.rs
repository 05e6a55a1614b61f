use serde::{Deserialize, Serialize};

/// One line of the ranking sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingRow {
    pub name: String,
    /// Season average backing the player's rank.
    pub average: f64,
    /// Number of matches the average is computed from. Well-formed input
    /// is non-negative; classification still accepts anything below.
    pub match_count: i64,
    /// Untyped fourth sheet column, carried through for display only.
    pub extra: Option<String>,
}

/// The full ranking, already sorted descending by average (rank 1 first).
/// The sheet is the authority on order; this program never sorts.
/// Immutable for the lifetime of a render cycle.
#[derive(Debug, Clone)]
pub struct RankingTable {
    rows: Vec<RankingRow>,
}

impl RankingTable {
    pub fn new(rows: Vec<RankingRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[RankingRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
