pub mod models;

pub use models::{RankingRow, RankingTable};
