use serde::Serialize;

use crate::presenter::{Podium, StyledRow};
use crate::reliability::ReliabilityBucket;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub generated_at: String,
    pub total: usize,
    pub rows: Vec<StyledRow>,
    pub podium: Podium,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendResponse {
    pub buckets: Vec<&'static ReliabilityBucket>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RankingRow, RankingTable};
    use crate::{presenter, reliability};

    #[test]
    fn test_ranking_response_serializes_camel_case() {
        let row = |name: &str, average: f64, match_count: i64| RankingRow {
            name: name.to_string(),
            average,
            match_count,
            extra: None,
        };
        let table = RankingTable::new(vec![
            row("Alice", 3.9, 1_250),
            row("Bob", 3.5, 480),
            row("Carol", 3.2, 95),
        ]);
        let board = presenter::present(&table).unwrap();

        let response = RankingResponse {
            generated_at: "2026-01-01T00:00:00Z".to_string(),
            total: board.rows.len(),
            rows: board.rows,
            podium: board.podium,
        };
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["total"], 3);
        assert!(value["generatedAt"].is_string());
        let first = &value["rows"][0];
        assert_eq!(first["matchCount"], 1_250);
        assert_eq!(first["average"], "3.900");
        assert_eq!(first["color"], "#009900");
        assert_eq!(value["podium"]["top"][0]["name"], "Alice");
    }

    #[test]
    fn test_legend_response_has_all_tiers() {
        let value = serde_json::to_value(LegendResponse {
            buckets: reliability::legend(),
        })
        .unwrap();
        assert_eq!(value["buckets"].as_array().map(Vec::len), Some(8));
        assert_eq!(value["buckets"][0]["matchRange"], "under 10");
    }
}
