use serde::Serialize;

use crate::domain::{RankingRow, RankingTable};
use crate::errors::RankingError;
use crate::reliability::{self, ReliabilityBucket};

/// Rows on each end of the podium.
pub const PODIUM_SIZE: usize = 3;

/// A ranking row with everything the renderer needs: display-formatted
/// average and the reliability styling for its match count.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledRow {
    pub rank: usize,
    pub name: String,
    /// Average formatted to exactly 3 decimal places.
    pub average: String,
    pub match_count: i64,
    pub extra: Option<String>,
    pub color: &'static str,
    pub interpretation: &'static str,
    pub credibility: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodiumEntry {
    pub rank: usize,
    pub name: String,
    pub average: String,
}

/// The top three and bottom three of the ranking. `top` holds ranks 1..=3
/// best first; `bottom` holds the last three ranks, worst last.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Podium {
    pub top: Vec<PodiumEntry>,
    pub bottom: Vec<PodiumEntry>,
}

/// Output contract of one render cycle: styled rows, podium, legend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub rows: Vec<StyledRow>,
    pub podium: Podium,
    pub legend: Vec<&'static ReliabilityBucket>,
}

/// Fixed display format for averages. Rust's float formatting rounds
/// half-to-even, e.g. 99.9999 -> "100.000".
pub fn format_average(value: f64) -> String {
    format!("{value:.3}")
}

/// Pick the podium ends from a pre-sorted table. A table shorter than
/// three rows is an error; a partial podium is never produced.
pub fn select_podium(table: &RankingTable) -> Result<Podium, RankingError> {
    let rows = table.rows();
    if rows.len() < PODIUM_SIZE {
        return Err(RankingError::InsufficientRows { found: rows.len() });
    }

    let entry = |rank: usize, row: &RankingRow| PodiumEntry {
        rank,
        name: row.name.clone(),
        average: format_average(row.average),
    };

    let top = rows[..PODIUM_SIZE]
        .iter()
        .enumerate()
        .map(|(i, row)| entry(i + 1, row))
        .collect();

    let first_bottom_rank = rows.len() - PODIUM_SIZE + 1;
    let bottom = rows[rows.len() - PODIUM_SIZE..]
        .iter()
        .enumerate()
        .map(|(i, row)| entry(first_bottom_rank + i, row))
        .collect();

    Ok(Podium { top, bottom })
}

fn style_row(rank: usize, row: &RankingRow) -> StyledRow {
    let bucket = reliability::classify(row.match_count);
    StyledRow {
        rank,
        name: row.name.clone(),
        average: format_average(row.average),
        match_count: row.match_count,
        extra: row.extra.clone(),
        color: bucket.color,
        interpretation: bucket.interpretation,
        credibility: bucket.credibility,
    }
}

/// One pass over the table: podium selection plus per-row styling.
/// The table itself is left untouched; order is whatever the sheet said.
pub fn present(table: &RankingTable) -> Result<Leaderboard, RankingError> {
    let podium = select_podium(table)?;
    let rows = table
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| style_row(i + 1, row))
        .collect();

    Ok(Leaderboard {
        rows,
        podium,
        legend: reliability::legend(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, average: f64, match_count: i64) -> RankingRow {
        RankingRow {
            name: name.to_string(),
            average,
            match_count,
            extra: None,
        }
    }

    fn sample_table() -> RankingTable {
        RankingTable::new(vec![
            row("Alice", 3.912, 1_250),
            row("Bob", 3.541, 480),
            row("Carol", 3.228, 95),
            row("Dave", 2.874, 260),
            row("Eve", 2.411, 12),
        ])
    }

    #[test]
    fn test_podium_ends_of_table() {
        let podium = select_podium(&sample_table()).unwrap();

        let top: Vec<&str> = podium.top.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(top, ["Alice", "Bob", "Carol"]);
        assert_eq!(podium.top[0].rank, 1);

        let bottom: Vec<&str> = podium.bottom.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(bottom, ["Carol", "Dave", "Eve"]);
        assert_eq!(podium.bottom[2].rank, 5);
    }

    #[test]
    fn test_podium_on_exactly_three_rows() {
        let table = RankingTable::new(vec![
            row("Alice", 3.0, 100),
            row("Bob", 2.0, 100),
            row("Carol", 1.0, 100),
        ]);
        let podium = select_podium(&table).unwrap();

        // Top and bottom are the whole table, each in rank order.
        for (entries, names) in [
            (&podium.top, ["Alice", "Bob", "Carol"]),
            (&podium.bottom, ["Alice", "Bob", "Carol"]),
        ] {
            let got: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
            assert_eq!(got, names);
        }
    }

    #[test]
    fn test_podium_rejects_short_table() {
        let table = RankingTable::new(vec![row("Alice", 3.0, 100), row("Bob", 2.0, 100)]);
        assert_eq!(
            select_podium(&table).unwrap_err(),
            RankingError::InsufficientRows { found: 2 }
        );
    }

    #[test]
    fn test_average_formatting() {
        assert_eq!(format_average(12.3), "12.300");
        assert_eq!(format_average(0.0), "0.000");
        assert_eq!(format_average(99.9999), "100.000");
        // 3.5415 is stored as 3.54150000...09, so it rounds up.
        assert_eq!(format_average(3.5415), "3.542");
    }

    #[test]
    fn test_present_styles_every_row() {
        let board = present(&sample_table()).unwrap();
        assert_eq!(board.rows.len(), 5);
        assert_eq!(board.legend.len(), 8);

        let eve = &board.rows[4];
        assert_eq!(eve.rank, 5);
        assert_eq!(eve.color, "#C0C0C0");
        assert_eq!(eve.interpretation, "unusable");
        assert_eq!(eve.average, "2.411");
    }

    #[test]
    fn test_row_color_stable_under_reordering() {
        let board = present(&sample_table()).unwrap();
        let colors_by_name: Vec<(String, &str)> = board
            .rows
            .iter()
            .map(|r| (r.name.clone(), r.color))
            .collect();

        let mut reversed = sample_table().rows().to_vec();
        reversed.reverse();
        let reordered = present(&RankingTable::new(reversed)).unwrap();

        for (name, color) in colors_by_name {
            let row = reordered.rows.iter().find(|r| r.name == name).unwrap();
            assert_eq!(row.color, color, "color of {name} must not depend on position");
        }
    }
}
