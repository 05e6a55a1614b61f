//! Self-contained HTML page for the leaderboard: podiums, color-coded
//! table and legend, with embedded CSS and no external assets.

use chrono::Utc;

use crate::presenter::{Leaderboard, Podium, PodiumEntry, StyledRow};
use crate::reliability::ReliabilityBucket;

/// Render one leaderboard as a complete HTML document.
pub fn render_page(board: &Leaderboard, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <h1 class="page-title">🏆 {title}</h1>
        {top_podium}
        <hr>
        {bottom_podium}
        <hr>
        <div class="columns">
            {table}
            {legend}
        </div>
        {footer}
    </div>
</body>
</html>"#,
        title = escape_html(title),
        css = inline_css(),
        top_podium = render_top_podium(&board.podium),
        bottom_podium = render_bottom_podium(&board.podium),
        table = render_table(&board.rows),
        legend = render_legend(&board.legend),
        footer = render_footer(),
    )
}

/// Winners' podium: silver left, gold center and larger, bronze right.
fn render_top_podium(podium: &Podium) -> String {
    let [gold, silver, bronze] = podium_slots(&podium.top);
    format!(
        r#"<div class="podium">
            {silver}
            {gold}
            {bronze}
        </div>"#,
        silver = podium_step("🥈", silver, false),
        gold = podium_step("🥇", gold, true),
        bronze = podium_step("🥉", bronze, false),
    )
}

/// Podium of the bottom. Mirrors the club's traditional layout: the
/// second-to-last on the left, dead last centered and emphasized, the
/// third-from-last on the right.
fn render_bottom_podium(podium: &Podium) -> String {
    let [third_from_last, second_to_last, last] = podium_slots(&podium.bottom);
    format!(
        r#"<h2 class="section-title">🐐 Podium of the bottom</h2>
        <div class="podium">
            {left}
            {center}
            {right}
        </div>"#,
        left = podium_step("💀", second_to_last, false),
        center = podium_step("🪦", last, true),
        right = podium_step("⬇️", third_from_last, false),
    )
}

fn podium_slots(entries: &[PodiumEntry]) -> [&PodiumEntry; 3] {
    // The presenter only ever yields a full podium.
    [&entries[0], &entries[1], &entries[2]]
}

fn podium_step(emoji: &str, entry: &PodiumEntry, emphasized: bool) -> String {
    let class = if emphasized { "step step-main" } else { "step" };
    format!(
        r#"<div class="{class}">
            <div class="step-name">{emoji} {name}</div>
            <div class="step-average">{average}</div>
        </div>"#,
        name = escape_html(&entry.name),
        average = entry.average,
    )
}

fn render_table(rows: &[StyledRow]) -> String {
    let body: String = rows.iter().map(render_row).collect();
    format!(
        r#"<div class="ranking">
            <h2 class="section-title">📊 Full ranking</h2>
            <table>
                <thead>
                    <tr><th>#</th><th>Name</th><th>Average</th><th>Matches</th><th></th></tr>
                </thead>
                <tbody>
{body}                </tbody>
            </table>
        </div>"#,
    )
}

/// One table row with the reliability color as a full-row background.
fn render_row(row: &StyledRow) -> String {
    format!(
        "                    <tr style=\"background-color:{color}\" title=\"{interpretation}\">\
         <td>{rank}</td><td>{name}</td><td>{average}</td><td>{match_count}</td><td>{extra}</td></tr>\n",
        color = row.color,
        interpretation = escape_html(row.interpretation),
        rank = row.rank,
        name = escape_html(&row.name),
        average = row.average,
        match_count = row.match_count,
        extra = escape_html(row.extra.as_deref().unwrap_or("")),
    )
}

fn render_legend(legend: &[&ReliabilityBucket]) -> String {
    let body: String = legend
        .iter()
        .map(|bucket| {
            format!(
                "                    <tr>\
                 <td><div class=\"swatch\" style=\"background:{color}\"></div></td>\
                 <td>{range}</td><td>{interpretation}</td><td>{credibility}</td></tr>\n",
                color = bucket.color,
                range = escape_html(bucket.match_range),
                interpretation = escape_html(bucket.interpretation),
                credibility = escape_html(bucket.credibility),
            )
        })
        .collect();
    format!(
        r#"<div class="legend">
            <h2 class="section-title">🟩 Reliability legend</h2>
            <table>
                <thead>
                    <tr><th></th><th>Matches</th><th>Interpretation</th><th>Credibility</th></tr>
                </thead>
                <tbody>
{body}                </tbody>
            </table>
        </div>"#,
    )
}

fn render_footer() -> String {
    format!(
        r#"<footer>Rendered {}</footer>"#,
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.6;
    color: #111827;
    background: #ffffff;
}

.container { max-width: 1100px; margin: 0 auto; padding: 2rem; }

.page-title { text-align: center; margin-bottom: 1.5rem; }
.section-title { margin: 1rem 0; }

hr { border: none; border-top: 1px solid #e5e7eb; margin: 1.5rem 0; }

/* Podiums */
.podium {
    display: flex;
    justify-content: center;
    align-items: flex-end;
    gap: 25px;
    margin-bottom: 25px;
    text-align: center;
}
.step-name { font-size: 1.25rem; font-weight: 600; }
.step-average { font-size: 1.1rem; }
.step-main .step-name { font-size: 1.6rem; }
.step-main .step-average { font-size: 1.3rem; font-weight: 700; }

/* Table + legend side by side */
.columns { display: flex; gap: 2rem; align-items: flex-start; }
.ranking { flex: 3; }
.legend { flex: 1; }

table { border-collapse: collapse; width: 100%; }
th, td {
    text-align: center;
    padding: 0.35rem 0.75rem;
    border: 1px solid #d1d5db;
    white-space: nowrap;
}

.swatch { width: 25px; height: 25px; border-radius: 4px; margin: 0 auto; }

footer {
    margin-top: 2rem;
    color: #6b7280;
    font-size: 0.875rem;
    text-align: center;
}
"#
}
