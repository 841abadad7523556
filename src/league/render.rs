//! Fixed-width text rendering of the league views.
//!
//! Everything here returns plain text meant for a monospace block. Wrapping
//! it for a particular chat platform happens elsewhere.

use std::fmt::{self, Write as _};

use super::bracket::{BracketColumn, ResolvedSide, TBD};
use super::matchups::{LowestScorer, Matchup};
use super::model::Outcome;
use super::standings::Standing;

pub const TROPHY: &str = "🏆";
pub const FOOTBALL: &str = "🏈";

/// Space between two bracket columns, on top of the widest line.
const COLUMN_GUTTER: usize = 4;

const MATCHUP_HEADER: &str = "Team 1       T1 Pts  ⚔️   T2 Pts   Team 2  ";
const MATCHUP_RULE: &str = "---------------------------------------------";

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Win => "🏆",
            Outcome::Loss => "❌",
            Outcome::Unknown => "❓",
            Outcome::Bye => "🙌",
        })
    }
}

pub fn rank_marker(rank: usize) -> &'static str {
    if rank == 1 { TROPHY } else { FOOTBALL }
}

/// Two decimals, or "TBD" when there is no score yet.
pub fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| TBD.to_string(), |points| format!("{points:.2}"))
}

/// Three lines per team: rank and names, record and points, spacer.
pub fn render_standings(standings: &[Standing]) -> String {
    let mut out = String::new();

    for (idx, standing) in standings.iter().enumerate() {
        let rank = idx + 1;
        let names = format!(" {} ({})", standing.team_name, standing.alias);
        let record = format!(
            " {}-{} | PF {:.2} | PA {:.2}",
            standing.wins, standing.losses, standing.points_for, standing.points_against
        );

        let _ = writeln!(out, "{}{rank:<3} {names:<30}", rank_marker(rank));
        let _ = writeln!(out, "      {record:<32}");
        out.push('\n');
    }

    out
}

pub fn render_matchup_row(matchup: &Matchup) -> String {
    format!(
        "{}{:<11}{:<8.2}{:<5}{:<8.2}{}{:<10}",
        matchup.team1.outcome,
        matchup.team1.label,
        matchup.team1.points,
        "vs",
        matchup.team2.points,
        matchup.team2.outcome,
        matchup.team2.label,
    )
}

pub fn render_matchups(matchups: &[Matchup]) -> String {
    let mut out = format!("{MATCHUP_HEADER}\n{MATCHUP_RULE}\n");
    for matchup in matchups {
        out.push_str(&render_matchup_row(matchup));
        out.push('\n');
    }
    out
}

pub fn render_lowest_scorers(scorers: &[LowestScorer]) -> String {
    scorers
        .iter()
        .map(|s| format!("{:<10} {:<8.2}\n", s.label, s.points))
        .collect()
}

fn render_bracket_side(side: &ResolvedSide) -> String {
    format!(
        "{} {:<10} {:>6}",
        side.outcome,
        side.label,
        format_score(side.score)
    )
}

fn column_lines(column: &BracketColumn) -> Vec<String> {
    let mut lines = Vec::with_capacity(column.cells.len() * 3);
    for (idx, cell) in column.cells.iter().enumerate() {
        if idx > 0 {
            lines.push(String::new());
        }
        lines.push(render_bracket_side(&cell.team1));
        lines.push(render_bracket_side(&cell.team2));
    }
    lines
}

/// Rounds side by side, left to right.
///
/// Each column is padded to its own widest line plus a gutter, so the next
/// round starts at the same offset on every line.
pub fn render_bracket(columns: &[BracketColumn]) -> String {
    if columns.is_empty() {
        return "No matches available".to_string();
    }

    let rendered: Vec<Vec<String>> = columns.iter().map(column_lines).collect();
    let widths: Vec<usize> = rendered
        .iter()
        .map(|lines| {
            lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + COLUMN_GUTTER
        })
        .collect();
    let height = rendered.iter().map(Vec::len).max().unwrap_or(0);

    let mut out = String::new();
    for row in 0..height {
        let mut line = String::new();
        for (lines, &width) in rendered.iter().zip(&widths) {
            let text = lines.get(row).map(String::as_str).unwrap_or("");
            let _ = write!(line, "{text:<width$}");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
