//! Discord embeds for the weekly results and playoff brackets.

use serenity::builder::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, CreateMessage};
use serenity::model::Timestamp;

use crate::league::render::{
    render_bracket, render_lowest_scorers, render_matchups, render_standings,
};
use crate::league::{BracketColumn, LowestScorer, PlayoffReport, SeasonReport, StandingsView};

pub const EMBED_COLOUR: u32 = 0x587ac7;
pub const FIELD_LIMIT: usize = 1024;
pub const DESCRIPTION_LIMIT: usize = 4096;

const SLEEPER_ICON_URL: &str = "https://play-lh.googleusercontent.com/L5sDy5zFKKLLMndpR7wJfD3aum4w0FVL_rRK6W1t9T5-d4BYc-4A7LTXa2nGeP62TCo";

const RESULTS_GREETING: &str = "It's fantasy league results time!";
pub const PLAYOFFS_INTRO: &str = "🏈 Playoff Update Time! Who's making it to the ship? 🏆";
const DONKEYS_TITLE: &str = "🫏🫏🫏 Donkeys of the Week HEE-HAW! 🫏🫏🫏";

/// "```\n" plus an optional closing newline and "```".
const FENCE_OVERHEAD: usize = 8;

fn fence(body: &str) -> String {
    if body.ends_with('\n') {
        format!("```\n{body}```")
    } else {
        format!("```\n{body}\n```")
    }
}

/// Split a line that alone exceeds `budget` characters.
fn hard_split(line: &str, budget: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for (count, (idx, _)) in line.char_indices().enumerate() {
        if count > 0 && count % budget == 0 {
            pieces.push(&line[start..idx]);
            start = idx;
        }
    }
    pieces.push(&line[start..]);
    pieces
}

/// Split `text` on line boundaries into pieces that fit a code block of at
/// most `limit` characters once fenced.
fn chunk_lines(text: &str, limit: usize) -> Vec<String> {
    let budget = limit.saturating_sub(FENCE_OVERHEAD).max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.split_inclusive('\n') {
        for piece in hard_split(line, budget) {
            let len = piece.chars().count();
            if current_len + len > budget && !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            current.push_str(piece);
            current_len += len;
        }
    }

    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Wrap `text` in code fences, splitting on line boundaries so every block
/// stays within `limit` characters.
pub fn code_blocks(text: &str, limit: usize) -> Vec<String> {
    chunk_lines(text, limit).iter().map(|chunk| fence(chunk)).collect()
}

/// One field per chunk; chunks after the first are marked as continued.
fn chunked_fields(name: &str, text: &str) -> Vec<(String, String, bool)> {
    code_blocks(text, FIELD_LIMIT)
        .into_iter()
        .enumerate()
        .map(|(idx, value)| {
            let name = if idx == 0 {
                name.to_string()
            } else {
                format!("{name} (cont.)")
            };
            (name, value, false)
        })
        .collect()
}

fn division_heading(tag: u32) -> String {
    format!("`Division {tag}`\n")
}

/// Standings of one league as it appears in the embed description.
pub fn standings_section(league: &str, view: &StandingsView) -> String {
    let mut out = format!("      🏅 **{league} Standings:**\n");

    for group in &view.groups {
        if let Some(tag) = group.division {
            out.push_str(&division_heading(tag));
        }
        for block in code_blocks(&render_standings(&group.standings), DESCRIPTION_LIMIT) {
            out.push_str(&block);
            out.push('\n');
        }
    }
    out
}

/// Standings that did not fit the description, as fields.
fn standings_fields(league: &str, view: &StandingsView) -> Vec<(String, String, bool)> {
    view.groups
        .iter()
        .flat_map(|group| {
            let name = match group.division {
                Some(tag) => format!("{league} - Division {tag} Standings:"),
                None => format!("{league} - Standings:"),
            };
            chunked_fields(&name, &render_standings(&group.standings))
        })
        .collect()
}

/// The weekly results post: standings of every league in the description,
/// one matchup table per league, then the combined lowest scorers.
pub fn results_embed(week: u32, leagues: &[(&str, &SeasonReport)]) -> CreateEmbed {
    let mut description = String::new();
    let mut fields = Vec::new();

    for (name, report) in leagues {
        let section = standings_section(name, &report.standings);
        let fits = description.chars().count() + section.chars().count() < DESCRIPTION_LIMIT;
        if fits {
            description.push_str(&section);
            description.push('\n');
        } else {
            fields.extend(standings_fields(name, &report.standings));
        }
    }

    for (name, report) in leagues {
        fields.extend(chunked_fields(
            &format!("{name} - Matchup Results:"),
            &render_matchups(&report.matchups),
        ));
    }

    let donkeys: Vec<LowestScorer> = leagues
        .iter()
        .filter_map(|(_, report)| report.lowest_scorer.clone())
        .collect();
    fields.extend(chunked_fields(DONKEYS_TITLE, &render_lowest_scorers(&donkeys)));

    CreateEmbed::new()
        .author(
            CreateEmbedAuthor::new(format!("Fantasy Results – Week {week}:"))
                .icon_url(SLEEPER_ICON_URL),
        )
        .description(description.trim_end())
        .colour(EMBED_COLOUR)
        .fields(fields)
        .footer(CreateEmbedFooter::new("Sleeper Bot").icon_url(SLEEPER_ICON_URL))
        .timestamp(Timestamp::now())
}

pub fn results_message(week: u32, leagues: &[(&str, &SeasonReport)]) -> CreateMessage {
    CreateMessage::new()
        .content(RESULTS_GREETING)
        .embed(results_embed(week, leagues))
}

/// One bracket as its own embed. Whatever does not fit the description
/// continues in fields.
pub fn bracket_embed(title: &str, week: u32, columns: &[BracketColumn]) -> CreateEmbed {
    let mut chunks = chunk_lines(&render_bracket(columns), DESCRIPTION_LIMIT).into_iter();
    let description = chunks.next().map(|chunk| fence(&chunk)).unwrap_or_default();
    let overflow: String = chunks.collect();
    let fields = if overflow.is_empty() {
        Vec::new()
    } else {
        chunked_fields(&format!("{title} (cont.)"), &overflow)
    };

    CreateEmbed::new()
        .title(title)
        .description(description)
        .colour(EMBED_COLOUR)
        .fields(fields)
        .footer(
            CreateEmbedFooter::new(format!("Fantasy Playoff Results – Week {week}"))
                .icon_url(SLEEPER_ICON_URL),
        )
        .timestamp(Timestamp::now())
}

/// The intro line, then championship and consolation brackets per league.
pub fn playoff_messages(week: u32, leagues: &[(&str, &PlayoffReport)]) -> Vec<CreateMessage> {
    let mut messages = vec![CreateMessage::new().content(PLAYOFFS_INTRO)];

    for (name, report) in leagues {
        messages.push(CreateMessage::new().embed(bracket_embed(
            &format!("{name} - Championship Bracket"),
            week,
            &report.winners,
        )));
        messages.push(CreateMessage::new().embed(bracket_embed(
            &format!("{name} - Consolation Bracket"),
            week,
            &report.losers,
        )));
    }
    messages
}
