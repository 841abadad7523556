//! Read-only projections of one fetched league snapshot.

use std::collections::HashMap;

use serde::Deserialize;

pub type RosterId = u32;
pub type MatchId = u32;

/// Combine an integer points value with its separate hundredths field.
pub fn combine_points(whole: i64, hundredths: u32) -> f64 {
    whole as f64 + f64::from(hundredths) / 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    pub roster_id: RosterId,
    pub owner_id: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub division: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: String,
    pub display_name: String,
    pub team_name: Option<String>,
}

/// One roster's point total for the week.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringEntry {
    pub matchup_id: Option<u32>,
    pub roster_id: RosterId,
    pub points: f64,
}

/// What fills one side of a bracket match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideRef {
    Roster(RosterId),
    WinnerOf(MatchId),
    LoserOf(MatchId),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BracketSide {
    pub reference: SideRef,
    /// Leaf name supplied directly by the provider, if any.
    pub display_name: Option<String>,
    pub score: Option<f64>,
}

impl BracketSide {
    pub fn new(reference: SideRef) -> Self {
        Self {
            reference,
            display_name: None,
            score: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BracketMatch {
    pub match_id: MatchId,
    pub round: u32,
    pub team1: BracketSide,
    pub team2: BracketSide,
    pub winner: Option<SideRef>,
    pub loser: Option<SideRef>,
}

/// Result marker shown next to a team in matchup and bracket views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Unknown,
    Bye,
}

/// Provider username to display alias, one per league.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct NicknameDirectory(HashMap<String, String>);

impl NicknameDirectory {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self(entries)
    }

    pub fn get(&self, username: &str) -> Option<&str> {
        self.0.get(username).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NicknameDirectory {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Everything fetched for one league and week.
///
/// A snapshot only exists once every category has been fetched, so the core
/// never sees a partial one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueSnapshot {
    pub rosters: Vec<Roster>,
    pub users: Vec<User>,
    pub entries: Vec<ScoringEntry>,
    pub winners_bracket: Vec<BracketMatch>,
    pub losers_bracket: Vec<BracketMatch>,
}
