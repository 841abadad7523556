//! Playoff bracket resolution.
//!
//! A side of a match either names a roster or points at another match's
//! winner or loser. References are followed hop by hop until a roster is
//! reached. A cycle, a reference to a match that does not exist, or a chain
//! longer than [`MAX_REFERENCE_DEPTH`] renders as [`UNRESOLVED`].

use std::collections::{HashMap, HashSet};

use tracing::warn;

use super::identity::IdentityResolver;
use super::model::{BracketMatch, BracketSide, MatchId, Outcome, RosterId, ScoringEntry, SideRef};

pub const MAX_REFERENCE_DEPTH: usize = 16;

/// Label and score of a side that is not decided yet.
pub const TBD: &str = "TBD";
/// Label of a side whose references could not be followed.
pub const UNRESOLVED: &str = "N/A";
pub const BYE: &str = "BYE";

/// Where following a side's references ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Roster(RosterId),
    /// The referenced match has no winner or loser yet, or the side is empty.
    Pending,
    Unresolved,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSide {
    pub label: String,
    pub score: Option<f64>,
    pub outcome: Outcome,
}

/// One match, rendered as two lines.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketCell {
    pub match_id: MatchId,
    pub team1: ResolvedSide,
    pub team2: ResolvedSide,
}

/// All matches of one round, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketColumn {
    pub round: u32,
    pub cells: Vec<BracketCell>,
}

/// Marker for one side given both sides' scores and its own label.
///
/// A bye always shows the bye marker. Otherwise a side wins when its score is
/// known and beats the opponent's (or the opponent has none), loses when the
/// opponent's score is known, and is unknown when neither applies.
pub fn side_outcome(label: &str, score: Option<f64>, opponent: Option<f64>) -> Outcome {
    if label == BYE {
        return Outcome::Bye;
    }
    match (score, opponent) {
        (Some(_), None) => Outcome::Win,
        (Some(own), Some(other)) if own > other => Outcome::Win,
        (_, Some(_)) => Outcome::Loss,
        (None, None) => Outcome::Unknown,
    }
}

pub struct BracketResolver<'a> {
    matches: HashMap<MatchId, &'a BracketMatch>,
    ordered: Vec<&'a BracketMatch>,
    identity: &'a IdentityResolver<'a>,
    scores: HashMap<RosterId, f64>,
    max_depth: usize,
}

impl<'a> BracketResolver<'a> {
    pub fn new(
        matches: &'a [BracketMatch],
        identity: &'a IdentityResolver<'a>,
        entries: &[ScoringEntry],
    ) -> Self {
        let mut ordered: Vec<&BracketMatch> = matches.iter().collect();
        ordered.sort_by_key(|m| (m.round, m.match_id));

        Self {
            matches: matches.iter().map(|m| (m.match_id, m)).collect(),
            ordered,
            identity,
            scores: entries.iter().map(|e| (e.roster_id, e.points)).collect(),
            max_depth: MAX_REFERENCE_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Follow `reference` until it names a roster.
    pub fn resolve(&self, reference: SideRef) -> Resolution {
        let mut visited = HashSet::new();
        self.follow(reference, &mut visited)
    }

    fn follow(&self, reference: SideRef, visited: &mut HashSet<MatchId>) -> Resolution {
        let (source_id, wants_winner) = match reference {
            SideRef::Roster(roster_id) => return Resolution::Roster(roster_id),
            SideRef::Empty => return Resolution::Pending,
            SideRef::WinnerOf(id) => (id, true),
            SideRef::LoserOf(id) => (id, false),
        };

        if visited.len() >= self.max_depth || !visited.insert(source_id) {
            warn!(
                match_id = source_id,
                hops = visited.len(),
                "🏆 ⚠️ Bracket reference loops or runs too deep"
            );
            return Resolution::Unresolved;
        }

        let Some(source) = self.matches.get(&source_id) else {
            warn!(match_id = source_id, "🏆 ⚠️ Bracket reference to unknown match");
            return Resolution::Unresolved;
        };

        let next = if wants_winner { source.winner } else { source.loser };
        match next {
            Some(next) => self.follow(next, visited),
            None => Resolution::Pending,
        }
    }

    /// Label and score of one side, before its marker is known.
    ///
    /// The weekly score only fills in for a side that names its roster
    /// directly. A side reached through another match shows the provider's
    /// score or nothing.
    fn side(&self, side: &BracketSide) -> (String, Option<f64>) {
        let resolution = self.resolve(side.reference);
        let score = side.score.or_else(|| match (side.reference, resolution) {
            (SideRef::Roster(_), Resolution::Roster(id)) => self.scores.get(&id).copied(),
            _ => None,
        });

        if let Some(name) = side.display_name.as_deref() {
            return (self.identity.leaf_label(name).to_string(), score);
        }

        match resolution {
            Resolution::Roster(id) => (self.identity.alias(id).to_string(), score),
            Resolution::Pending => (TBD.to_string(), None),
            Resolution::Unresolved => (UNRESOLVED.to_string(), None),
        }
    }

    pub fn cell(&self, bracket_match: &BracketMatch) -> BracketCell {
        let (label1, score1) = self.side(&bracket_match.team1);
        let (label2, score2) = self.side(&bracket_match.team2);

        BracketCell {
            match_id: bracket_match.match_id,
            team1: ResolvedSide {
                outcome: side_outcome(&label1, score1, score2),
                label: label1,
                score: score1,
            },
            team2: ResolvedSide {
                outcome: side_outcome(&label2, score2, score1),
                label: label2,
                score: score2,
            },
        }
    }

    /// One column per round, rounds ascending, matches ordered by id.
    pub fn columns(&self) -> Vec<BracketColumn> {
        let mut columns: Vec<BracketColumn> = Vec::new();

        for bracket_match in &self.ordered {
            let cell = self.cell(bracket_match);
            match columns.last_mut() {
                Some(column) if column.round == bracket_match.round => column.cells.push(cell),
                _ => columns.push(BracketColumn {
                    round: bracket_match.round,
                    cells: vec![cell],
                }),
            }
        }

        columns
    }
}
