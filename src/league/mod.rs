//! The league engine: joins a fetched snapshot into standings, matchups,
//! lowest scorers and playoff brackets, and renders them as text.
//!
//! Everything in here is synchronous and works on borrowed snapshot data.

pub mod bracket;
pub mod identity;
pub mod matchups;
pub mod model;
pub mod render;
pub mod report;
pub mod standings;

pub use bracket::{BracketCell, BracketColumn, BracketResolver, ResolvedSide};
pub use identity::IdentityResolver;
pub use matchups::{LowestScorer, Matchup, MatchupSide};
pub use model::{
    BracketMatch, BracketSide, LeagueSnapshot, MatchId, NicknameDirectory, Outcome, Roster,
    RosterId, ScoringEntry, SideRef, User,
};
pub use report::{LeagueSettings, PlayoffReport, SeasonReport, StandingsGroup, StandingsView};
pub use standings::{Division, Standing};
