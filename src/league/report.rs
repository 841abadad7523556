use super::bracket::{BracketColumn, BracketResolver};
use super::identity::IdentityResolver;
use super::matchups::{LowestScorer, Matchup, lowest_scorer_view, pair_matchups};
use super::model::{BracketMatch, LeagueSnapshot, NicknameDirectory};
use super::standings::{Standing, build_standings, rank, split_by_division};

/// Static per-league settings the views depend on.
#[derive(Debug, Clone, Copy)]
pub struct LeagueSettings<'a> {
    /// Division tags to split standings by. Empty means one table.
    pub divisions: &'a [u32],
    pub nicknames: &'a NicknameDirectory,
    pub placeholder_team_names: &'a [String],
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandingsGroup {
    /// `None` for a league without divisions.
    pub division: Option<u32>,
    pub standings: Vec<Standing>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandingsView {
    pub groups: Vec<StandingsGroup>,
}

/// Regular season views of one league for one week.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonReport {
    pub standings: StandingsView,
    pub matchups: Vec<Matchup>,
    pub lowest_scorer: Option<LowestScorer>,
}

/// Both playoff brackets of one league.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayoffReport {
    pub winners: Vec<BracketColumn>,
    pub losers: Vec<BracketColumn>,
}

fn identity<'a>(
    snapshot: &'a LeagueSnapshot,
    settings: &LeagueSettings<'a>,
) -> IdentityResolver<'a> {
    IdentityResolver::new(&snapshot.rosters, &snapshot.users, settings.nicknames)
        .with_placeholder_team_names(settings.placeholder_team_names)
}

pub fn standings_view(snapshot: &LeagueSnapshot, settings: &LeagueSettings<'_>) -> StandingsView {
    let identity = identity(snapshot, settings);
    let ranked = rank(build_standings(&snapshot.rosters, &identity));

    let groups = if settings.divisions.is_empty() {
        vec![StandingsGroup {
            division: None,
            standings: ranked,
        }]
    } else {
        split_by_division(&ranked, settings.divisions)
            .into_iter()
            .map(|division| StandingsGroup {
                division: Some(division.tag),
                standings: division.standings,
            })
            .collect()
    };

    StandingsView { groups }
}

impl SeasonReport {
    pub fn build(snapshot: &LeagueSnapshot, settings: &LeagueSettings<'_>) -> Self {
        let identity = identity(snapshot, settings);

        Self {
            standings: standings_view(snapshot, settings),
            matchups: pair_matchups(&snapshot.entries, &identity),
            lowest_scorer: lowest_scorer_view(&snapshot.entries, &identity),
        }
    }
}

fn bracket_columns(
    matches: &[BracketMatch],
    snapshot: &LeagueSnapshot,
    identity: &IdentityResolver<'_>,
) -> Vec<BracketColumn> {
    BracketResolver::new(matches, identity, &snapshot.entries).columns()
}

impl PlayoffReport {
    pub fn build(snapshot: &LeagueSnapshot, settings: &LeagueSettings<'_>) -> Self {
        let identity = identity(snapshot, settings);

        Self {
            winners: bracket_columns(&snapshot.winners_bracket, snapshot, &identity),
            losers: bracket_columns(&snapshot.losers_bracket, snapshot, &identity),
        }
    }
}
