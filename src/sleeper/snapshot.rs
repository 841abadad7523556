use tracing::info;

use super::client::SleeperClient;
use super::types::BracketMatchDto;
use crate::error::AppError;
use crate::league::model::{BracketMatch, LeagueSnapshot};

/// Which categories a run needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotScope {
    /// Rosters, users and the week's matchups.
    Season,
    /// Everything in `Season` plus both playoff brackets.
    Playoffs,
}

fn into_matches(dtos: Vec<BracketMatchDto>) -> Vec<BracketMatch> {
    dtos.into_iter().map(Into::into).collect()
}

/// Fetch every category of one league concurrently.
///
/// All or nothing: the first failing request fails the whole snapshot.
pub async fn fetch_snapshot(
    client: &SleeperClient,
    league_id: &str,
    week: u32,
    scope: SnapshotScope,
) -> Result<LeagueSnapshot, AppError> {
    let season = async {
        tokio::try_join!(
            client.get_rosters(league_id),
            client.get_users(league_id),
            client.get_matchups(league_id, week),
        )
    };

    let (rosters, users, matchups, winners, losers) = match scope {
        SnapshotScope::Season => {
            let (rosters, users, matchups) = season.await?;
            (rosters, users, matchups, Vec::new(), Vec::new())
        }
        SnapshotScope::Playoffs => {
            let ((rosters, users, matchups), winners, losers) = tokio::try_join!(
                season,
                client.get_winners_bracket(league_id),
                client.get_losers_bracket(league_id),
            )?;
            (rosters, users, matchups, winners, losers)
        }
    };

    info!(
        league_id,
        week,
        rosters = rosters.len(),
        entries = matchups.len(),
        bracket_matches = winners.len() + losers.len(),
        "📥 Fetched league snapshot"
    );

    Ok(LeagueSnapshot {
        rosters: rosters.into_iter().map(Into::into).collect(),
        users: users.into_iter().map(Into::into).collect(),
        entries: matchups.into_iter().map(Into::into).collect(),
        winners_bracket: into_matches(winners),
        losers_bracket: into_matches(losers),
    })
}
