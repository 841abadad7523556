use std::cmp::Ordering;

use tracing::debug;

use super::identity::IdentityResolver;
use super::model::{Roster, RosterId};

#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub roster_id: RosterId,
    pub team_name: String,
    pub alias: String,
    pub wins: u32,
    pub losses: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub division: Option<u32>,
}

/// Standings of one division, in rank order.
#[derive(Debug, Clone, PartialEq)]
pub struct Division {
    pub tag: u32,
    pub standings: Vec<Standing>,
}

/// Join every roster with its owner's names. Order follows `rosters`.
pub fn build_standings(rosters: &[Roster], identity: &IdentityResolver<'_>) -> Vec<Standing> {
    rosters
        .iter()
        .map(|roster| Standing {
            roster_id: roster.roster_id,
            team_name: identity.team_name(roster.roster_id).to_string(),
            alias: identity.alias(roster.roster_id).to_string(),
            wins: roster.wins,
            losses: roster.losses,
            points_for: roster.points_for,
            points_against: roster.points_against,
            division: roster.division,
        })
        .collect()
}

/// Wins descending, then points for descending, then points against ascending.
pub fn compare_standings(a: &Standing, b: &Standing) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then_with(|| b.points_for.total_cmp(&a.points_for))
        .then_with(|| a.points_against.total_cmp(&b.points_against))
}

/// Stable: records equal on every key keep their input order.
pub fn rank(mut standings: Vec<Standing>) -> Vec<Standing> {
    standings.sort_by(compare_standings);
    standings
}

/// One sequence per configured division tag, in the order the tags are given.
///
/// Records with no tag, or a tag that is not configured, are left out of
/// every division.
pub fn split_by_division(ranked: &[Standing], tags: &[u32]) -> Vec<Division> {
    let divisions: Vec<Division> = tags
        .iter()
        .map(|&tag| Division {
            tag,
            standings: ranked
                .iter()
                .filter(|s| s.division == Some(tag))
                .cloned()
                .collect(),
        })
        .collect();

    let placed: usize = divisions.iter().map(|d| d.standings.len()).sum();
    if placed < ranked.len() {
        debug!(
            dropped = ranked.len() - placed,
            "📊 Standings outside the configured divisions were left out"
        );
    }

    divisions
}
