use std::collections::{HashMap, HashSet};

use tracing::warn;

use super::identity::IdentityResolver;
use super::model::{Outcome, RosterId, ScoringEntry};

#[derive(Debug, Clone, PartialEq)]
pub struct MatchupSide {
    pub roster_id: RosterId,
    pub label: String,
    pub points: f64,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    pub matchup_id: u32,
    pub team1: MatchupSide,
    pub team2: MatchupSide,
}

/// The week's lowest scorer of one league.
#[derive(Debug, Clone, PartialEq)]
pub struct LowestScorer {
    pub label: String,
    pub points: f64,
}

/// Entries grouped by matchup id, groups in first-seen order.
///
/// Entries without a matchup id belong to no group.
pub fn group_by_matchup(entries: &[ScoringEntry]) -> Vec<(u32, Vec<&ScoringEntry>)> {
    let mut groups: Vec<(u32, Vec<&ScoringEntry>)> = Vec::new();
    let mut index: HashMap<u32, usize> = HashMap::new();

    for entry in entries {
        let Some(matchup_id) = entry.matchup_id else {
            continue;
        };
        let slot = *index.entry(matchup_id).or_insert_with(|| {
            groups.push((matchup_id, Vec::with_capacity(2)));
            groups.len() - 1
        });
        groups[slot].1.push(entry);
    }

    groups
}

fn valid_matchup_ids(entries: &[ScoringEntry]) -> HashSet<u32> {
    group_by_matchup(entries)
        .into_iter()
        .filter(|(_, group)| group.len() == 2)
        .map(|(id, _)| id)
        .collect()
}

/// Strictly more points wins; an exact tie shows neither side as the winner.
pub fn head_to_head(points: f64, opponent: f64) -> Outcome {
    if points > opponent {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}

/// Pair entries into two-sided matchups.
///
/// Only groups of exactly two entries form a matchup; any other group is
/// malformed and skipped with a warning.
pub fn pair_matchups(entries: &[ScoringEntry], identity: &IdentityResolver<'_>) -> Vec<Matchup> {
    group_by_matchup(entries)
        .into_iter()
        .filter_map(|(matchup_id, group)| {
            let [first, second] = group.as_slice() else {
                warn!(
                    matchup_id,
                    entries = group.len(),
                    "⚔️ ⚠️ Skipping malformed matchup"
                );
                return None;
            };

            let side = |entry: &ScoringEntry, opponent: &ScoringEntry| MatchupSide {
                roster_id: entry.roster_id,
                label: identity.label(entry.roster_id).to_string(),
                points: entry.points,
                outcome: head_to_head(entry.points, opponent.points),
            };

            Some(Matchup {
                matchup_id,
                team1: side(*first, *second),
                team2: side(*second, *first),
            })
        })
        .collect()
}

/// The single lowest-scoring entry among all entries that form a valid
/// matchup, across the whole league. Ties go to the first entry seen.
pub fn lowest_scorer(entries: &[ScoringEntry]) -> Option<&ScoringEntry> {
    let valid = valid_matchup_ids(entries);

    entries
        .iter()
        .filter(|entry| entry.matchup_id.is_some_and(|id| valid.contains(&id)))
        .reduce(|lowest, entry| {
            if entry.points < lowest.points {
                entry
            } else {
                lowest
            }
        })
}

pub fn lowest_scorer_view(
    entries: &[ScoringEntry],
    identity: &IdentityResolver<'_>,
) -> Option<LowestScorer> {
    lowest_scorer(entries).map(|entry| LowestScorer {
        label: identity.label(entry.roster_id).to_string(),
        points: entry.points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::model::{NicknameDirectory, Roster, User};

    fn entry(matchup_id: Option<u32>, roster_id: RosterId, points: f64) -> ScoringEntry {
        ScoringEntry {
            matchup_id,
            roster_id,
            points,
        }
    }

    fn league() -> (Vec<Roster>, Vec<User>, NicknameDirectory) {
        let rosters = (1..=4)
            .map(|id| Roster {
                roster_id: id,
                owner_id: Some(format!("u{id}")),
                wins: 0,
                losses: 0,
                points_for: 0.0,
                points_against: 0.0,
                division: None,
            })
            .collect();
        let users = ["TeamA", "TeamB", "TeamC", "TeamD"]
            .iter()
            .enumerate()
            .map(|(i, name)| User {
                user_id: format!("u{}", i + 1),
                display_name: name.to_string(),
                team_name: None,
            })
            .collect();
        (rosters, users, NicknameDirectory::default())
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let entries = vec![
            entry(Some(3), 1, 1.0),
            entry(Some(1), 2, 1.0),
            entry(None, 5, 1.0),
            entry(Some(3), 3, 1.0),
            entry(Some(1), 4, 1.0),
        ];

        let groups = group_by_matchup(&entries);

        let ids: Vec<u32> = groups.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn only_groups_of_two_become_matchups() {
        let (rosters, users, nicknames) = league();
        let identity = IdentityResolver::new(&rosters, &users, &nicknames);
        let entries = vec![
            entry(Some(1), 1, 10.0),
            entry(Some(2), 2, 20.0),
            entry(Some(2), 3, 30.0),
            entry(Some(2), 4, 40.0),
            entry(Some(3), 1, 11.0),
            entry(Some(3), 2, 12.0),
        ];

        let matchups = pair_matchups(&entries, &identity);

        assert_eq!(matchups.len(), 1);
        assert_eq!(matchups[0].matchup_id, 3);
        assert_eq!(matchups[0].team1.label, "TeamA");
        assert_eq!(matchups[0].team2.label, "TeamB");
    }

    #[test]
    fn higher_score_wins() {
        let (rosters, users, nicknames) = league();
        let identity = IdentityResolver::new(&rosters, &users, &nicknames);
        let entries = vec![entry(Some(1), 1, 10.0), entry(Some(1), 2, 7.5)];

        let matchups = pair_matchups(&entries, &identity);

        assert_eq!(matchups[0].team1.outcome, Outcome::Win);
        assert_eq!(matchups[0].team2.outcome, Outcome::Loss);
    }

    #[test]
    fn exact_tie_marks_no_winner() {
        let (rosters, users, nicknames) = league();
        let identity = IdentityResolver::new(&rosters, &users, &nicknames);
        let entries = vec![entry(Some(1), 1, 5.0), entry(Some(1), 2, 5.0)];

        let matchups = pair_matchups(&entries, &identity);

        assert_eq!(matchups[0].team1.outcome, Outcome::Loss);
        assert_eq!(matchups[0].team2.outcome, Outcome::Loss);
    }

    #[test]
    fn lowest_scorer_spans_every_matchup() {
        let (rosters, users, nicknames) = league();
        let identity = IdentityResolver::new(&rosters, &users, &nicknames);
        let entries = vec![
            entry(Some(1), 1, 12.4),
            entry(Some(2), 2, 0.0),
            entry(Some(2), 3, 55.2),
            entry(Some(1), 4, 80.0),
        ];

        let lowest = lowest_scorer_view(&entries, &identity).unwrap();

        assert_eq!(lowest.label, "TeamB");
        assert_eq!(lowest.points, 0.0);
    }

    #[test]
    fn labels_prefer_nickname_over_custom_team_name() {
        let (rosters, mut users, _) = league();
        users[0].team_name = Some("Gridiron Gang".to_string());
        let nicknames: NicknameDirectory = [("TeamA", "Calum")].into_iter().collect();
        let identity = IdentityResolver::new(&rosters, &users, &nicknames);
        let entries = vec![entry(Some(1), 1, 61.3), entry(Some(1), 2, 98.2)];

        let matchups = pair_matchups(&entries, &identity);
        let lowest = lowest_scorer_view(&entries, &identity).unwrap();

        assert_eq!(matchups[0].team1.label, "Calum");
        assert_eq!(matchups[0].team2.label, "TeamB");
        assert_eq!(lowest.label, "Calum");
    }

    #[test]
    fn lowest_scorer_tie_goes_to_first_seen() {
        let entries = vec![
            entry(Some(1), 1, 50.0),
            entry(Some(2), 2, 3.0),
            entry(Some(1), 3, 3.0),
            entry(Some(2), 4, 9.0),
        ];

        assert_eq!(lowest_scorer(&entries).unwrap().roster_id, 2);
    }

    #[test]
    fn lowest_scorer_ignores_unpaired_entries() {
        let entries = vec![
            entry(Some(1), 1, 50.0),
            entry(Some(1), 2, 40.0),
            entry(Some(9), 3, 1.0),
            entry(None, 4, 0.0),
        ];

        assert_eq!(lowest_scorer(&entries).unwrap().roster_id, 2);
        assert!(lowest_scorer(&entries[2..]).is_none());
    }
}
