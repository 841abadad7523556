//! Wire representations of the Sleeper API responses.
//!
//! Sleeper omits or nulls most fields early in a season, so nearly everything
//! here is defaulted. Conversion into the core model happens through `From`.

use serde::{Deserialize, Deserializer};

use crate::league::model::{
    BracketMatch, BracketSide, Roster, ScoringEntry, SideRef, User, combine_points,
};

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterSettingsDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub wins: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub losses: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fpts: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fpts_decimal: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fpts_against: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fpts_against_decimal: u32,
    #[serde(default)]
    pub division: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterDto {
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub settings: RosterSettingsDto,
}

impl From<RosterDto> for Roster {
    fn from(dto: RosterDto) -> Self {
        let s = dto.settings;
        Self {
            roster_id: dto.roster_id,
            owner_id: dto.owner_id,
            wins: s.wins,
            losses: s.losses,
            points_for: combine_points(s.fpts, s.fpts_decimal),
            points_against: combine_points(s.fpts_against, s.fpts_against_decimal),
            division: s.division,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserMetadataDto {
    #[serde(default)]
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserDto {
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: UserMetadataDto,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            user_id: dto.user_id,
            display_name: dto.display_name,
            team_name: dto.metadata.team_name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchupDto {
    pub roster_id: u32,
    #[serde(default)]
    pub matchup_id: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: f64,
}

impl From<MatchupDto> for ScoringEntry {
    fn from(dto: MatchupDto) -> Self {
        Self {
            matchup_id: dto.matchup_id,
            roster_id: dto.roster_id,
            points: dto.points,
        }
    }
}

/// `{"w": 1}` or `{"l": 1}`: the winner or loser of match 1.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FromRefDto {
    #[serde(default)]
    pub w: Option<u32>,
    #[serde(default)]
    pub l: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BracketMatchDto {
    pub r: u32,
    pub m: u32,
    #[serde(default)]
    pub t1: Option<u32>,
    #[serde(default)]
    pub t2: Option<u32>,
    #[serde(default)]
    pub t1_from: Option<FromRefDto>,
    #[serde(default)]
    pub t2_from: Option<FromRefDto>,
    #[serde(default)]
    pub w: Option<u32>,
    #[serde(default)]
    pub l: Option<u32>,
    #[serde(default)]
    pub t1_display_name: Option<String>,
    #[serde(default)]
    pub t2_display_name: Option<String>,
    #[serde(default)]
    pub t1_score: Option<f64>,
    #[serde(default)]
    pub t2_score: Option<f64>,
}

/// A concrete roster wins over a reference once Sleeper has filled it in.
fn side_ref(roster: Option<u32>, from: Option<FromRefDto>) -> SideRef {
    match (roster, from) {
        (Some(id), _) => SideRef::Roster(id),
        (None, Some(FromRefDto { w: Some(m), .. })) => SideRef::WinnerOf(m),
        (None, Some(FromRefDto { l: Some(m), .. })) => SideRef::LoserOf(m),
        _ => SideRef::Empty,
    }
}

impl From<BracketMatchDto> for BracketMatch {
    fn from(dto: BracketMatchDto) -> Self {
        Self {
            match_id: dto.m,
            round: dto.r,
            team1: BracketSide {
                reference: side_ref(dto.t1, dto.t1_from),
                display_name: dto.t1_display_name,
                score: dto.t1_score,
            },
            team2: BracketSide {
                reference: side_ref(dto.t2, dto.t2_from),
                display_name: dto.t2_display_name,
                score: dto.t2_score,
            },
            winner: dto.w.map(SideRef::Roster),
            loser: dto.l.map(SideRef::Roster),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_combines_decimal_points() {
        let dto: RosterDto = serde_json::from_str(
            r#"{
                "roster_id": 3,
                "owner_id": "42",
                "settings": {
                    "wins": 9, "losses": 4,
                    "fpts": 1502, "fpts_decimal": 50,
                    "fpts_against": 1320, "fpts_against_decimal": 7,
                    "division": 2
                }
            }"#,
        )
        .unwrap();

        let roster = Roster::from(dto);

        assert_eq!(roster.points_for, 1502.5);
        assert!((roster.points_against - 1320.07).abs() < 1e-9);
        assert_eq!(roster.division, Some(2));
        assert_eq!(roster.owner_id.as_deref(), Some("42"));
    }

    #[test]
    fn preseason_roster_defaults_missing_fields() {
        let dto: RosterDto =
            serde_json::from_str(r#"{"roster_id": 1, "owner_id": null, "settings": {"wins": 0}}"#)
                .unwrap();

        let roster = Roster::from(dto);

        assert_eq!(roster.points_for, 0.0);
        assert_eq!(roster.owner_id, None);
        assert_eq!(roster.division, None);
    }

    #[test]
    fn user_without_metadata_has_no_team_name() {
        let dto: UserDto =
            serde_json::from_str(r#"{"user_id": "1", "display_name": "AshG82", "metadata": null}"#)
                .unwrap();

        let user = User::from(dto);

        assert_eq!(user.display_name, "AshG82");
        assert_eq!(user.team_name, None);
    }

    #[test]
    fn matchup_with_null_points_scores_zero() {
        let dto: MatchupDto =
            serde_json::from_str(r#"{"roster_id": 4, "matchup_id": null, "points": null}"#)
                .unwrap();

        let entry = ScoringEntry::from(dto);

        assert_eq!(entry.matchup_id, None);
        assert_eq!(entry.points, 0.0);
    }

    #[test]
    fn bracket_sides_map_to_references() {
        let dto: BracketMatchDto = serde_json::from_str(
            r#"{"r": 2, "m": 5, "t1": null, "t2": 7,
                "t1_from": {"w": 1}, "t2_from": {"l": 2},
                "w": null, "l": null, "p": 1}"#,
        )
        .unwrap();

        let m = BracketMatch::from(dto);

        assert_eq!(m.team1.reference, SideRef::WinnerOf(1));
        assert_eq!(m.team2.reference, SideRef::Roster(7));
        assert_eq!(m.winner, None);
    }

    #[test]
    fn loser_reference_and_empty_side() {
        let dto: BracketMatchDto =
            serde_json::from_str(r#"{"r": 3, "m": 9, "t1_from": {"l": 4}, "w": 2, "l": 6}"#)
                .unwrap();

        let m = BracketMatch::from(dto);

        assert_eq!(m.team1.reference, SideRef::LoserOf(4));
        assert_eq!(m.team2.reference, SideRef::Empty);
        assert_eq!(m.winner, Some(SideRef::Roster(2)));
        assert_eq!(m.loser, Some(SideRef::Roster(6)));
    }
}
