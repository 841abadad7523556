use tracing::trace;

use super::client::SleeperClient;
use super::types::{BracketMatchDto, MatchupDto, RosterDto, UserDto};
use crate::error::AppError;

impl SleeperClient {
    pub async fn get_rosters(&self, league_id: &str) -> Result<Vec<RosterDto>, AppError> {
        trace!(league_id, "get_rosters");
        self.get(&format!("league/{league_id}/rosters")).await
    }

    pub async fn get_users(&self, league_id: &str) -> Result<Vec<UserDto>, AppError> {
        trace!(league_id, "get_users");
        self.get(&format!("league/{league_id}/users")).await
    }

    pub async fn get_matchups(
        &self,
        league_id: &str,
        week: u32,
    ) -> Result<Vec<MatchupDto>, AppError> {
        trace!(league_id, week, "get_matchups");
        self.get(&format!("league/{league_id}/matchups/{week}"))
            .await
    }

    /// Empty until the playoff bracket has been generated.
    pub async fn get_winners_bracket(
        &self,
        league_id: &str,
    ) -> Result<Vec<BracketMatchDto>, AppError> {
        trace!(league_id, "get_winners_bracket");
        self.get_bracket(league_id, "winners_bracket").await
    }

    /// Empty until the playoff bracket has been generated.
    pub async fn get_losers_bracket(
        &self,
        league_id: &str,
    ) -> Result<Vec<BracketMatchDto>, AppError> {
        trace!(league_id, "get_losers_bracket");
        self.get_bracket(league_id, "losers_bracket").await
    }

    async fn get_bracket(
        &self,
        league_id: &str,
        kind: &str,
    ) -> Result<Vec<BracketMatchDto>, AppError> {
        let bracket: Option<Vec<BracketMatchDto>> =
            self.get(&format!("league/{league_id}/{kind}")).await?;
        Ok(bracket.unwrap_or_default())
    }
}
