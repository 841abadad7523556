//! One invocation: pick the week, fetch every league, build the views and
//! post them.

use chrono::{DateTime, Utc};
use serenity::builder::CreateMessage;
use tracing::{error, info, warn};

use crate::config::{LeagueConfig, LeaguesFile, RunMode};
use crate::discord::embeds::{playoff_messages, results_message};
use crate::discord::{MessageSender, Publisher};
use crate::error::AppError;
use crate::league::{LeagueSnapshot, PlayoffReport, SeasonReport};
use crate::sleeper::{SleeperClient, SnapshotScope, fetch_snapshot};

/// What a run ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Posted { week: u32, messages: usize },
    /// Scheduled run outside the posting window.
    OutsideWindow,
    /// The season has not started and no week was pinned.
    NoCurrentWeek,
    /// Every league failed to fetch.
    NoLeagues,
}

pub struct Runner<S> {
    client: SleeperClient,
    publisher: Publisher<S>,
    leagues: LeaguesFile,
    week_override: Option<u32>,
}

impl<S: MessageSender> Runner<S> {
    pub fn new(
        client: SleeperClient,
        publisher: Publisher<S>,
        leagues: LeaguesFile,
        week_override: Option<u32>,
    ) -> Self {
        Self {
            client,
            publisher,
            leagues,
            week_override,
        }
    }

    /// The pinned week, otherwise the schedule's week for `now`.
    pub fn week(&self, now: DateTime<Utc>) -> Option<u32> {
        self.week_override
            .or_else(|| self.leagues.schedule.current_week(now.date_naive()))
    }

    pub async fn run(&self, mode: RunMode, now: DateTime<Utc>) -> Result<RunOutcome, AppError> {
        if mode == RunMode::Scheduled && !self.leagues.posting_window.contains(now) {
            info!(now = %now, "⏰ Outside the posting window, nothing to do");
            return Ok(RunOutcome::OutsideWindow);
        }

        let Some(week) = self.week(now) else {
            error!(today = %now.date_naive(), "📅 Could not determine the current week");
            return Ok(RunOutcome::NoCurrentWeek);
        };

        info!(%mode, week, leagues = self.leagues.leagues.len(), "🏈 Starting run");

        match mode {
            RunMode::Results | RunMode::Scheduled => self.run_results(week).await,
            RunMode::Playoffs => self.run_playoffs(week).await,
        }
    }

    async fn run_results(&self, week: u32) -> Result<RunOutcome, AppError> {
        let snapshots = self.fetch_all(week, SnapshotScope::Season).await;
        if snapshots.is_empty() {
            return Ok(RunOutcome::NoLeagues);
        }

        let reports: Vec<(&str, SeasonReport)> = snapshots
            .iter()
            .map(|(league, snapshot)| {
                (
                    league.name.as_str(),
                    SeasonReport::build(snapshot, &league.settings()),
                )
            })
            .collect();
        let views: Vec<(&str, &SeasonReport)> =
            reports.iter().map(|(name, report)| (*name, report)).collect();

        self.post(week, vec![results_message(week, &views)]).await
    }

    async fn run_playoffs(&self, week: u32) -> Result<RunOutcome, AppError> {
        let snapshots = self.fetch_all(week, SnapshotScope::Playoffs).await;
        if snapshots.is_empty() {
            return Ok(RunOutcome::NoLeagues);
        }

        let reports: Vec<(&str, PlayoffReport)> = snapshots
            .iter()
            .map(|(league, snapshot)| {
                (
                    league.name.as_str(),
                    PlayoffReport::build(snapshot, &league.settings()),
                )
            })
            .collect();
        let views: Vec<(&str, &PlayoffReport)> =
            reports.iter().map(|(name, report)| (*name, report)).collect();

        self.post(week, playoff_messages(week, &views)).await
    }

    async fn post(&self, week: u32, messages: Vec<CreateMessage>) -> Result<RunOutcome, AppError> {
        let count = messages.len();
        self.publisher.publish(messages).await?;
        Ok(RunOutcome::Posted {
            week,
            messages: count,
        })
    }

    /// Every league whose snapshot could be fetched, in configured order.
    async fn fetch_all(
        &self,
        week: u32,
        scope: SnapshotScope,
    ) -> Vec<(&LeagueConfig, LeagueSnapshot)> {
        let mut snapshots = Vec::with_capacity(self.leagues.leagues.len());

        for league in &self.leagues.leagues {
            match fetch_snapshot(&self.client, &league.id, week, scope).await {
                Ok(snapshot) => snapshots.push((league, snapshot)),
                Err(e) => warn!(
                    league_id = %league.id,
                    league = %league.name,
                    error = %e,
                    "📥 ⚠️ League unavailable, skipping"
                ),
            }
        }

        if snapshots.is_empty() {
            error!(week, "📥 ❌ No league could be fetched, nothing will be posted");
        }
        snapshots
    }
}
