use std::env;
use std::fmt;
use std::fs;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use serenity::model::id::ChannelId;

use crate::error::AppError;
use crate::league::{LeagueSettings, NicknameDirectory};
use crate::schedule::{PostingWindow, Schedule};
use crate::sleeper::client::{DEFAULT_BASE_URL, DEFAULT_RATE_LIMIT_PER_MINUTE};

/// What a single invocation posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Standings, matchups and lowest scorers.
    #[default]
    Results,
    /// Championship and consolation brackets.
    Playoffs,
    /// `Results`, but only inside the weekly posting window.
    Scheduled,
}

impl FromStr for RunMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "results" => Ok(Self::Results),
            "playoffs" => Ok(Self::Playoffs),
            "scheduled" => Ok(Self::Scheduled),
            other => Err(AppError::Config(format!(
                "RUN_MODE must be one of results, playoffs, scheduled (got {other:?})"
            ))),
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Results => "results",
            Self::Playoffs => "playoffs",
            Self::Scheduled => "scheduled",
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub channel_id: ChannelId,
    pub leagues_file: PathBuf,
    pub run_mode: RunMode,
    /// Pins the week instead of reading it off the schedule.
    pub week_override: Option<u32>,
    pub sleeper_base_url: String,
    pub sleeper_rate_limit_per_minute: NonZeroU32,
    pub send_attempts: u32,
    pub send_retry_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        const DEFAULT_LEAGUES_FILE: &str = "leagues.json";
        const DEFAULT_SEND_ATTEMPTS: u32 = 3;
        const DEFAULT_SEND_RETRY_DELAY_MS: u64 = 1000;

        let discord_token = lookup("DISCORD_BOT_TOKEN")
            .ok_or_else(|| AppError::Config("DISCORD_BOT_TOKEN must be set".into()))?;

        let channel_id = lookup("CHANNEL_ID")
            .ok_or_else(|| AppError::Config("CHANNEL_ID must be set".into()))?
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .map(ChannelId::new)
            .ok_or_else(|| AppError::Config("CHANNEL_ID must be a non-zero integer".into()))?;

        let leagues_file: PathBuf = lookup("LEAGUES_FILE")
            .unwrap_or_else(|| DEFAULT_LEAGUES_FILE.into())
            .into();

        let run_mode = match lookup("RUN_MODE") {
            Some(v) => v.parse()?,
            None => RunMode::default(),
        };

        let week_override = match lookup("WEEK") {
            Some(v) => Some(v.trim().parse().map_err(|_| {
                AppError::Config(format!("WEEK must be a week number (got {v:?})"))
            })?),
            None => None,
        };

        let sleeper_base_url =
            lookup("SLEEPER_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());

        let sleeper_rate_limit_per_minute = lookup("SLEEPER_RATE_LIMIT_PER_MINUTE")
            .and_then(|v| v.parse().ok())
            .and_then(NonZeroU32::new)
            .unwrap_or(DEFAULT_RATE_LIMIT_PER_MINUTE);

        let send_attempts = lookup("SEND_ATTEMPTS")
            .and_then(|v| v.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_SEND_ATTEMPTS);

        let send_retry_delay = Duration::from_millis(
            lookup("SEND_RETRY_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SEND_RETRY_DELAY_MS),
        );

        Ok(Self {
            discord_token,
            channel_id,
            leagues_file,
            run_mode,
            week_override,
            sleeper_base_url,
            sleeper_rate_limit_per_minute,
            send_attempts,
            send_retry_delay,
        })
    }
}

/// One Sleeper league to report on.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueConfig {
    pub id: String,
    pub name: String,
    /// Division tags in display order. Empty means one standings table.
    #[serde(default)]
    pub divisions: Vec<u32>,
    #[serde(default)]
    pub nicknames: NicknameDirectory,
    /// Team names that mean the owner never picked one.
    #[serde(default)]
    pub placeholder_team_names: Vec<String>,
}

impl LeagueConfig {
    pub fn settings(&self) -> LeagueSettings<'_> {
        LeagueSettings {
            divisions: &self.divisions,
            nicknames: &self.nicknames,
            placeholder_team_names: &self.placeholder_team_names,
        }
    }
}

/// Contents of the leagues file.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaguesFile {
    #[serde(default)]
    pub schedule: Schedule,
    #[serde(default)]
    pub posting_window: PostingWindow,
    pub leagues: Vec<LeagueConfig>,
}

impl LeaguesFile {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let file: Self = serde_json::from_str(raw)?;
        if file.leagues.is_empty() {
            return Err(AppError::Config("leagues file lists no leagues".into()));
        }
        Ok(file)
    }
}
