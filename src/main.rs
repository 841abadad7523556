use chrono::Utc;
use sleeper_recap::{
    config::{Config, LeaguesFile},
    discord::{Publisher, RetryPolicy, http_sender},
    error::AppError,
    logging,
    runner::{RunOutcome, Runner},
    sleeper::SleeperClient,
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    logging::init();

    info!("🏈 Starting...");

    match run().await {
        Ok(outcome) => info!(?outcome, "✅ Done"),
        Err(e) => {
            error!(error = %e, "❌ Run failed");
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<RunOutcome, AppError> {
    let config = Config::from_env()?;
    let leagues = LeaguesFile::load(&config.leagues_file)?;

    let client = SleeperClient::new(
        config.sleeper_base_url.as_str(),
        config.sleeper_rate_limit_per_minute,
    );
    let publisher = Publisher::new(
        http_sender(&config.discord_token),
        config.channel_id,
        RetryPolicy {
            attempts: config.send_attempts,
            delay: config.send_retry_delay,
        },
    );

    Runner::new(client, publisher, leagues, config.week_override)
        .run(config.run_mode, Utc::now())
        .await
}
