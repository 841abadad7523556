//! Tracing subscriber setup.
//!
//! `RUST_LOG` filters (default `info`), `LOG_FORMAT=json` switches to JSON
//! lines, and `LOG_DIR` adds a daily rotated log file next to stdout.

use std::{env, sync::OnceLock};

use tracing_appender::{
    non_blocking,
    non_blocking::NonBlocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{MakeWriter, fmt, time::ChronoLocal, writer::MakeWriterExt},
};

/// Keeps the file writer alive so buffered lines get flushed on exit.
static LOG_GUARD: OnceLock<non_blocking::WorkerGuard> = OnceLock::new();

const LOG_FILE_PREFIX: &str = "sleeper-recap.log";

pub fn init() {
    let json = env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let file = env::var("LOG_DIR").ok().and_then(init_file_writer);

    match file {
        Some(file) => {
            let stdout = std::io::stdout.with_max_level(tracing::Level::INFO);
            install(stdout.and(file), json);
        }
        None => install(std::io::stdout, json),
    }

    tracing::info!(json, "📝 Logger initialized");
}

fn install<W>(writer: W, json: bool)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_level(true)
        .with_writer(writer);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(true).init();
    }
}

fn init_file_writer(dir: String) -> Option<NonBlocking> {
    let max_files = env::var("LOG_MAX_FILES")
        .ok()
        .and_then(|v| v.parse::<usize>().ok());

    let mut file_builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX);

    if let Some(n) = max_files {
        file_builder = file_builder.max_log_files(n);
    }

    let file_appender = match file_builder.build(&dir) {
        Ok(appender) => appender,
        Err(e) => {
            // The subscriber is not installed yet.
            eprintln!("failed to create log file in {dir}: {e}");
            return None;
        }
    };

    let (file_writer, guard) = non_blocking(file_appender);

    // Only the first init gets a file writer.
    LOG_GUARD.set(guard).ok()?;

    Some(file_writer)
}
