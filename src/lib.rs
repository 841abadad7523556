pub mod config;
pub mod discord;
pub mod error;
pub mod league;
pub mod logging;
pub mod runner;
pub mod schedule;
pub mod sleeper;
