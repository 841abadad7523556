mod common;

use httpmock::prelude::*;
use sleeper_recap::{
    error::AppError,
    league::SideRef,
    sleeper::{SleeperClient, SnapshotScope, client::DEFAULT_RATE_LIMIT_PER_MINUTE, fetch_snapshot},
};

use common::{LEAGUE_ID, WEEK, mock_league};

fn client(server: &MockServer) -> SleeperClient {
    SleeperClient::new(server.base_url(), DEFAULT_RATE_LIMIT_PER_MINUTE)
}

#[tokio::test]
async fn rosters_decode_into_dtos() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/league/{LEAGUE_ID}/rosters"));
            then.status(200).json_body(common::rosters());
        })
        .await;

    let rosters = client(&server).get_rosters(LEAGUE_ID).await.unwrap();

    mock.assert_async().await;
    assert_eq!(rosters.len(), 4);
    assert_eq!(rosters[0].settings.fpts_decimal, 50);
    assert_eq!(rosters[3].settings.division, Some(2));
}

#[tokio::test]
async fn matchups_are_fetched_for_the_requested_week() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/league/{LEAGUE_ID}/matchups/12"));
            then.status(200).json_body(common::matchups());
        })
        .await;

    let matchups = client(&server).get_matchups(LEAGUE_ID, 12).await.unwrap();

    mock.assert_async().await;
    assert_eq!(matchups.len(), 4);
    assert_eq!(matchups[3].points, 61.3);
}

#[tokio::test]
async fn null_bracket_is_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/league/{LEAGUE_ID}/losers_bracket"));
            then.status(200).body("null");
        })
        .await;

    let bracket = client(&server).get_losers_bracket(LEAGUE_ID).await.unwrap();

    assert!(bracket.is_empty());
}

#[tokio::test]
async fn non_200_is_an_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/league/{LEAGUE_ID}/users"));
            then.status(404).body("league not found");
        })
        .await;

    let err = client(&server).get_users(LEAGUE_ID).await.unwrap_err();

    match err {
        AppError::SleeperApi { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "league not found");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn playoff_snapshot_contains_every_category() {
    let server = MockServer::start_async().await;
    mock_league(&server).await;

    let snapshot = fetch_snapshot(&client(&server), LEAGUE_ID, WEEK, SnapshotScope::Playoffs)
        .await
        .unwrap();

    assert_eq!(snapshot.rosters.len(), 4);
    assert_eq!(snapshot.users.len(), 4);
    assert_eq!(snapshot.entries.len(), 4);
    assert_eq!(snapshot.winners_bracket.len(), 3);
    assert!(snapshot.losers_bracket.is_empty());
    assert_eq!(snapshot.rosters[0].points_for, 400.5);
    assert_eq!(snapshot.winners_bracket[0].team1.reference, SideRef::WinnerOf(1));
}

#[tokio::test]
async fn season_snapshot_skips_brackets() {
    let server = MockServer::start_async().await;
    mock_league(&server).await;
    let brackets = server
        .mock_async(|when, then| {
            when.method(GET).path_contains("bracket");
            then.status(500);
        })
        .await;

    let snapshot = fetch_snapshot(&client(&server), LEAGUE_ID, WEEK, SnapshotScope::Season)
        .await
        .unwrap();

    brackets.assert_hits_async(0).await;
    assert!(snapshot.winners_bracket.is_empty());
    assert_eq!(snapshot.entries.len(), 4);
}

#[tokio::test]
async fn one_failing_category_fails_the_snapshot() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/league/{LEAGUE_ID}/rosters"));
            then.status(200).json_body(common::rosters());
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/league/{LEAGUE_ID}/users"));
            then.status(200).json_body(common::users());
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/league/{LEAGUE_ID}/matchups/{WEEK}"));
            then.status(503);
        })
        .await;

    let res = fetch_snapshot(&client(&server), LEAGUE_ID, WEEK, SnapshotScope::Season).await;

    assert!(matches!(res, Err(AppError::SleeperApi { status: 503, .. })));
}

#[tokio::test]
#[ignore = "Network access and a real league id required"]
async fn live_league_snapshot() {
    dotenvy::dotenv().ok();
    let league_id = std::env::var("SLEEPER_LEAGUE_ID").expect("SLEEPER_LEAGUE_ID not set");

    let snapshot = fetch_snapshot(&SleeperClient::default(), &league_id, 1, SnapshotScope::Season)
        .await
        .unwrap();

    assert!(!snapshot.rosters.is_empty());
}
