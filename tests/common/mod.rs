#![allow(dead_code)]

use httpmock::prelude::*;
use serde_json::{Value, json};

pub const LEAGUE_ID: &str = "1048";
pub const WEEK: u32 = 5;

pub fn rosters() -> Value {
    json!([
        {
            "roster_id": 1, "owner_id": "u1",
            "settings": {"wins": 3, "losses": 1, "fpts": 400, "fpts_decimal": 50,
                         "fpts_against": 300, "fpts_against_decimal": 0, "division": 1}
        },
        {
            "roster_id": 2, "owner_id": "u2",
            "settings": {"wins": 3, "losses": 1, "fpts": 380, "fpts_decimal": 0,
                         "fpts_against": 310, "fpts_against_decimal": 25, "division": 2}
        },
        {
            "roster_id": 3, "owner_id": "u3",
            "settings": {"wins": 2, "losses": 2, "fpts": 390, "fpts_decimal": 10,
                         "fpts_against": 350, "fpts_against_decimal": 0, "division": 1}
        },
        {
            "roster_id": 4, "owner_id": "u4",
            "settings": {"wins": 0, "losses": 4, "fpts": 250, "fpts_decimal": 75,
                         "fpts_against": 410, "fpts_against_decimal": 0, "division": 2}
        }
    ])
}

pub fn users() -> Value {
    json!([
        {"user_id": "u1", "display_name": "calummurray14", "metadata": {"team_name": "Gridiron Gang"}},
        {"user_id": "u2", "display_name": "AshG82", "metadata": {}},
        {"user_id": "u3", "display_name": "Fergus75", "metadata": {"team_name": "blahblah"}},
        {"user_id": "u4", "display_name": "Kroftszn", "metadata": null}
    ])
}

pub fn matchups() -> Value {
    json!([
        {"roster_id": 1, "matchup_id": 1, "points": 120.5},
        {"roster_id": 3, "matchup_id": 2, "points": 88.0},
        {"roster_id": 2, "matchup_id": 1, "points": 98.2},
        {"roster_id": 4, "matchup_id": 2, "points": 61.3}
    ])
}

pub fn winners_bracket() -> Value {
    json!([
        {"r": 2, "m": 3, "t1": null, "t2": null,
         "t1_from": {"w": 1}, "t2_from": {"w": 2}, "w": null, "l": null, "p": 1},
        {"r": 1, "m": 1, "t1": 1, "t2": 4, "w": 1, "l": 4},
        {"r": 1, "m": 2, "t1": 2, "t2": 3, "w": null, "l": null}
    ])
}

pub fn leagues_json(league_id: &str) -> String {
    json!({
        "schedule": {"3": "2024-09-26", "4": "2024-10-01", "5": "2024-10-08"},
        "leagues": [{
            "id": league_id,
            "name": "C and O league 1",
            "divisions": [1, 2],
            "nicknames": {"calummurray14": "Calum", "AshG82": "Ash", "Fergus75": "Fergus"},
            "placeholder_team_names": ["blahblah"]
        }]
    })
    .to_string()
}

/// Serve every Sleeper endpoint of the fixture league.
pub async fn mock_league(server: &MockServer) {
    let routes = [
        (format!("/league/{LEAGUE_ID}/rosters"), rosters()),
        (format!("/league/{LEAGUE_ID}/users"), users()),
        (format!("/league/{LEAGUE_ID}/matchups/{WEEK}"), matchups()),
        (format!("/league/{LEAGUE_ID}/winners_bracket"), winners_bracket()),
        (format!("/league/{LEAGUE_ID}/losers_bracket"), Value::Null),
    ];

    for (path, body) in routes {
        server
            .mock_async(|when, then| {
                when.method(GET).path(path);
                then.status(200).json_body(body);
            })
            .await;
    }
}
