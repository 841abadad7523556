//! Roster → owner → display name resolution.
//!
//! Every label is picked from an ordered list of candidates, first present
//! wins:
//!
//! | label       | candidates                                                  |
//! |-------------|-------------------------------------------------------------|
//! | `username`  | owner display name, "Unknown User"                          |
//! | `alias`     | nickname of username, username, "Unknown User"              |
//! | `team_name` | custom team name, username, "Unknown User"                  |
//! | `label`     | alias, "Unknown User"                                       |
//!
//! A roster id that is not in the snapshot at all yields "Unknown Team" for
//! `team_name` and `label`. Nicknames are always looked up by username, never
//! by team name.

use std::collections::HashMap;

use super::model::{NicknameDirectory, Roster, RosterId, User};

pub const UNKNOWN_USER: &str = "Unknown User";
pub const UNKNOWN_TEAM: &str = "Unknown Team";

fn first_present<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<&'a str> {
    candidates.into_iter().flatten().next()
}

#[derive(Debug, Clone)]
pub struct IdentityResolver<'a> {
    rosters: HashMap<RosterId, &'a Roster>,
    users: HashMap<&'a str, &'a User>,
    nicknames: &'a NicknameDirectory,
    placeholder_team_names: &'a [String],
}

impl<'a> IdentityResolver<'a> {
    pub fn new(rosters: &'a [Roster], users: &'a [User], nicknames: &'a NicknameDirectory) -> Self {
        Self {
            rosters: rosters.iter().map(|r| (r.roster_id, r)).collect(),
            users: users.iter().map(|u| (u.user_id.as_str(), u)).collect(),
            nicknames,
            placeholder_team_names: &[],
        }
    }

    /// Team names the provider hands out when an owner never set one.
    pub fn with_placeholder_team_names(mut self, names: &'a [String]) -> Self {
        self.placeholder_team_names = names;
        self
    }

    pub fn roster(&self, roster_id: RosterId) -> Option<&'a Roster> {
        self.rosters.get(&roster_id).copied()
    }

    pub fn owner(&self, roster_id: RosterId) -> Option<&'a User> {
        let owner_id = self.roster(roster_id)?.owner_id.as_deref()?;
        self.users.get(owner_id).copied()
    }

    pub fn nickname(&self, username: &str) -> Option<&'a str> {
        self.nicknames.get(username)
    }

    pub fn username(&self, roster_id: RosterId) -> &'a str {
        first_present([self.owner(roster_id).map(|u| u.display_name.as_str())])
            .unwrap_or(UNKNOWN_USER)
    }

    pub fn alias(&self, roster_id: RosterId) -> &'a str {
        let username = self.owner(roster_id).map(|u| u.display_name.as_str());
        first_present([username.and_then(|name| self.nickname(name)), username])
            .unwrap_or(UNKNOWN_USER)
    }

    pub fn team_name(&self, roster_id: RosterId) -> &'a str {
        if self.roster(roster_id).is_none() {
            return UNKNOWN_TEAM;
        }
        let owner = self.owner(roster_id);
        first_present([
            owner.and_then(|u| self.custom_team_name(u)),
            owner.map(|u| u.display_name.as_str()),
        ])
        .unwrap_or(UNKNOWN_USER)
    }

    pub fn label(&self, roster_id: RosterId) -> &'a str {
        if self.roster(roster_id).is_none() {
            return UNKNOWN_TEAM;
        }
        self.alias(roster_id)
    }

    /// A leaf name supplied by the provider, with the nickname applied.
    pub fn leaf_label<'n>(&self, display_name: &'n str) -> &'n str
    where
        'a: 'n,
    {
        self.nickname(display_name).unwrap_or(display_name)
    }

    fn custom_team_name(&self, user: &'a User) -> Option<&'a str> {
        let name = user.team_name.as_deref()?.trim();
        if name.is_empty() || self.placeholder_team_names.iter().any(|p| p == name) {
            return None;
        }
        Some(name)
    }
}
