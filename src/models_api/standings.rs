use serde::{Deserialize, Serialize};

use crate::models::Outcome;

pub type TeamId = String;

/// One table row of a standings snapshot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueStanding {
    pub position: u32,
    pub team_id: TeamId,
    pub team: String,
    pub crest: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
    pub form: String,
}

impl LeagueStanding {
    /// Form symbols in upstream order, oldest first and most recent last.
    /// Unknown symbols are skipped.
    pub fn form_outcomes(&self) -> Vec<Outcome> {
        self.form
            .split(',')
            .filter_map(|e| e.parse().ok())
            .collect()
    }
}
