use serde::{Deserialize, Serialize};

use crate::models::Outcome;

use super::game::{Fixture, MatchResult};

/// Club identity plus the fields joined in from the standings table.
///
/// The standings fields stay `None` for clubs without a table row. They must
/// never be read as zero, since zero points is a valid standing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub id: String,
    pub name: String,
    pub crest: String,
    pub venue: String,
    pub tla: Option<String>,
    pub founded: Option<u32>,
    pub club_colors: Option<String>,
    pub coach: Option<String>,
    pub website: Option<String>,

    pub form: Option<String>,
    pub points: Option<u32>,
    pub goal_difference: Option<i32>,
    pub position: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SquadPlayer {
    pub id: String,
    pub name: String,
    pub position: Option<String>,
    pub nationality: Option<String>,
    pub shirt_number: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetail {
    pub id: String,
    pub name: String,
    pub crest: String,
    pub venue: String,
    pub tla: Option<String>,
    pub founded: Option<u32>,
    pub club_colors: Option<String>,
    pub coach: Option<String>,
    pub website: Option<String>,

    pub description: String,
    pub strengths: Vec<String>,
    pub last_five: Vec<Outcome>,
    pub position: Option<u32>,
    pub stats: Option<TeamStats>,
    pub upcoming_fixtures: Vec<Fixture>,
    pub recent_results: Vec<MatchResult>,
    pub squad: Vec<SquadPlayer>,
}
