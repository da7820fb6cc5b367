use serde::{Serialize, Deserialize};

use crate::models::{Outcome, Venue};

/// An upcoming match from one team's point of view.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub id: String,
    pub opponent: String,
    pub date: String,
    pub venue: Venue,
    pub competition: String,
}

/// A finished match from one team's point of view.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub id: String,
    pub opponent: String,
    pub date: String,
    pub competition: String,
    pub score: String,
    pub outcome: Outcome,
}

/// A competition-wide match with both sides named.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub date: String,
    pub competition: String,
}
