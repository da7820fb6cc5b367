use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{game::MatchSummary, scorer::TopScorer, standings::LeagueStanding, team::TeamSummary};

/// Everything one dashboard render needs, fetched together.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSnapshot {
    pub standings: Vec<LeagueStanding>,
    pub scorers: Vec<TopScorer>,
    pub teams: Vec<TeamSummary>,
    pub recent_matches: Vec<MatchSummary>,
    pub upcoming_fixtures: Vec<MatchSummary>,
    pub fetched_at: DateTime<Utc>,
}
