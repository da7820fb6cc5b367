use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::StringOrNum;

use super::{lenient_utc, null_as_default, teams::TeamRef};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MatchesRsp {
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches: Vec<ExternalMatch>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CompetitionRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FullTimeScore {
    #[serde(default)]
    pub home: Option<u32>,
    #[serde(default)]
    pub away: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MatchScore {
    #[serde(default, deserialize_with = "null_as_default")]
    pub fullTime: FullTimeScore,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ExternalMatch {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: StringOrNum,
    #[serde(default, deserialize_with = "lenient_utc")]
    pub utcDate: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub competition: Option<CompetitionRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub homeTeam: TeamRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub awayTeam: TeamRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: MatchScore,
}

impl ExternalMatch {
    pub fn is_home(&self, team_id: &str) -> bool {
        self.homeTeam.id.to_str() == team_id
    }

    pub fn home_score(&self) -> u32 {
        self.score.fullTime.home.unwrap_or(0)
    }

    pub fn away_score(&self) -> u32 {
        self.score.fullTime.away.unwrap_or(0)
    }

    pub fn competition_name(&self, fallback: &str) -> String {
        self.competition.as_ref()
            .and_then(|e| e.name.as_deref())
            .filter(|e| !e.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}
