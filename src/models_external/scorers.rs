use serde::{Deserialize, Serialize};

use crate::models::StringOrNum;

use super::{null_as_default, teams::TeamRef};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ScorersRsp {
    #[serde(default, deserialize_with = "null_as_default")]
    pub scorers: Vec<ScorerEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PlayerRef {
    #[serde(default)]
    pub id: Option<StringOrNum>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub nationality: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ScorerEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub player: PlayerRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team: TeamRef,
    #[serde(default)]
    pub playedMatches: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goals: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assists: u32,
    #[serde(default)]
    pub penalties: Option<u32>,
}
