use serde::{Deserialize, Serialize};

use super::{null_as_default, teams::TeamRef};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct StandingsRsp {
    #[serde(default, deserialize_with = "null_as_default")]
    pub standings: Vec<StandingGroup>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct StandingGroup {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub table: Vec<TableEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TableEntry {
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team: TeamRef,
    #[serde(default)]
    pub playedGames: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub won: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub draw: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lost: u32,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goalsFor: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goalsAgainst: u32,
    #[serde(default)]
    pub goalDifference: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub form: String,
}
