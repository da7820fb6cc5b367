use serde::{Deserialize, Serialize};

use crate::models::StringOrNum;

use super::{first_non_blank, null_as_default};

fn default_TBD() -> String {
    "TBD".to_string()
}

/// The compact team object embedded in tables, scorer rows and matches.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TeamRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: StringOrNum,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub shortName: Option<String>,
    #[serde(default)]
    pub tla: Option<String>,
    #[serde(default)]
    pub crest: Option<String>,
}

impl TeamRef {
    /// Short name, else full name. Undecided sides of a fixture have neither.
    pub fn display_name(&self) -> String {
        first_non_blank(&[&self.shortName, &self.name]).unwrap_or_else(default_TBD)
    }

    pub fn crest(&self) -> String {
        self.crest.clone().unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TeamsRsp {
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: Vec<ExternalTeam>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Coach {
    #[serde(default)]
    pub id: Option<StringOrNum>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SquadMember {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: StringOrNum,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub shirtNumber: Option<u32>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Per-competition running totals attached to a team profile.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RunningCompetition {
    #[serde(default)]
    pub id: Option<StringOrNum>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub leagueRank: Option<u32>,
    #[serde(default)]
    pub playedGames: Option<u32>,
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub draws: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub goalsFor: Option<u32>,
    #[serde(default)]
    pub goalsAgainst: Option<u32>,
    #[serde(default)]
    pub points: Option<u32>,
}

impl RunningCompetition {
    pub fn has_totals(&self) -> bool {
        [self.wins, self.draws, self.losses, self.goalsFor, self.goalsAgainst, self.points]
            .iter()
            .any(Option::is_some)
    }
}

/// A club as returned by both the competition teams list and the team profile.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ExternalTeam {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: StringOrNum,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub shortName: Option<String>,
    #[serde(default)]
    pub tla: Option<String>,
    #[serde(default)]
    pub crest: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub founded: Option<u32>,
    #[serde(default)]
    pub clubColors: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub coach: Option<Coach>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub squad: Vec<SquadMember>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub runningCompetitions: Vec<RunningCompetition>,
}

impl ExternalTeam {
    pub fn display_name(&self) -> String {
        first_non_blank(&[&self.shortName, &self.name]).unwrap_or_else(|| self.id.to_str())
    }

    pub fn coach_name(&self) -> Option<String> {
        self.coach.as_ref().and_then(|e| first_non_blank(&[&e.name, &e.nickname]))
    }
}
