use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

/// A single match outcome seen from one team's side.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    W,
    D,
    L,
}

impl Outcome {
    pub fn for_scores(team_score: u32, opponent_score: u32) -> Outcome {
        match team_score.cmp(&opponent_score) {
            Ordering::Greater => Outcome::W,
            Ordering::Equal => Outcome::D,
            Ordering::Less => Outcome::L,
        }
    }

    pub fn is_win(&self) -> bool {
        self == &Outcome::W
    }
}

impl FromStr for Outcome {
    type Err = ParseStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "W" | "w" => Ok(Outcome::W),
            "D" | "d" => Ok(Outcome::D),
            "L" | "l" => Ok(Outcome::L),
            _ => Err(ParseStringError),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Venue {
    Home,
    Away,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Finished,
    Scheduled,
}

impl MatchStatus {
    pub fn as_param(&self) -> &'static str {
        match self {
            MatchStatus::Finished => "FINISHED",
            MatchStatus::Scheduled => "SCHEDULED",
        }
    }
}

impl Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseStringError;

/// Upstream ids arrive as numbers on most resources and as strings on a few.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum StringOrNum {
    Number(i64),
    String(String),
}

impl Default for StringOrNum {
    fn default() -> Self {
        StringOrNum::String(String::new())
    }
}

impl StringOrNum {
    /// Canonical id form shared by standings rows and team summaries.
    pub fn to_str(&self) -> String {
        match self {
            StringOrNum::Number(n) => n.to_string(),
            StringOrNum::String(str) => str.trim().to_owned(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, StringOrNum::String(s) if s.trim().is_empty())
    }
}
