//! Typed upstream responses. Every optional field is defaulted while decoding
//! so the mapping code works on a known shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

pub mod matches;
pub mod scorers;
pub mod standings;
pub mod teams;

pub use matches::{CompetitionRef, ExternalMatch, FullTimeScore, MatchScore, MatchesRsp};
pub use scorers::{PlayerRef, ScorerEntry, ScorersRsp};
pub use standings::{StandingGroup, StandingsRsp, TableEntry};
pub use teams::{Coach, ExternalTeam, RunningCompetition, SquadMember, TeamRef, TeamsRsp};

/// Treats an explicit `null` the same as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Kickoff times that are missing or not RFC 3339 decode to `None`.
pub fn lenient_utc<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|e| DateTime::parse_from_rfc3339(e.trim()).ok().map(|d| d.with_timezone(&Utc))))
}

pub(crate) fn first_non_blank(candidates: &[&Option<String>]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|e| e.as_deref())
        .map(str::trim)
        .find(|e| !e.is_empty())
        .map(str::to_string)
}
