use std::collections::HashMap;

use tracing::log;

use crate::models_api::standings::LeagueStanding;
use crate::models_external::{StandingsRsp, TableEntry};

/// The overall table. Home/away splits come as extra groups.
pub fn select_table(rsp: &StandingsRsp) -> &[TableEntry] {
    rsp.standings.iter()
        .find(|e| e.kind.eq_ignore_ascii_case("TOTAL"))
        .or_else(|| rsp.standings.first())
        .map(|e| e.table.as_slice())
        .unwrap_or(&[])
}

/// Maps the table in upstream order. An absent table is an empty result, not
/// an error.
pub fn to_standings(rsp: &StandingsRsp) -> Vec<LeagueStanding> {
    select_table(rsp).iter()
        .enumerate()
        .map(|(index, entry)| to_standing(entry, index))
        .collect()
}

pub fn to_standing(entry: &TableEntry, index: usize) -> LeagueStanding {
    let team_id = entry.team.id.to_str();
    let played = played(entry.won, entry.draw, entry.lost);
    let goal_difference = goal_difference(entry.goalsFor, entry.goalsAgainst);
    let points = points(entry.won, entry.draw);

    if entry.points.map(|e| e != points).unwrap_or(false)
        || entry.goalDifference.map(|e| e != goal_difference).unwrap_or(false)
        || entry.playedGames.map(|e| e != played).unwrap_or(false) {
        log::debug!("[STANDING] Upstream totals differ for {team_id}: {:?}/{:?}/{:?}", entry.playedGames, entry.goalDifference, entry.points);
    }

    LeagueStanding {
        position: entry.position.unwrap_or(index as u32 + 1),
        team_id,
        team: entry.team.display_name(),
        crest: entry.team.crest(),
        played,
        won: entry.won,
        drawn: entry.draw,
        lost: entry.lost,
        goals_for: entry.goalsFor,
        goals_against: entry.goalsAgainst,
        goal_difference,
        points,
        form: entry.form.trim().to_string(),
    }
}

// Counts come straight from upstream JSON, so the arithmetic saturates.

pub fn played(won: u32, drawn: u32, lost: u32) -> u32 {
    won.saturating_add(drawn).saturating_add(lost)
}

pub fn points(won: u32, drawn: u32) -> u32 {
    won.saturating_mul(3).saturating_add(drawn)
}

pub fn goal_difference(goals_for: u32, goals_against: u32) -> i32 {
    let diff = i64::from(goals_for) - i64::from(goals_against);
    i32::try_from(diff).unwrap_or(if diff < 0 { i32::MIN } else { i32::MAX })
}

/// Rows without a team id cannot be joined and are left out.
pub fn by_team_id(standings: &[LeagueStanding]) -> HashMap<&str, &LeagueStanding> {
    standings.iter()
        .filter(|e| !e.team_id.is_empty())
        .map(|e| (e.team_id.as_str(), e))
        .collect()
}
