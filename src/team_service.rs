use std::{cmp::Ordering, collections::HashSet};

use tracing::log;

use crate::models_api::{standings::LeagueStanding, team::TeamSummary};
use crate::models_external::ExternalTeam;
use crate::models_external::first_non_blank;
use crate::standing_service;

pub const VENUE_TBC: &str = "Venue to be confirmed";

pub fn to_team_summary(team: &ExternalTeam, standing: Option<&LeagueStanding>) -> TeamSummary {
    TeamSummary {
        id: team.id.to_str(),
        name: team.display_name(),
        crest: team.crest.clone().unwrap_or_default(),
        venue: first_non_blank(&[&team.venue, &team.address]).unwrap_or_else(|| VENUE_TBC.to_string()),
        tla: team.tla.clone(),
        founded: team.founded,
        club_colors: team.clubColors.clone(),
        coach: team.coach_name(),
        website: team.website.clone(),
        form: standing.map(|e| e.form.clone()),
        points: standing.map(|e| e.points),
        goal_difference: standing.map(|e| e.goal_difference),
        position: standing.map(|e| e.position),
    }
}

/// Minimal summary for a ranked club the teams list does not know.
pub fn from_standing(standing: &LeagueStanding) -> TeamSummary {
    TeamSummary {
        id: standing.team_id.clone(),
        name: standing.team.clone(),
        crest: standing.crest.clone(),
        venue: VENUE_TBC.to_string(),
        tla: None,
        founded: None,
        club_colors: None,
        coach: None,
        website: None,
        form: Some(standing.form.clone()),
        points: Some(standing.points),
        goal_difference: Some(standing.goal_difference),
        position: Some(standing.position),
    }
}

/// Joins the teams list with the table. Each id appears once, every ranked
/// club is present, unranked clubs keep empty standings fields.
pub fn merge_teams(teams: &[ExternalTeam], standings: &[LeagueStanding]) -> Vec<TeamSummary> {
    let lookup = standing_service::by_team_id(standings);
    let mut seen = HashSet::<String>::new();

    let mut merged: Vec<TeamSummary> = teams.iter()
        .filter(|e| !e.id.is_empty())
        .filter(|e| seen.insert(e.id.to_str()))
        .map(|e| to_team_summary(e, lookup.get(e.id.to_str().as_str()).copied()))
        .collect();

    let synthesized: Vec<TeamSummary> = standings.iter()
        .filter(|e| seen.insert(synthesis_key(e)))
        .map(from_standing)
        .collect();
    if !synthesized.is_empty() {
        log::info!("[TEAMS] Synthesized {} teams from standings", synthesized.len());
    }
    merged.extend(synthesized);

    sort_teams(&mut merged);
    merged
}

/// Id-less rows are told apart by their table position.
fn synthesis_key(standing: &LeagueStanding) -> String {
    if standing.team_id.is_empty() {
        log::warn!("[TEAMS] Standing at position {} has no team id", standing.position);
        format!("#{}", standing.position)
    } else {
        standing.team_id.clone()
    }
}

/// Ranked clubs by position, then the rest alphabetically.
pub fn sort_teams(teams: &mut [TeamSummary]) {
    teams.sort_by(compare_teams);
}

fn compare_teams(a: &TeamSummary, b: &TeamSummary) -> Ordering {
    match (a.position, b.position) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.name.to_lowercase().cmp(&b.name.to_lowercase())
            .then_with(|| a.id.cmp(&b.id)),
    }
}
