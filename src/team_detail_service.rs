use std::{sync::Arc, time::Instant};

use tracing::log;

use crate::config_handler::Config;
use crate::error::{ApiError, ApiResult};
use crate::match_service::{self, KickoffOrder};
use crate::models::{MatchStatus, Outcome};
use crate::models_api::{standings::LeagueStanding, team::{SquadPlayer, TeamDetail, TeamStats}};
use crate::models_external::{ExternalMatch, ExternalTeam, RunningCompetition, SquadMember};
use crate::rest_client::FootballDataClient;
use crate::standing_service;
use crate::team_detail_cache::SafeTeamDetailCache;
use crate::LogResult;

const LAST_FIVE: usize = 5;
const VENUE_UNKNOWN: &str = "Unknown venue";

#[derive(Clone)]
pub struct TeamDetailService {
    client: FootballDataClient,
    config: Arc<Config>,
}

impl TeamDetailService {
    pub fn new(client: FootballDataClient, config: Arc<Config>) -> TeamDetailService {
        TeamDetailService { client, config }
    }

    /// Cached detail when fresh, otherwise fetched and stored.
    pub async fn read(&self, cache: &SafeTeamDetailCache, team_id: &str) -> ApiResult<TeamDetail> {
        if let Some(detail) = cache.read().await.get(team_id) {
            log::debug!("[TEAM] Cache hit {team_id}");
            return Ok(detail);
        }
        let detail = self.fetch(team_id).await?;
        cache.write().await.insert(team_id, detail.clone());
        Ok(detail)
    }

    pub async fn refresh(&self, cache: &SafeTeamDetailCache, team_id: &str) -> ApiResult<TeamDetail> {
        cache.write().await.invalidate(team_id);
        self.read(cache, team_id).await
    }

    /// Only the profile is required. Match lists and the table degrade to
    /// empty when their calls fail.
    pub async fn fetch(&self, team_id: &str) -> ApiResult<TeamDetail> {
        let before = Instant::now();
        let (profile, scheduled, finished, standings) = futures::join!(
            self.client.get_team(team_id),
            self.client.get_team_matches(team_id, MatchStatus::Scheduled),
            self.client.get_team_matches(team_id, MatchStatus::Finished),
            self.client.get_standings(&self.config.competition),
        );
        let profile = profile.map_err(|e| {
            log::error!("[TEAM] Profile {team_id} failed: {e}");
            e
        })?;
        if profile.id.is_empty() {
            return Err(ApiError::Parse(format!("team {team_id} profile without id")));
        }

        let scheduled = scheduled.ok_log("[TEAM] Scheduled matches unavailable")
            .map(|e| e.matches)
            .unwrap_or_default();
        let finished = finished.ok_log("[TEAM] Finished matches unavailable")
            .map(|e| e.matches)
            .unwrap_or_default();
        let standings = standings.ok_log("[TEAM] Standings unavailable")
            .map(|e| standing_service::to_standings(&e))
            .unwrap_or_default();

        let profile_id = profile.id.to_str();
        let standing = standings.iter().find(|e| e.team_id == profile_id);
        let detail = build_detail(&profile, &scheduled, &finished, standing, &self.config);
        log::info!("[TEAM] Fetched {team_id} {:.2?}", before.elapsed());
        Ok(detail)
    }
}

pub fn build_detail(
    profile: &ExternalTeam,
    scheduled: &[ExternalMatch],
    finished: &[ExternalMatch],
    standing: Option<&LeagueStanding>,
    config: &Config,
) -> TeamDetail {
    let team_id = profile.id.to_str();
    let name = profile.display_name();
    let venue = profile.venue.clone()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| VENUE_UNKNOWN.to_string());

    let upcoming_fixtures = match_service::sorted_by_kickoff(scheduled, KickoffOrder::Earliest, config.team_matches_limit)
        .into_iter()
        .map(|e| match_service::to_fixture(e, &team_id, &config.competition_name))
        .collect();
    let recent_results: Vec<_> = match_service::sorted_by_kickoff(finished, KickoffOrder::Latest, config.team_matches_limit)
        .into_iter()
        .map(|e| match_service::to_result(e, &team_id, &config.competition_name))
        .collect();

    // Oldest first, like the table's form string.
    let last_five: Vec<Outcome> = recent_results.iter()
        .take(LAST_FIVE)
        .map(|e| e.outcome)
        .rev()
        .collect();

    let competition = league_competition(profile, config);
    let stats = standing.map(stats_from_standing)
        .or_else(|| competition.and_then(stats_from_competition));
    let position = standing.map(|e| e.position)
        .or_else(|| competition.and_then(|e| e.position.or(e.leagueRank)));

    TeamDetail {
        description: description(&name, profile.clubColors.as_deref(), &venue, &config.competition_name),
        strengths: strengths(stats.as_ref(), &last_five),
        id: team_id,
        name,
        crest: profile.crest.clone().unwrap_or_default(),
        venue,
        tla: profile.tla.clone(),
        founded: profile.founded,
        club_colors: profile.clubColors.clone(),
        coach: profile.coach_name(),
        website: profile.website.clone(),
        last_five,
        position,
        stats,
        upcoming_fixtures,
        recent_results,
        squad: profile.squad.iter().filter(|e| is_player(e)).map(to_squad_player).collect(),
    }
}

/// Staff carry a role other than `PLAYER`. Older payloads have no role, then
/// a playing position marks a player.
fn is_player(member: &SquadMember) -> bool {
    match member.role.as_deref() {
        Some(role) => role.eq_ignore_ascii_case("PLAYER"),
        None => member.position.as_deref().map(|e| !e.trim().is_empty()).unwrap_or(false),
    }
}

fn to_squad_player(member: &SquadMember) -> SquadPlayer {
    SquadPlayer {
        id: member.id.to_str(),
        name: member.name.clone(),
        position: member.position.clone(),
        nationality: member.nationality.clone(),
        shirt_number: member.shirtNumber,
    }
}

fn league_competition<'a>(profile: &'a ExternalTeam, config: &Config) -> Option<&'a RunningCompetition> {
    profile.runningCompetitions.iter()
        .filter(|e| e.kind.as_deref().map(|k| k.eq_ignore_ascii_case("LEAGUE")).unwrap_or(false))
        .find(|e| {
            e.code.as_deref() == Some(config.competition.as_str())
                || e.name.as_deref().map(|n| n.contains(&config.competition_name)).unwrap_or(false)
        })
}

fn stats_from_standing(standing: &LeagueStanding) -> TeamStats {
    TeamStats {
        played: standing.played,
        wins: standing.won,
        draws: standing.drawn,
        losses: standing.lost,
        goals_for: standing.goals_for,
        goals_against: standing.goals_against,
        goal_difference: standing.goal_difference,
        points: standing.points,
    }
}

fn stats_from_competition(competition: &RunningCompetition) -> Option<TeamStats> {
    if !competition.has_totals() {
        return None;
    }
    let wins = competition.wins.unwrap_or(0);
    let draws = competition.draws.unwrap_or(0);
    let losses = competition.losses.unwrap_or(0);
    let goals_for = competition.goalsFor.unwrap_or(0);
    let goals_against = competition.goalsAgainst.unwrap_or(0);
    Some(TeamStats {
        played: competition.playedGames.unwrap_or_else(|| standing_service::played(wins, draws, losses)),
        wins,
        draws,
        losses,
        goals_for,
        goals_against,
        goal_difference: standing_service::goal_difference(goals_for, goals_against),
        points: competition.points.unwrap_or_else(|| standing_service::points(wins, draws)),
    })
}

pub fn strengths(stats: Option<&TeamStats>, last_five: &[Outcome]) -> Vec<String> {
    let mut result = vec![];
    if let Some(stats) = stats {
        if stats.wins > stats.losses {
            result.push("Consistent league form with more wins than losses".to_string());
        }
        if stats.goals_for > stats.goals_against {
            result.push("Positive goal difference across the campaign".to_string());
        }
    }
    if last_five.iter().filter(|e| e.is_win()).count() >= 3 {
        result.push("Momentum building with three wins in the last five matches".to_string());
    }
    result
}

fn description(name: &str, club_colors: Option<&str>, venue: &str, competition_name: &str) -> String {
    match club_colors.filter(|e| !e.trim().is_empty()) {
        Some(colors) => format!("{name} turn out in {} and call {venue} home.", colors.to_lowercase()),
        None => format!("{name} compete in the {competition_name} from {venue}."),
    }
}
