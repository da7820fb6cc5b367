use std::{sync::Arc, time::Instant};

use chrono::Utc;
use tracing::log;

use crate::config_handler::Config;
use crate::error::ApiResult;
use crate::format::{format_date, format_full_date};
use crate::match_service::{self, KickoffOrder};
use crate::models::MatchStatus;
use crate::models_api::snapshot::LeagueSnapshot;
use crate::models_external::{ExternalMatch, ScorersRsp, StandingsRsp, TeamsRsp};
use crate::rest_client::FootballDataClient;
use crate::{scorer_service, standing_service, team_service};

#[derive(Clone)]
pub struct SnapshotService {
    client: FootballDataClient,
    config: Arc<Config>,
}

impl SnapshotService {
    pub fn new(client: FootballDataClient, config: Arc<Config>) -> SnapshotService {
        SnapshotService { client, config }
    }

    /// All five resources or nothing.
    pub async fn fetch(&self) -> ApiResult<LeagueSnapshot> {
        let before = Instant::now();
        let competition = self.config.competition.as_str();
        let (standings, scorers, teams, finished, scheduled) = futures::try_join!(
            self.client.get_standings(competition),
            self.client.get_scorers(competition, self.config.scorers_limit),
            self.client.get_teams(competition),
            self.client.get_competition_matches(competition, MatchStatus::Finished, self.config.season),
            self.client.get_competition_matches(competition, MatchStatus::Scheduled, self.config.season),
        ).map_err(|e| {
            log::error!("[SNAPSHOT] Failed {competition}: {e}");
            e
        })?;

        let snapshot = build_snapshot(&standings, &scorers, &teams, &finished.matches, &scheduled.matches, &self.config);
        log::info!("[SNAPSHOT] Fetched {competition} {} teams {} scorers {:.2?}", snapshot.teams.len(), snapshot.scorers.len(), before.elapsed());
        Ok(snapshot)
    }
}

pub fn build_snapshot(
    standings: &StandingsRsp,
    scorers: &ScorersRsp,
    teams: &TeamsRsp,
    finished: &[ExternalMatch],
    scheduled: &[ExternalMatch],
    config: &Config,
) -> LeagueSnapshot {
    let standings = standing_service::to_standings(standings);
    let teams = team_service::merge_teams(&teams.teams, &standings);
    let fallback = config.competition_name.as_str();

    LeagueSnapshot {
        scorers: scorer_service::to_scorers(scorers),
        teams,
        recent_matches: match_service::sorted_by_kickoff(finished, KickoffOrder::Latest, config.recent_matches_limit)
            .into_iter()
            .map(|e| match_service::to_match_summary(e, format_date, fallback))
            .collect(),
        upcoming_fixtures: match_service::sorted_by_kickoff(scheduled, KickoffOrder::Earliest, config.upcoming_matches_limit)
            .into_iter()
            .map(|e| match_service::to_match_summary(e, format_full_date, fallback))
            .collect(),
        standings,
        fetched_at: Utc::now(),
    }
}
