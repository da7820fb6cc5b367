use std::time::{Duration, Instant};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::log;

use crate::config_handler::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::MatchStatus;
use crate::models_external::{ExternalTeam, MatchesRsp, ScorersRsp, StandingsRsp, TeamsRsp};

pub const AUTH_HEADER: &str = "X-Auth-Token";

pub fn get_standings_path(competition: &str) -> String {
    format!("/competitions/{competition}/standings")
}

pub fn get_scorers_path(competition: &str, limit: u16) -> String {
    format!("/competitions/{competition}/scorers?limit={limit}")
}

pub fn get_teams_path(competition: &str) -> String {
    format!("/competitions/{competition}/teams")
}

pub fn get_competition_matches_path(competition: &str, status: MatchStatus, season: Option<u16>) -> String {
    match season {
        Some(season) => format!("/competitions/{competition}/matches?status={status}&season={season}"),
        None => format!("/competitions/{competition}/matches?status={status}"),
    }
}

pub fn get_team_path(team_id: &str) -> String {
    format!("/teams/{team_id}")
}

pub fn get_team_matches_path(team_id: &str, status: MatchStatus) -> String {
    format!("/teams/{team_id}/matches?status={status}")
}

/// Human readable message for a failed call: JSON `message`, else JSON
/// `error`, else the raw body, else the status.
pub fn error_message(status: u16, body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|json| {
        ["message", "error"].iter().find_map(|key| match json.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        })
    });
    from_json
        .or_else(|| Some(body.trim()).filter(|e| !e.is_empty()).map(str::to_string))
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

pub fn build_http_client(config: &Config) -> reqwest::Result<Client> {
    let mut builder = Client::builder().user_agent(concat!("pl-server-rs/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = config.request_timeout_s {
        builder = builder.timeout(Duration::from_secs(timeout));
    }
    builder.build()
}

/// football-data.org v4 client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct FootballDataClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl FootballDataClient {
    pub fn new(config: &Config) -> FootballDataClient {
        let client = build_http_client(config).unwrap_or_else(|e| {
            log::warn!("[REST] Client setup failed, continuing without timeout and user agent: {e}");
            Client::new()
        });
        FootballDataClient {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone().filter(|e| !e.trim().is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn http(&self) -> &Client {
        &self.client
    }

    pub async fn get_standings(&self, competition: &str) -> ApiResult<StandingsRsp> {
        self.get_call(&get_standings_path(competition)).await
    }

    pub async fn get_scorers(&self, competition: &str, limit: u16) -> ApiResult<ScorersRsp> {
        self.get_call(&get_scorers_path(competition, limit)).await
    }

    pub async fn get_teams(&self, competition: &str) -> ApiResult<TeamsRsp> {
        self.get_call(&get_teams_path(competition)).await
    }

    pub async fn get_competition_matches(&self, competition: &str, status: MatchStatus, season: Option<u16>) -> ApiResult<MatchesRsp> {
        self.get_call(&get_competition_matches_path(competition, status, season)).await
    }

    pub async fn get_team(&self, team_id: &str) -> ApiResult<ExternalTeam> {
        self.get_call(&get_team_path(team_id)).await
    }

    pub async fn get_team_matches(&self, team_id: &str, status: MatchStatus) -> ApiResult<MatchesRsp> {
        self.get_call(&get_team_matches_path(team_id, status)).await
    }

    async fn get_call<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let token = self.token().ok_or(ApiError::MissingToken)?;
        let url = format!("{}{path}", self.base_url);
        let before = Instant::now();

        let rsp = self.client.get(&url)
            .header(AUTH_HEADER, token)
            .send()
            .await
            .map_err(|e| {
                log::error!("[REST] Call failed {url}: {e}");
                ApiError::Network(e.to_string())
            })?;
        let status = rsp.status();
        let body = rsp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        log::info!("[REST] Call {url} {} {:.2?}", status.as_u16(), before.elapsed());

        if !status.is_success() {
            return Err(ApiError::Upstream { status: status.as_u16(), message: error_message(status.as_u16(), &body) });
        }
        serde_json::from_str(&body).map_err(|e| {
            log::error!("[REST] Parse failed {url}: {e}");
            ApiError::Parse(e.to_string())
        })
    }
}
