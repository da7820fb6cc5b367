use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{Router, body::Bytes, extract::{Path, State}, http::{HeaderMap, Method, Uri}, response::Response, routing::{any, get, post}, Json};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::log;

use crate::config_handler::Config;
use crate::error::{ApiError, ApiResult};
use crate::models_api::{snapshot::LeagueSnapshot, team::TeamDetail};
use crate::proxy::{self, PROXY_PREFIX};
use crate::rest_client::FootballDataClient;
use crate::snapshot_service::SnapshotService;
use crate::status_service::{ApiStatusRsp, StatusService};
use crate::team_detail_cache::{RefreshPolicy, SafeTeamDetailCache, TeamDetailCache};
use crate::team_detail_service::TeamDetailService;

#[derive(Clone)]
pub struct ApiState {
    pub config: Arc<Config>,
    pub client: FootballDataClient,
    pub snapshot_service: SnapshotService,
    pub team_detail_service: TeamDetailService,
    pub team_detail_cache: SafeTeamDetailCache,
}

impl ApiState {
    pub fn new(config: Arc<Config>) -> ApiState {
        let client = FootballDataClient::new(&config);
        ApiState {
            snapshot_service: SnapshotService::new(client.clone(), config.clone()),
            team_detail_service: TeamDetailService::new(client.clone(), config.clone()),
            team_detail_cache: TeamDetailCache::new(RefreshPolicy::from_ttl_secs(config.team_detail_ttl_s)),
            client,
            config,
        }
    }
}

pub struct Api;
impl Api {
    pub fn router(state: ApiState) -> Router {
        Router::new()
            .route("/", get(Api::root))
            .route("/status", get(Api::get_status))
            .route("/snapshot", get(Api::get_snapshot))
            .route("/teams/:team_id", get(Api::get_team))
            .route("/teams/:team_id/refresh", post(Api::refresh_team))
            .route(PROXY_PREFIX, any(Api::proxy))
            .route(&format!("{PROXY_PREFIX}/*path"), any(Api::proxy))
            .with_state(state)
            .layer(ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
            )
    }

    pub async fn serve(port: u16, state: ApiState) -> anyhow::Result<()> {
        let app = Api::router(state);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let server = axum::Server::try_bind(&addr)
            .with_context(|| format!("Unable to bind {addr}"))?;
        log::info!("[API] Listening on {}", addr);
        server.serve(app.into_make_service()).await?;
        Ok(())
    }

    async fn root() -> &'static str {
        "Top of the table"
    }

    async fn get_status(State(state): State<ApiState>) -> Json<ApiStatusRsp> {
        Json(StatusService::read(&state.config, &state.team_detail_cache).await)
    }

    async fn get_snapshot(State(state): State<ApiState>) -> ApiResult<Json<LeagueSnapshot>> {
        Ok(Json(state.snapshot_service.fetch().await?))
    }

    async fn get_team(Path(team_id): Path<String>, State(state): State<ApiState>) -> ApiResult<Json<TeamDetail>> {
        let team_id = parse_team_id(&team_id)?;
        Ok(Json(state.team_detail_service.read(&state.team_detail_cache, team_id).await?))
    }

    async fn refresh_team(Path(team_id): Path<String>, State(state): State<ApiState>) -> ApiResult<Json<TeamDetail>> {
        let team_id = parse_team_id(&team_id)?;
        Ok(Json(state.team_detail_service.refresh(&state.team_detail_cache, team_id).await?))
    }

    async fn proxy(State(state): State<ApiState>, method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
        proxy::forward(&state.client, method, &uri, &headers, body).await
    }
}

/// Ids are forwarded into upstream paths, so only `[A-Za-z0-9_-]` passes.
fn parse_team_id(raw: &str) -> ApiResult<&str> {
    let id = raw.trim();
    if !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        Ok(id)
    } else {
        Err(ApiError::BadRequest(format!("Invalid team id {raw}")))
    }
}
