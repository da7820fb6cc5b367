use std::{collections::HashMap, net::TcpListener, sync::Arc};

use axum::{Router, body::Bytes, extract::{Path, Query, RawQuery, State}, http::{HeaderMap, Method, StatusCode, Uri}, response::{IntoResponse, Response}, routing::{any, get}, Json};
use serde_json::{json, Value};
use tokio::{sync::RwLock, task::JoinHandle};

use super::fixtures::{self, TEST_TOKEN};

#[derive(Default)]
pub struct AppState {
    /// Resource key -> status to answer with instead of data.
    pub failures: HashMap<String, u16>,
    pub calls: HashMap<String, u32>,
    pub queries: Vec<String>,
}
type SafeAppState = Arc<RwLock<AppState>>;

/// Mock football-data.org bound to a free local port.
pub struct ExternalServer {
    port: u16,
    handles: Vec<JoinHandle<()>>,
    state: SafeAppState,
}

impl Drop for ExternalServer {
    fn drop(&mut self) {
        for e in &self.handles {
            e.abort();
        }
    }
}

impl ExternalServer {
    pub async fn start() -> ExternalServer {
        let listener = TcpListener::bind("127.0.0.1:0").expect("should bind mock");
        listener.set_nonblocking(true).expect("should be nonblocking");
        let port = listener.local_addr().expect("should have addr").port();

        let state = Arc::new(RwLock::new(AppState::default()));
        let handle = {
            let state = state.clone();
            tokio::spawn(async move { ExternalServer::serve_external_data(state, listener).await })
        };
        ExternalServer { port, handles: vec![handle], state }
    }

    pub fn get_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub async fn fail(&self, key: &str, status: u16) {
        self.state.write().await.failures.insert(key.to_string(), status);
    }

    pub async fn recover(&self, key: &str) {
        self.state.write().await.failures.remove(key);
    }

    pub async fn calls(&self, key: &str) -> u32 {
        self.state.read().await.calls.get(key).copied().unwrap_or(0)
    }

    pub async fn total_calls(&self) -> u32 {
        self.state.read().await.calls.values().sum()
    }

    pub async fn queries(&self) -> Vec<String> {
        self.state.read().await.queries.clone()
    }

    async fn serve_external_data(state: SafeAppState, listener: TcpListener) {
        let app = Router::new()
            .route("/competitions/:competition/standings", get(ExternalServer::get_standings))
            .route("/competitions/:competition/scorers", get(ExternalServer::get_scorers))
            .route("/competitions/:competition/teams", get(ExternalServer::get_teams))
            .route("/competitions/:competition/matches", get(ExternalServer::get_competition_matches))
            .route("/teams/:team_id", get(ExternalServer::get_team))
            .route("/teams/:team_id/matches", get(ExternalServer::get_team_matches))
            .route("/echo/*path", any(ExternalServer::echo))
            .with_state(state);

        axum::Server::from_tcp(listener)
            .expect("should serve mock")
            .serve(app.into_make_service())
            .await
            .unwrap();
    }

    /// Answers like the real service: token first, then injected failures.
    async fn respond(state: &SafeAppState, key: &str, headers: &HeaderMap, data: Option<Value>) -> Response {
        let mut state = state.write().await;
        *state.calls.entry(key.to_string()).or_insert(0) += 1;

        if headers.get("x-auth-token").and_then(|e| e.to_str().ok()) != Some(TEST_TOKEN) {
            return (StatusCode::FORBIDDEN, Json(json!({"message": "Your API token is invalid.", "errorCode": 403}))).into_response();
        }
        if let Some(status) = state.failures.get(key) {
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return (status, Json(json!({"message": format!("Mock failure for {key}")}))).into_response();
        }
        match data {
            Some(data) => Json(data).into_response(),
            None => (StatusCode::NOT_FOUND, Json(json!({"message": "The resource you are looking for does not exist.", "errorCode": 404}))).into_response(),
        }
    }

    async fn get_standings(State(state): State<SafeAppState>, headers: HeaderMap) -> Response {
        ExternalServer::respond(&state, "standings", &headers, Some(fixtures::standings())).await
    }

    async fn get_scorers(State(state): State<SafeAppState>, RawQuery(query): RawQuery, headers: HeaderMap) -> Response {
        state.write().await.queries.push(format!("scorers?{}", query.unwrap_or_default()));
        ExternalServer::respond(&state, "scorers", &headers, Some(fixtures::scorers())).await
    }

    async fn get_teams(State(state): State<SafeAppState>, headers: HeaderMap) -> Response {
        ExternalServer::respond(&state, "teams", &headers, Some(fixtures::teams())).await
    }

    async fn get_competition_matches(State(state): State<SafeAppState>, RawQuery(query): RawQuery, Query(params): Query<HashMap<String, String>>, headers: HeaderMap) -> Response {
        state.write().await.queries.push(format!("matches?{}", query.unwrap_or_default()));
        let data = match params.get("status").map(String::as_str) {
            Some("FINISHED") => fixtures::finished_matches(),
            Some("SCHEDULED") => fixtures::scheduled_matches(),
            _ => json!({"matches": []}),
        };
        ExternalServer::respond(&state, "matches", &headers, Some(data)).await
    }

    async fn get_team(Path(team_id): Path<String>, State(state): State<SafeAppState>, headers: HeaderMap) -> Response {
        ExternalServer::respond(&state, "team", &headers, fixtures::team(&team_id)).await
    }

    async fn get_team_matches(Path(_team_id): Path<String>, State(state): State<SafeAppState>, Query(params): Query<HashMap<String, String>>, headers: HeaderMap) -> Response {
        let data = match params.get("status").map(String::as_str) {
            Some("FINISHED") => fixtures::team_finished_matches(),
            Some("SCHEDULED") => fixtures::team_scheduled_matches(),
            _ => json!({"matches": []}),
        };
        ExternalServer::respond(&state, "team_matches", &headers, Some(data)).await
    }

    /// Reflects what arrived so header filtering can be asserted.
    async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> impl IntoResponse {
        let header = |name: &str| headers.get(name).and_then(|e| e.to_str().ok()).map(str::to_string);
        let status = if method == Method::GET { StatusCode::OK } else { StatusCode::ACCEPTED };
        let rsp = json!({
            "method": method.as_str(),
            "path": uri.path(),
            "query": uri.query(),
            "accept": header("accept"),
            "cookie": header("cookie"),
            "token": header("x-auth-token"),
            "body": String::from_utf8_lossy(&body).to_string(),
        });
        (status, [("cache-control", "max-age=60"), ("x-internal", "secret")], Json(rsp))
    }
}
