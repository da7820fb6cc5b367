use axum::{response::{IntoResponse, Response}, Json};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::log;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Missing Football Data API token, set FOOTBALL_DATA_TOKEN")]
    MissingToken,

    /// Non-success status; the message is derived from the response body.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// Detail is kept for logs only.
    #[error("Unable to reach the football data service")]
    Network(String),

    #[error("Unexpected response from the football data service")]
    Parse(String),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingToken => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream { status: 404, .. } => StatusCode::NOT_FOUND,
            ApiError::Upstream { status: 429, .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Upstream { .. } | ApiError::Network(_) | ApiError::Parse(_) => StatusCode::BAD_GATEWAY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorRsp {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Network(detail) | ApiError::Parse(detail) => log::warn!("[API] {status} {self}: {detail}"),
            _ => log::warn!("[API] {status} {self}"),
        }
        (status, Json(ErrorRsp { error: self.to_string() })).into_response()
    }
}
