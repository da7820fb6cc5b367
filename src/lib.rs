#![allow(non_snake_case, clippy::upper_case_acronyms)]

use std::fmt::Display;

use tracing::log;

pub mod api;
pub mod config_handler;
pub mod error;
pub mod format;
pub mod match_service;
pub mod models;
pub mod models_api;
pub mod models_external;
pub mod proxy;
pub mod rest_client;
pub mod scorer_service;
pub mod snapshot_service;
pub mod standing_service;
pub mod status_service;
pub mod team_detail_cache;
pub mod team_detail_service;
pub mod team_service;

pub trait LogResult<T, E: Display> {
    fn ok_log(self, msg: &str) -> Option<T>;
}

impl<T, E: Display> LogResult<T, E> for Result<T, E> {
    fn ok_log(self, msg: &str) -> Option<T> {
        match self {
            Ok(o) => Some(o),
            Err(e) => {
                log::warn!("{}: {}", msg, e);
                None
            }
        }
    }
}
