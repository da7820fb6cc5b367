use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::log;

pub const TOKEN_ENV_VARS: [&str; 2] = ["FOOTBALL_DATA_TOKEN", "VITE_FOOTBALL_DATA_TOKEN"];

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default="default_port")]
    pub port: u16,

    #[serde(default="default_api_url")]
    pub api_url: String,

    #[serde(default="default_competition")]
    pub competition: String,
    #[serde(default="default_competition_name")]
    pub competition_name: String,
    #[serde(default)]
    pub season: Option<u16>,

    #[serde(default="default_scorers_limit")]
    pub scorers_limit: u16,
    #[serde(default="default_match_feed_limit")]
    pub recent_matches_limit: usize,
    #[serde(default="default_match_feed_limit")]
    pub upcoming_matches_limit: usize,
    #[serde(default="default_team_matches_limit")]
    pub team_matches_limit: usize,

    /// `None` keeps a fetched team detail for the lifetime of the process.
    #[serde(default)]
    pub team_detail_ttl_s: Option<u64>,

    #[serde(default)]
    pub request_timeout_s: Option<u64>,

    #[serde(default)]
    pub api_token: Option<String>,
}

fn default_port() -> u16 {
    8000
}

fn default_api_url() -> String {
    "https://api.football-data.org/v4".to_string()
}

fn default_competition() -> String {
    "PL".to_string()
}

fn default_competition_name() -> String {
    "Premier League".to_string()
}

fn default_scorers_limit() -> u16 {
    30
}

fn default_match_feed_limit() -> usize {
    6
}

fn default_team_matches_limit() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: default_port(),
            api_url: default_api_url(),
            competition: default_competition(),
            competition_name: default_competition_name(),
            season: None,
            scorers_limit: default_scorers_limit(),
            recent_matches_limit: default_match_feed_limit(),
            upcoming_matches_limit: default_match_feed_limit(),
            team_matches_limit: default_team_matches_limit(),
            team_detail_ttl_s: None,
            request_timeout_s: None,
            api_token: None,
        }
    }
}

impl Config {
    pub fn has_token(&self) -> bool {
        self.api_token.as_deref().map(|e| !e.trim().is_empty()).unwrap_or(false)
    }

    /// Environment wins over the file for the token and the port.
    pub fn apply_env<F: Fn(&str) -> Option<String>>(&mut self, lookup: F) {
        if let Some(token) = TOKEN_ENV_VARS.iter()
            .filter_map(|e| lookup(e))
            .find(|e| !e.trim().is_empty()) {
            self.api_token = Some(token.trim().to_string());
        }
        if let Some(port) = lookup("PORT").and_then(|e| e.parse().ok()) {
            self.port = port;
        }
    }

    /// Copy safe to print.
    pub fn redacted(&self) -> Config {
        Config {
            api_token: self.api_token.as_ref().map(|_| "***".to_string()),
            ..self.clone()
        }
    }
}

pub fn get_config() -> anyhow::Result<Config> {
    let path = std::env::var("CONFIG_PATH").ok()
        .unwrap_or_else(|| "./deployment/config.json".to_string());
    let mut result: Config = match fs::read_to_string(&path) {
        Ok(data) => serde_json::from_str(&data)
            .with_context(|| format!("Could not parse JSON at {path}!"))?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("[CONFIG] No config at {path}, using defaults");
            Config::default()
        },
        Err(e) => return Err(e).with_context(|| format!("Unable to read {path}")),
    };
    result.apply_env(|key| std::env::var(key).ok());
    log::info!("[CONFIG] {:?}", result.redacted());
    Ok(result)
}
