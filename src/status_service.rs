use serde::{Deserialize, Serialize};

use crate::config_handler::Config;
use crate::team_detail_cache::SafeTeamDetailCache;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiStatusRsp {
    pub token_configured: bool,
    pub competition: String,
    pub season: Option<u16>,
    pub cached_teams: usize,
}

pub struct StatusService;
impl StatusService {
    pub async fn read(config: &Config, cache: &SafeTeamDetailCache) -> ApiStatusRsp {
        ApiStatusRsp {
            token_configured: config.has_token(),
            competition: config.competition.clone(),
            season: config.season,
            cached_teams: cache.read().await.len(),
        }
    }
}
