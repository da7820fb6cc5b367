use std::{collections::HashMap, sync::Arc, time::{Duration, Instant}};

use tokio::sync::RwLock;
use tracing::log;

use crate::models_api::team::TeamDetail;

/// How long a fetched team detail is served before it is fetched again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Kept until invalidated or the process restarts.
    Session,
    Ttl(Duration),
}

impl RefreshPolicy {
    pub fn from_ttl_secs(ttl: Option<u64>) -> RefreshPolicy {
        match ttl {
            Some(secs) => RefreshPolicy::Ttl(Duration::from_secs(secs)),
            None => RefreshPolicy::Session,
        }
    }

    fn is_fresh(&self, fetched_at: Instant) -> bool {
        match self {
            RefreshPolicy::Session => true,
            RefreshPolicy::Ttl(ttl) => fetched_at.elapsed() < *ttl,
        }
    }
}

struct CachedDetail {
    detail: TeamDetail,
    fetched_at: Instant,
}

pub struct TeamDetailCache {
    entries: HashMap<String, CachedDetail>,
    policy: RefreshPolicy,
}
pub type SafeTeamDetailCache = Arc<RwLock<TeamDetailCache>>;

impl TeamDetailCache {
    pub fn new(policy: RefreshPolicy) -> SafeTeamDetailCache {
        Arc::new(RwLock::new(TeamDetailCache { entries: HashMap::new(), policy }))
    }

    pub fn get(&self, team_id: &str) -> Option<TeamDetail> {
        self.entries.get(team_id)
            .filter(|e| self.policy.is_fresh(e.fetched_at))
            .map(|e| e.detail.clone())
    }

    pub fn insert(&mut self, team_id: &str, detail: TeamDetail) {
        self.entries.insert(team_id.to_string(), CachedDetail { detail, fetched_at: Instant::now() });
    }

    pub fn invalidate(&mut self, team_id: &str) -> bool {
        let removed = self.entries.remove(team_id).is_some();
        if removed {
            log::info!("[CACHE] Invalidated {team_id}");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
