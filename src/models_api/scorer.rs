use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopScorer {
    pub id: String,
    pub player: String,
    pub team: String,
    pub team_id: String,
    pub team_crest: String,
    pub goals: u32,
    pub assists: u32,
    pub played_matches: Option<u32>,
    pub penalties: Option<u32>,
}

impl TopScorer {
    pub fn contributions(&self) -> u32 {
        self.goals + self.assists
    }
}
