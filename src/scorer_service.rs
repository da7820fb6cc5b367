use crate::models_api::scorer::TopScorer;
use crate::models_external::{ScorerEntry, ScorersRsp};

pub fn to_scorers(rsp: &ScorersRsp) -> Vec<TopScorer> {
    rsp.scorers.iter().map(to_scorer).collect()
}

pub fn to_scorer(entry: &ScorerEntry) -> TopScorer {
    let team_id = entry.team.id.to_str();
    let player_key = entry.player.id.as_ref()
        .filter(|e| !e.is_empty())
        .map(|e| e.to_str())
        .unwrap_or_else(|| slug(&entry.player.name));
    TopScorer {
        id: format!("{player_key}-{team_id}"),
        player: entry.player.name.clone(),
        team: entry.team.display_name(),
        team_id,
        team_crest: entry.team.crest(),
        goals: entry.goals,
        assists: entry.assists,
        played_matches: entry.playedMatches,
        penalties: entry.penalties,
    }
}

fn slug(name: &str) -> String {
    let slug = name.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|e| !e.is_empty())
        .collect::<Vec<&str>>()
        .join("-");
    if slug.is_empty() { "unknown".to_string() } else { slug }
}

// Stable sorts: equal keys keep the order of the upstream list.

pub fn sort_by_goals(scorers: &[TopScorer]) -> Vec<TopScorer> {
    sorted_desc(scorers, |e| e.goals)
}

pub fn sort_by_assists(scorers: &[TopScorer]) -> Vec<TopScorer> {
    sorted_desc(scorers, |e| e.assists)
}

pub fn sort_by_contributions(scorers: &[TopScorer]) -> Vec<TopScorer> {
    sorted_desc(scorers, TopScorer::contributions)
}

fn sorted_desc<F: Fn(&TopScorer) -> u32>(scorers: &[TopScorer], key: F) -> Vec<TopScorer> {
    let mut result = scorers.to_vec();
    result.sort_by(|a, b| key(b).cmp(&key(a)));
    result
}
