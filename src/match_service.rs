use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::format::format_full_date;
use crate::models::{Outcome, Venue};
use crate::models_api::game::{Fixture, MatchResult, MatchSummary};
use crate::models_external::ExternalMatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickoffOrder {
    Earliest,
    Latest,
}

/// Undated matches go last in either order.
fn compare_kickoff(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>, order: KickoffOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            KickoffOrder::Earliest => a.cmp(&b),
            KickoffOrder::Latest => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn sorted_by_kickoff(matches: &[ExternalMatch], order: KickoffOrder, limit: usize) -> Vec<&ExternalMatch> {
    let mut result: Vec<&ExternalMatch> = matches.iter().collect();
    result.sort_by(|a, b| compare_kickoff(a.utcDate, b.utcDate, order));
    result.truncate(limit);
    result
}

fn opponent_of(m: &ExternalMatch, is_home: bool) -> String {
    if is_home {
        m.awayTeam.display_name()
    } else {
        m.homeTeam.display_name()
    }
}

pub fn to_fixture(m: &ExternalMatch, team_id: &str, fallback_competition: &str) -> Fixture {
    let is_home = m.is_home(team_id);
    Fixture {
        id: m.id.to_str(),
        opponent: opponent_of(m, is_home),
        date: format_full_date(m.utcDate),
        venue: if is_home { Venue::Home } else { Venue::Away },
        competition: m.competition_name(fallback_competition),
    }
}

/// Outcome is relative to `team_id`; the score string is always home first.
pub fn to_result(m: &ExternalMatch, team_id: &str, fallback_competition: &str) -> MatchResult {
    let is_home = m.is_home(team_id);
    let (home, away) = (m.home_score(), m.away_score());
    let outcome = if is_home {
        Outcome::for_scores(home, away)
    } else {
        Outcome::for_scores(away, home)
    };
    MatchResult {
        id: m.id.to_str(),
        opponent: opponent_of(m, is_home),
        date: format_full_date(m.utcDate),
        competition: m.competition_name(fallback_competition),
        score: format!("{home} - {away}"),
        outcome,
    }
}

pub fn to_match_summary(m: &ExternalMatch, format_date: fn(Option<DateTime<Utc>>) -> String, fallback_competition: &str) -> MatchSummary {
    MatchSummary {
        id: m.id.to_str(),
        home_team: m.homeTeam.display_name(),
        away_team: m.awayTeam.display_name(),
        home_score: m.home_score(),
        away_score: m.away_score(),
        date: format_date(m.utcDate),
        competition: m.competition_name(fallback_competition),
    }
}
