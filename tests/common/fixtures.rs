use serde_json::{json, Value};

pub const TEST_TOKEN: &str = "test-token";

pub fn standings() -> Value {
    json!({
        "competition": {"code": "PL", "name": "Premier League"},
        "standings": [
            {"type": "HOME", "table": [
                {"position": 1, "team": {"id": 57, "shortName": "Arsenal"}, "won": 4, "draw": 0, "lost": 0}
            ]},
            {"type": "TOTAL", "table": [
                {"position": 1, "team": {"id": 65, "name": "Manchester City FC", "shortName": "Man City", "crest": "https://crests.football-data.org/65.png"},
                 "playedGames": 9, "won": 8, "draw": 1, "lost": 0, "points": 25, "goalsFor": 24, "goalsAgainst": 8, "goalDifference": 16, "form": "W,W,W,D,W"},
                {"position": 2, "team": {"id": 64, "name": "Liverpool FC", "shortName": "Liverpool"},
                 "playedGames": 9, "won": 8, "draw": 0, "lost": 1, "points": 24, "goalsFor": 18, "goalsAgainst": 5, "goalDifference": 13, "form": null},
                {"position": 3, "team": {"id": 57, "name": "Arsenal FC", "shortName": "Arsenal"},
                 "playedGames": 9, "won": 5, "draw": 3, "lost": 1, "points": 18, "goalsFor": 17, "goalsAgainst": 10, "goalDifference": 7, "form": "W,D,L,W,D"}
            ]}
        ]
    })
}

pub fn scorers() -> Value {
    json!({"scorers": [
        {"player": {"id": 38101, "name": "Erling Haaland", "nationality": "Norway"}, "team": {"id": 65, "shortName": "Man City"}, "playedMatches": 9, "goals": 10, "assists": null, "penalties": 2},
        {"player": {"id": 8004, "name": "Cole Palmer"}, "team": {"id": 61, "shortName": "Chelsea"}, "goals": 7, "assists": 5},
        {"player": {"id": 3754, "name": "Mohamed Salah"}, "team": {"id": 64, "shortName": "Liverpool"}, "goals": 7, "assists": 6}
    ]})
}

pub fn teams() -> Value {
    json!({"teams": [
        {"id": 99, "name": "zeta United", "venue": null},
        {"id": 57, "name": "Arsenal FC", "shortName": "Arsenal", "tla": "ARS", "venue": "Emirates Stadium", "founded": 1886, "clubColors": "Red / White", "coach": {"name": "Mikel Arteta"}},
        {"id": 65, "name": "Manchester City FC", "shortName": "Man City", "tla": "MCI", "venue": "Etihad Stadium", "coach": {"name": null, "nickname": "Pep"}}
    ]})
}

fn game(id: u32, date: Option<&str>, home: (u32, &str), away: (u32, &str), score: Option<(u32, u32)>) -> Value {
    let status = if score.is_some() { "FINISHED" } else { "SCHEDULED" };
    json!({
        "id": id,
        "utcDate": date,
        "status": status,
        "competition": {"name": "Premier League", "code": "PL"},
        "homeTeam": {"id": home.0, "shortName": home.1},
        "awayTeam": {"id": away.0, "shortName": away.1},
        "score": {"fullTime": {"home": score.map(|e| e.0), "away": score.map(|e| e.1)}}
    })
}

/// Eight finished rounds, listed oldest first.
pub fn finished_matches() -> Value {
    let list: Vec<Value> = (1..=8)
        .map(|day| game(1000 + day, Some(&format!("2024-09-{day:02}T14:00:00Z")), (57, "Arsenal"), (65, "Man City"), Some((day % 3, 1))))
        .collect();
    json!({ "matches": list })
}

pub fn scheduled_matches() -> Value {
    json!({"matches": [
        game(2003, None, (64, "Liverpool"), (57, "Arsenal"), None),
        game(2002, Some("2024-10-26T14:00:00Z"), (65, "Man City"), (64, "Liverpool"), None),
        game(2001, Some("2024-10-19T14:00:00Z"), (57, "Arsenal"), (65, "Man City"), None)
    ]})
}

pub fn team(team_id: &str) -> Option<Value> {
    match team_id {
        "57" => Some(json!({
            "id": 57, "name": "Arsenal FC", "shortName": "Arsenal", "tla": "ARS",
            "crest": "https://crests.football-data.org/57.png",
            "address": "75 Drayton Park London N5 1BU", "website": "http://www.arsenal.com",
            "founded": 1886, "clubColors": "Red / White", "venue": "Emirates Stadium",
            "coach": {"id": 11619, "name": "Mikel Arteta", "nationality": "Spain"},
            "runningCompetitions": [
                {"id": 2021, "name": "Premier League", "code": "PL", "type": "LEAGUE", "leagueRank": 4, "wins": 4, "draws": 3, "losses": 2, "goalsFor": 14, "goalsAgainst": 10}
            ],
            "squad": [
                {"id": 4832, "name": "David Raya", "position": "Goalkeeper", "nationality": "Spain", "shirtNumber": 22, "role": "PLAYER"},
                {"id": 7784, "name": "Bukayo Saka", "position": "Offence", "nationality": "England", "role": "PLAYER"},
                {"id": 9000, "name": "Albert Stuivenberg", "position": null, "role": "ASSISTANT_COACH"}
            ]
        })),
        _ => None,
    }
}

pub fn team_finished_matches() -> Value {
    json!({"matches": [
        game(3001, Some("2024-09-28T14:00:00Z"), (57, "Arsenal"), (41, "Leicester"), Some((4, 2))),
        game(3002, Some("2024-10-05T14:00:00Z"), (57, "Arsenal"), (58, "Aston Villa"), Some((2, 0))),
        game(3000, Some("2024-09-21T14:00:00Z"), (65, "Man City"), (57, "Arsenal"), Some((2, 2))),
        game(3003, Some("2024-10-19T14:00:00Z"), (44, "Bournemouth"), (57, "Arsenal"), Some((2, 0)))
    ]})
}

pub fn team_scheduled_matches() -> Value {
    json!({"matches": [
        game(4002, Some("2024-11-02T15:00:00Z"), (57, "Arsenal"), (65, "Man City"), None),
        game(4001, Some("2024-10-26T15:00:00Z"), (64, "Liverpool"), (57, "Arsenal"), None)
    ]})
}
