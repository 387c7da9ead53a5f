use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::models::{Club, Match, MatchSummary, TeamSide};

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    pub home: ClubData,
    pub away: ClubData,
    /// Goals in the order they were scored.
    #[serde(default)]
    pub goals: Vec<TeamSide>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubData {
    pub name: String,
    pub stadium: String,
}

impl From<ClubData> for Club {
    fn from(data: ClubData) -> Self {
        Club::new(data.name, data.stadium)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub schema_version: u8,
    pub summary: MatchSummary,
}

/// Result of comparing two matches by total goals in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchComparison {
    pub first_higher_scoring: bool,
    pub second_higher_scoring: bool,
}

pub fn compare_matches(first: &Match, second: &Match) -> MatchComparison {
    MatchComparison {
        first_higher_scoring: first.is_higher_scoring_than(second),
        second_higher_scoring: second.is_higher_scoring_than(first),
    }
}

/// Build a match from a typed request and replay its goals.
pub fn play_match(request: MatchRequest) -> Result<MatchResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(CoreError::UnsupportedSchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let MatchRequest { home, away, goals, .. } = request;
    let mut fixture = Match::new(home.into(), away.into());
    for side in goals {
        fixture.add_goal(side);
    }

    log::info!("Match played: {}", fixture);
    Ok(MatchResponse { schema_version: SCHEMA_VERSION, summary: fixture.summary() })
}

/// JSON entry point: `MatchRequest` in, `MatchResponse` out.
pub fn play_match_json(request_json: &str) -> Result<String> {
    let request: MatchRequest =
        serde_json::from_str(request_json).map_err(CoreError::InvalidRequest)?;
    let response = play_match(request)?;
    serde_json::to_string(&response).map_err(CoreError::Serialization)
}
