pub mod json_api;

pub use json_api::{
    compare_matches, play_match, play_match_json, ClubData, MatchComparison, MatchRequest,
    MatchResponse, SCHEMA_VERSION,
};
