//! # fb_core - Football club and match models
//!
//! A [`Match`] pairs a home and an away [`Club`] with two goal counters
//! that only ever grow. Scores, goal difference, the result and the venue
//! are all derived from those counters on demand.
//!
//! ## Features
//! - Total, infallible model operations
//! - Serializable match summaries
//! - JSON API for front ends (see [`api::play_match_json`])

pub mod api;
pub mod error;
pub mod models;

pub use api::{play_match_json, MatchRequest, MatchResponse};
pub use error::{CoreError, Result};
pub use models::{Club, Match, MatchOutcome, MatchSummary, TeamSide};
