pub mod club;
pub mod football_match;

pub use club::Club;
pub use football_match::{Match, MatchOutcome, MatchSummary, TeamSide};
