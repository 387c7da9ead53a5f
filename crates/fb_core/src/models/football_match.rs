use super::Club;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Which side of a fixture a goal or club belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn opponent(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

/// Result of a match at its current score. Exactly one variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

/// A fixture between two clubs with live goal counters.
///
/// The clubs are fixed at construction; the only mutation is adding a
/// goal to one side. Everything else is derived from the two counters on
/// demand. A club may be drawn against itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    home: Club,
    away: Club,
    home_goals: u32,
    away_goals: u32,
}

impl Match {
    /// Kick off a new match at 0-0.
    pub fn new(home: Club, away: Club) -> Self {
        log::debug!("New match: {} vs {} at {}", home.name(), away.name(), home.stadium());
        Self { home, away, home_goals: 0, away_goals: 0 }
    }

    pub fn home(&self) -> &Club {
        &self.home
    }

    pub fn away(&self) -> &Club {
        &self.away
    }

    pub fn club(&self, side: TeamSide) -> &Club {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn add_home_goal(&mut self) {
        self.add_goal(TeamSide::Home);
    }

    pub fn add_away_goal(&mut self) {
        self.add_goal(TeamSide::Away);
    }

    /// Credit one goal to `side`.
    ///
    /// Counters saturate at `u32::MAX`; a goal past that point is dropped
    /// with a warning.
    pub fn add_goal(&mut self, side: TeamSide) {
        let counter = match side {
            TeamSide::Home => &mut self.home_goals,
            TeamSide::Away => &mut self.away_goals,
        };

        match counter.checked_add(1) {
            Some(next) => *counter = next,
            None => {
                log::warn!("Goal counter for {:?} side is saturated, goal ignored", side);
                return;
            }
        }

        log::debug!(
            "Goal for {} ({:?}): {} {} - {} {}",
            self.club(side).name(),
            side,
            self.home.name(),
            self.home_goals,
            self.away_goals,
            self.away.name()
        );
    }

    pub fn home_goals(&self) -> u32 {
        self.home_goals
    }

    pub fn away_goals(&self) -> u32 {
        self.away_goals
    }

    pub fn goals_for(&self, side: TeamSide) -> u32 {
        match side {
            TeamSide::Home => self.home_goals,
            TeamSide::Away => self.away_goals,
        }
    }

    pub fn total_goals(&self) -> u64 {
        u64::from(self.home_goals) + u64::from(self.away_goals)
    }

    /// Home goals minus away goals. Positive favours the home side.
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.home_goals) - i64::from(self.away_goals)
    }

    pub fn is_home_win(&self) -> bool {
        self.home_goals > self.away_goals
    }

    pub fn is_away_win(&self) -> bool {
        self.away_goals > self.home_goals
    }

    pub fn is_tied(&self) -> bool {
        self.home_goals == self.away_goals
    }

    pub fn is_goalless(&self) -> bool {
        self.total_goals() == 0
    }

    pub fn outcome(&self) -> MatchOutcome {
        match self.home_goals.cmp(&self.away_goals) {
            Ordering::Greater => MatchOutcome::HomeWin,
            Ordering::Less => MatchOutcome::AwayWin,
            Ordering::Equal => MatchOutcome::Draw,
        }
    }

    /// The leading club, or `None` while the score is level.
    pub fn winner(&self) -> Option<&Club> {
        match self.outcome() {
            MatchOutcome::HomeWin => Some(&self.home),
            MatchOutcome::AwayWin => Some(&self.away),
            MatchOutcome::Draw => None,
        }
    }

    /// Where the match is played: always the home club's stadium.
    pub fn location(&self) -> &str {
        self.home.stadium()
    }

    /// True iff this match has strictly more goals in total than `other`.
    pub fn is_higher_scoring_than(&self, other: &Match) -> bool {
        self.cmp_total_goals(other) == Ordering::Greater
    }

    /// Orders matches by total goals, for sorting fixture lists.
    pub fn cmp_total_goals(&self, other: &Match) -> Ordering {
        self.total_goals().cmp(&other.total_goals())
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            home: self.home.clone(),
            away: self.away.clone(),
            home_goals: self.home_goals,
            away_goals: self.away_goals,
            total_goals: self.total_goals(),
            goal_difference: self.goal_difference(),
            outcome: self.outcome(),
            goalless: self.is_goalless(),
            location: self.location().to_string(),
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {} ({})",
            self.home.name(),
            self.home_goals,
            self.away_goals,
            self.away.name(),
            self.location()
        )
    }
}

/// Snapshot of a match and every derived value, for UI and JSON layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub home: Club,
    pub away: Club,
    pub home_goals: u32,
    pub away_goals: u32,
    pub total_goals: u64,
    pub goal_difference: i64,
    pub outcome: MatchOutcome,
    pub goalless: bool,
    pub location: String,
}
