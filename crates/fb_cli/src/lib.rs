//! Match CLI
//!
//! Command logic for the `fb_cli` binary. Each command renders its output
//! to a `String` so the binary only has to print it.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use fb_core::api::{compare_matches, play_match, ClubData, MatchRequest, SCHEMA_VERSION};
use fb_core::{Club, Match, MatchOutcome, TeamSide};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fb_cli")]
#[command(about = "Play and inspect football matches", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Real Madrid / Barcelona demo fixtures
    Demo,

    /// Play a single match from the command line
    Play {
        /// Home club name
        #[arg(long)]
        home: String,

        /// Home club stadium (the match location)
        #[arg(long)]
        home_stadium: String,

        /// Away club name
        #[arg(long)]
        away: String,

        /// Away club stadium
        #[arg(long)]
        away_stadium: String,

        /// Goals in scoring order, one `H` or `A` per goal (e.g. "HHA")
        #[arg(long, default_value = "")]
        goals: String,

        /// Print the JSON response instead of a text summary
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Play a match described by a JSON request file
    Json {
        /// Input request JSON file path
        #[arg(long)]
        r#in: PathBuf,
    },
}

pub fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Commands::Demo => Ok(run_demo()),
        Commands::Play { home, home_stadium, away, away_stadium, goals, json } => {
            let request = MatchRequest {
                schema_version: SCHEMA_VERSION,
                home: ClubData { name: home, stadium: home_stadium },
                away: ClubData { name: away, stadium: away_stadium },
                goals: parse_goals(&goals)?,
            };

            if json {
                let response = play_match(request)?;
                return Ok(serde_json::to_string_pretty(&response)?);
            }

            let mut fixture = Match::new(request.home.into(), request.away.into());
            for side in request.goals {
                fixture.add_goal(side);
            }
            Ok(describe(&fixture))
        }
        Commands::Json { r#in } => {
            let content = std::fs::read_to_string(&r#in)
                .with_context(|| format!("Failed to read request file {}", r#in.display()))?;
            let out = fb_core::play_match_json(&content)
                .with_context(|| format!("Failed to play match from {}", r#in.display()))?;
            Ok(out)
        }
    }
}

/// Parse a goal string such as `"HHA"` into scoring sides.
pub fn parse_goals(goals: &str) -> Result<Vec<TeamSide>> {
    goals
        .chars()
        .enumerate()
        .map(|(i, c)| -> Result<TeamSide> {
            match c.to_ascii_uppercase() {
                'H' => Ok(TeamSide::Home),
                'A' => Ok(TeamSide::Away),
                other => bail!("Invalid goal '{}' at position {}: expected H or A", other, i + 1),
            }
        })
        .collect()
}

pub fn describe(fixture: &Match) -> String {
    let result = match fixture.outcome() {
        MatchOutcome::HomeWin | MatchOutcome::AwayWin => {
            let winner = fixture.winner().map(Club::name).unwrap_or_default();
            format!("{} win by {}", winner, fixture.goal_difference().unsigned_abs())
        }
        MatchOutcome::Draw if fixture.is_goalless() => "Goalless draw".to_string(),
        MatchOutcome::Draw => "Draw".to_string(),
    };

    format!(
        "{}\n   Result: {}\n   Total goals: {}\n   Goal difference: {}",
        fixture,
        result,
        fixture.total_goals(),
        fixture.goal_difference()
    )
}

fn run_demo() -> String {
    let club1 = Club::new("Real Madrid", "Santiago Bernabéu");
    let club2 = Club::new("Barcelona", "Camp Nou");

    let mut match1 = Match::new(club1.clone(), club2.clone());
    match1.add_home_goal();
    match1.add_home_goal();
    match1.add_away_goal();

    let mut match2 = Match::new(club2, club1);
    match2.add_home_goal();

    let cmp = compare_matches(&match1, &match2);
    let mut out = String::new();
    let _ = writeln!(out, "Match 1: {}", describe(&match1));
    let _ = writeln!(out, "Match 2: {}", describe(&match2));
    let _ = write!(
        out,
        "Match 1 higher scoring than match 2: {}\nMatch 2 higher scoring than match 1: {}",
        cmp.first_higher_scoring, cmp.second_higher_scoring
    );
    out
}
