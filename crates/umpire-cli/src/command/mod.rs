use std::{fs, path::PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use rand::Rng as _;
use umpire_engine::{RunTables, feed::Game};
use umpire_evaluator::{
    call_evaluator::CallMethod,
    game_evaluator::{self, GameFavor},
    monte_carlo_evaluator::SampleSeed,
};

use crate::{
    client::{GameSource, StatsApiClient},
    logging::{self, LogTarget},
    util,
};

use self::{live::LiveArg, missed_calls::MissedCallsArg, scoreboard::ScoreboardArg};

mod live;
mod missed_calls;
mod scoreboard;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v debug, -vv trace)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// List the umpire's missed calls in one game and their run value
    MissedCalls(#[clap(flatten)] MissedCallsArg),
    /// Print the current scoreboard of one game as JSON
    Scoreboard(#[clap(flatten)] ScoreboardArg),
    /// Follow a game live in the terminal
    Live(#[clap(flatten)] LiveArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let mode = args.mode.unwrap_or(Mode::Live(LiveArg::default()));

    let log_target = match &mode {
        Mode::Live(arg) => arg
            .log_file
            .clone()
            .map_or(LogTarget::Discard, LogTarget::File),
        Mode::MissedCalls(_) | Mode::Scoreboard(_) => LogTarget::Stderr,
    };
    logging::init(args.verbose, &log_target)?;

    match mode {
        Mode::MissedCalls(arg) => missed_calls::run(&arg)?,
        Mode::Scoreboard(arg) => scoreboard::run(&arg)?,
        Mode::Live(arg) => live::run(&arg)?,
    }
    Ok(())
}

/// Which game to read, shared by every subcommand.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GameSourceArg {
    /// Game id in the stats API; asked for interactively when no source is given
    #[clap(short = 'g', long, conflicts_with = "game_file")]
    game_pk: Option<u64>,
    /// Read the game feed from a saved JSON file instead of the API
    #[clap(long)]
    game_file: Option<PathBuf>,
    /// Base URL of the stats API
    #[clap(long, env = "UMPIRE_API_BASE")]
    api_base: Option<String>,
}

impl GameSourceArg {
    pub(crate) fn resolve(&self, delay_seconds: u64) -> anyhow::Result<GameSource> {
        if let Some(path) = &self.game_file {
            return Ok(GameSource::File { path: path.clone() });
        }
        let game_pk = match self.game_pk {
            Some(game_pk) => game_pk,
            None => parse_game_pk(&util::prompt("gamePk: ")?)?,
        };
        Ok(GameSource::Api {
            client: StatsApiClient::new(self.api_base.clone())?,
            game_pk,
            delay_seconds,
        })
    }
}

fn parse_game_pk(answer: &str) -> anyhow::Result<u64> {
    if answer.is_empty() {
        bail!("no game provided");
    }
    answer
        .parse()
        .with_context(|| format!("Invalid gamePk: {answer}"))
}

/// How calls are judged and priced, shared by every subcommand.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct EvaluationArg {
    /// Call evaluation strategy: zone, buffer or monte-carlo
    #[clap(long)]
    method: Option<CallMethod>,
    /// Seed for the monte-carlo strategy (32 hex digits); random when omitted
    #[clap(long)]
    seed: Option<SampleSeed>,
    /// Run expectancy table JSON to use instead of the built-in one
    #[clap(long)]
    re_table: Option<PathBuf>,
}

/// Resolved evaluation settings.
#[derive(Debug, Clone)]
pub(crate) struct Evaluation {
    pub(crate) method: CallMethod,
    pub(crate) seed: SampleSeed,
    pub(crate) tables: RunTables,
}

impl EvaluationArg {
    pub(crate) fn build(&self) -> anyhow::Result<Evaluation> {
        let method = self.method.unwrap_or_default();
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        if method == CallMethod::MonteCarlo && self.seed.is_none() {
            eprintln!("Sampling with seed {seed}");
        }
        let tables = match &self.re_table {
            Some(path) => {
                let json = fs::read_to_string(path).with_context(|| {
                    format!("Failed to open run expectancy file: {}", path.display())
                })?;
                RunTables::from_json(&json).with_context(|| {
                    format!("Failed to load run expectancy file: {}", path.display())
                })?
            }
            None => RunTables::default_tables().clone(),
        };
        Ok(Evaluation {
            method,
            seed,
            tables,
        })
    }
}

impl Evaluation {
    /// Evaluates `game` with a fresh evaluator, so the same seed always gives the
    /// same answer for the same feed.
    pub(crate) fn evaluate(&self, game: &Game) -> anyhow::Result<GameFavor> {
        let mut evaluator = self.method.build(Some(self.seed));
        let favor = game_evaluator::evaluate_game(game, evaluator.as_mut(), &self.tables.delta)
            .with_context(|| format!("Failed to evaluate game {}", game.game_pk))?;
        Ok(favor)
    }
}
