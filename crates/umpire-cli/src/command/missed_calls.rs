use std::{
    io::{self, Write as _},
    path::PathBuf,
};

use anyhow::Context;
use serde::Serialize;
use umpire_evaluator::{
    call_evaluator::CallMethod, game_evaluator::GameFavor, monte_carlo_evaluator::SampleSeed,
};

use crate::{
    command::{EvaluationArg, GameSourceArg},
    util,
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct MissedCallsArg {
    #[clap(flatten)]
    pub(crate) source: GameSourceArg,
    #[clap(flatten)]
    pub(crate) evaluation: EvaluationArg,
    /// Print every missed call, not just the totals
    #[clap(long)]
    pub(crate) trace: bool,
    /// Write the result as JSON
    #[clap(long)]
    pub(crate) json: bool,
    /// Output file path (default: stdout)
    #[clap(long, requires = "json")]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct MissedCallsReport<'a> {
    game_pk: u64,
    away: &'a str,
    home: &'a str,
    method: CallMethod,
    seed: SampleSeed,
    summary: String,
    #[serde(flatten)]
    favor: &'a GameFavor,
}

pub(crate) fn run(arg: &MissedCallsArg) -> anyhow::Result<()> {
    let MissedCallsArg {
        source,
        evaluation,
        trace,
        json,
        output,
    } = arg;

    let source = source.resolve(0)?;
    let evaluation = evaluation.build()?;
    eprintln!("Loading {source}...");
    let game = source.fetch()?;
    eprintln!("Evaluating calls with the {} method...", evaluation.method);
    let favor = evaluation.evaluate(&game)?;

    let home = game.home_abbreviation();
    let away = game.away_abbreviation();
    let summary = favor.summary(home, away);

    if *json {
        let report = MissedCallsReport {
            game_pk: game.game_pk,
            away,
            home,
            method: evaluation.method,
            seed: evaluation.seed,
            summary,
            favor: &favor,
        };
        util::save_json(&report, output.as_deref())?;
        return Ok(());
    }

    let mut out = io::stdout().lock();
    if *trace {
        for missed_call in &favor.missed_calls {
            writeln!(out, "Missed call #{}", missed_call.ordinal)
                .and_then(|()| writeln!(out, "{missed_call}\n"))
                .context("Failed to write missed call")?;
        }
    }
    writeln!(out, "{away} @ {home}: {favor}")
        .and_then(|()| writeln!(out, "Umpire: {summary}"))
        .context("Failed to write result")?;
    Ok(())
}
