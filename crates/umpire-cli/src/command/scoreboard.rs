use std::path::PathBuf;

use umpire_scoreboard::ScoreboardSnapshot;

use crate::{
    command::{EvaluationArg, GameSourceArg},
    util,
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ScoreboardArg {
    #[clap(flatten)]
    source: GameSourceArg,
    #[clap(flatten)]
    evaluation: EvaluationArg,
    /// Show the game as it was this many seconds ago
    #[clap(long, default_value_t = 0)]
    delay: u64,
    /// Output file path (default: stdout)
    #[clap(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ScoreboardArg) -> anyhow::Result<()> {
    let ScoreboardArg {
        source,
        evaluation,
        delay,
        output,
    } = arg;

    let source = source.resolve(*delay)?;
    let evaluation = evaluation.build()?;
    let game = source.fetch()?;
    let favor = evaluation.evaluate(&game)?;

    let umpire = favor.summary(game.home_abbreviation(), game.away_abbreviation());
    let snapshot = ScoreboardSnapshot::from_game(&game, umpire, source.delay_seconds());
    util::save_json(&snapshot.to_map(), output.as_deref())?;
    Ok(())
}
