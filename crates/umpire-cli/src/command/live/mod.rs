use std::{path::PathBuf, time::Duration};

use anyhow::{Context, bail};

use crate::{
    client::GameSource,
    command::{EvaluationArg, GameSourceArg, live::app::LiveApp},
    tui::Tui,
    util,
};

mod app;

/// Seconds between feed refreshes.
const DEFAULT_INTERVAL_SECONDS: f64 = 10.0;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct LiveArg {
    #[clap(flatten)]
    source: GameSourceArg,
    #[clap(flatten)]
    evaluation: EvaluationArg,
    /// Stay this many seconds behind the live game; asked for interactively when omitted
    #[clap(long)]
    delay: Option<u64>,
    /// Seconds between refreshes [default: 10]
    #[clap(long)]
    interval: Option<f64>,
    /// Write logs to this file (logs are discarded otherwise)
    #[clap(long)]
    pub(crate) log_file: Option<PathBuf>,
}

pub(crate) fn run(arg: &LiveArg) -> anyhow::Result<()> {
    let LiveArg {
        source,
        evaluation,
        delay,
        interval,
        log_file: _,
    } = arg;

    let interval = refresh_interval(*interval)?;
    let mut source = source.resolve(0)?;
    if let GameSource::Api { delay_seconds, .. } = &mut source {
        *delay_seconds = match delay {
            Some(delay) => *delay,
            None => parse_delay(&util::prompt("delay: ")?)?,
        };
    }
    let evaluation = evaluation.build()?;

    tracing::info!(%source, method = %evaluation.method, seed = %evaluation.seed, "starting live display");
    let mut app = LiveApp::new(source, evaluation);
    Tui::new(interval).run(&mut app)
}

fn refresh_interval(seconds: Option<f64>) -> anyhow::Result<Duration> {
    let seconds = seconds.unwrap_or(DEFAULT_INTERVAL_SECONDS);
    if !seconds.is_finite() || seconds <= 0.0 {
        bail!("Refresh interval must be a positive number of seconds, got {seconds}");
    }
    Ok(Duration::from_secs_f64(seconds))
}

fn parse_delay(answer: &str) -> anyhow::Result<u64> {
    if answer.is_empty() {
        return Ok(0);
    }
    answer
        .parse()
        .with_context(|| format!("Invalid delay: {answer}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delay() {
        assert_eq!(parse_delay("").unwrap(), 0);
        assert_eq!(parse_delay("45").unwrap(), 45);
        assert!(parse_delay("-3").is_err());
        assert!(parse_delay("soon").is_err());
    }

    #[test]
    fn test_refresh_interval() {
        assert_eq!(refresh_interval(None).unwrap(), Duration::from_secs(10));
        assert_eq!(
            refresh_interval(Some(2.5)).unwrap(),
            Duration::from_millis(2500)
        );
        assert!(refresh_interval(Some(0.0)).is_err());
        assert!(refresh_interval(Some(f64::NAN)).is_err());
    }
}
