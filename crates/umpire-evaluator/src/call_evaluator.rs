//! Call evaluation: deciding whether one called pitch was wrong, and what it cost.
//!
//! Evaluation is split in two steps:
//!
//! 1. **Judgement** - [`CallEvaluator::is_missed_call`] decides whether the umpire's
//!    call disagrees with where the pitch crossed the plate. This is the only part
//!    the strategies implement.
//! 2. **Pricing** - [`price_missed_call`] turns a miss into a signed home favor using
//!    the run swing of the pre-pitch state.
//!
//! Pitches that are not called (swings, balls in play) and pitches without usable
//! tracking data are never misses.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use umpire_engine::{DeltaTable, PitchCall, PitchRecord, RunnerState, TableLookupError};

use crate::{
    buffer_evaluator::BufferEvaluator,
    monte_carlo_evaluator::{MonteCarloEvaluator, SampleSeed},
    zone_evaluator::ZoneEvaluator,
};

/// Highest out count a run-expectancy table is indexed by.
const MAX_OUTS: u8 = 2;

/// Decides whether a called pitch was a missed call.
pub trait CallEvaluator: fmt::Debug + Send {
    /// Returns whether the call on `pitch` was wrong.
    ///
    /// Only invoked for called strikes and called balls. Implementations return
    /// `false` when the pitch lacks the data they judge by.
    fn is_missed_call(&mut self, pitch: &PitchRecord) -> bool;

    /// Returns the signed home favor of the call, or `None` if the call stands.
    fn missed_call_favor(
        &mut self,
        pitch: &PitchRecord,
        is_top_half: bool,
        runners: RunnerState,
        delta: &DeltaTable,
    ) -> Result<Option<f64>, TableLookupError> {
        if !pitch.is_decision() || !self.is_missed_call(pitch) {
            return Ok(None);
        }
        price_missed_call(pitch, is_top_half, runners, delta)
    }

    /// Returns the signed home favor of the call; `0.0` when the call was correct.
    fn evaluate(
        &mut self,
        pitch: &PitchRecord,
        is_top_half: bool,
        runners: RunnerState,
        delta: &DeltaTable,
    ) -> Result<f64, TableLookupError> {
        Ok(self
            .missed_call_favor(pitch, is_top_half, runners, delta)?
            .unwrap_or(0.0))
    }
}

/// Prices a missed call as a signed home favor.
///
/// A ball called a strike is worth `+delta` at the pre-pitch count, a strike
/// called a ball `-delta`; the sign flips in the bottom half. Returns `None`
/// when the recorded count has no pre-pitch state to price.
pub fn price_missed_call(
    pitch: &PitchRecord,
    is_top_half: bool,
    runners: RunnerState,
    delta: &DeltaTable,
) -> Result<Option<f64>, TableLookupError> {
    let Some(before) = pitch.count_before() else {
        if pitch.is_decision() {
            tracing::warn!(
                count = %pitch.count,
                call = ?pitch.call,
                "recorded count cannot precede this call, skipping pitch"
            );
        }
        return Ok(None);
    };
    // a called third strike may already carry the out it caused
    let outs = before.outs.min(MAX_OUTS);

    let defense_favor = match pitch.call {
        PitchCall::CalledStrike => {
            delta.delta_for_strike_call(before.balls, before.strikes, outs, runners)?
        }
        PitchCall::CalledBall => {
            -delta.delta_for_ball_call(before.balls, before.strikes, outs, runners)?
        }
        PitchCall::NotACall => return Ok(None),
    };
    Ok(Some(if is_top_half {
        defense_favor
    } else {
        -defense_favor
    }))
}

/// Name of a call evaluation strategy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "kebab-case")]
pub enum CallMethod {
    #[display("zone")]
    Zone,
    #[display("buffer")]
    Buffer,
    #[default]
    #[display("monte-carlo")]
    MonteCarlo,
}

impl CallMethod {
    pub const ALL: [Self; 3] = [Self::Zone, Self::Buffer, Self::MonteCarlo];

    /// Builds the evaluator. `seed` only affects [`CallMethod::MonteCarlo`]; without
    /// one the sampler is seeded from OS entropy.
    #[must_use]
    pub fn build(self, seed: Option<SampleSeed>) -> Box<dyn CallEvaluator> {
        match self {
            Self::Zone => Box::new(ZoneEvaluator::new()),
            Self::Buffer => Box::new(BufferEvaluator::new()),
            Self::MonteCarlo => Box::new(
                seed.map_or_else(MonteCarloEvaluator::new, MonteCarloEvaluator::with_seed),
            ),
        }
    }
}

#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("unknown call method `{name}` (expected zone, buffer or monte-carlo)")]
pub struct UnknownCallMethodError {
    pub name: String,
}

impl FromStr for CallMethod {
    type Err = UnknownCallMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCallMethodError { name: s.to_owned() })
    }
}
