//! Monte-Carlo strategy: account for pitch-tracking measurement error.
//!
//! The tracked location of a pitch is accurate to within a small disk. Instead of
//! judging the single reported point, the evaluator samples points across that
//! disk and only calls a miss when a strong majority of them disagree with the
//! umpire.
//!
//! Sampling is driven by a seedable [`Pcg32`]: the same [`SampleSeed`] over the
//! same game always yields the same missed calls.

use std::{f64::consts::TAU, fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use umpire_engine::{PitchCall, PitchLocation, PitchRecord, StrikeZone};

use crate::call_evaluator::CallEvaluator;

/// Radius of the tracking error disk, in feet (0.25 inch).
pub const MARGIN_OF_ERROR_FEET: f64 = 0.25 / 12.0;

/// Number of points sampled per pitch.
pub const SAMPLE_COUNT: usize = 500;

/// Share of samples that must disagree with the call for it to be a miss.
pub const MISS_THRESHOLD: f64 = 0.9;

/// Seed for deterministic sampling.
///
/// A 128-bit seed, serialized as 32 hexadecimal digits.
///
/// # Example
///
/// ```
/// use umpire_evaluator::monte_carlo_evaluator::SampleSeed;
///
/// let seed: SampleSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
/// assert_eq!(seed.to_string(), "000102030405060708090a0b0c0d0e0f");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSeed([u8; 16]);

#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("invalid sample seed `{input}`: expected 32 hexadecimal digits")]
pub struct InvalidSeedError {
    pub input: String,
}

impl FromStr for SampleSeed {
    type Err = InvalidSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || InvalidSeedError {
            input: s.to_owned(),
        };
        if s.len() != 32 {
            return Err(error());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| error())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl fmt::Display for SampleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl Serialize for SampleSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SampleSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

impl Distribution<SampleSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SampleSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        SampleSeed(seed)
    }
}

/// Judges calls by sampling the tracking error disk around each pitch.
///
/// Sample radii are uniform in `[0, MARGIN_OF_ERROR_FEET]` and angles uniform in
/// `[0, 2π)`. A called ball is a miss when at least [`MISS_THRESHOLD`] of the
/// samples land in the zone, a called strike when at least that share lands
/// outside. Pitches without tracking data are never misses.
#[derive(Debug, Clone)]
pub struct MonteCarloEvaluator {
    seed: SampleSeed,
    rng: Pcg32,
    samples: usize,
    margin_of_error: f64,
}

impl MonteCarloEvaluator {
    /// Creates an evaluator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: SampleSeed) -> Self {
        Self {
            seed,
            rng: Pcg32::from_seed(seed.0),
            samples: SAMPLE_COUNT,
            margin_of_error: MARGIN_OF_ERROR_FEET,
        }
    }

    #[must_use]
    pub fn seed(&self) -> SampleSeed {
        self.seed
    }

    /// Fraction of jittered samples of `location` that land inside `zone`.
    #[expect(clippy::cast_precision_loss)]
    pub fn in_zone_fraction(&mut self, location: PitchLocation, zone: &StrikeZone) -> f64 {
        let inside = (0..self.samples)
            .filter(|_| {
                let radius = self.rng.random_range(0.0..=self.margin_of_error);
                let angle = self.rng.random_range(0.0..TAU);
                let (sin, cos) = angle.sin_cos();
                zone.contains(location.offset(radius * cos, radius * sin))
            })
            .count();
        inside as f64 / self.samples as f64
    }
}

impl Default for MonteCarloEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl CallEvaluator for MonteCarloEvaluator {
    fn is_missed_call(&mut self, pitch: &PitchRecord) -> bool {
        let Some((location, zone)) = pitch.tracked_location() else {
            return false;
        };
        let in_zone = self.in_zone_fraction(location, &zone);
        match pitch.call {
            PitchCall::CalledBall => in_zone >= MISS_THRESHOLD,
            PitchCall::CalledStrike => 1.0 - in_zone >= MISS_THRESHOLD,
            PitchCall::NotACall => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use umpire_engine::{Count, RunTables, RunnerState};

    use super::*;

    const ZONE: StrikeZone = StrikeZone::new(-0.83, 0.83, 3.5, 1.5);
    const SEED: &str = "0123456789abcdef0123456789abcdef";

    fn evaluator() -> MonteCarloEvaluator {
        MonteCarloEvaluator::with_seed(SEED.parse().unwrap())
    }

    fn pitch(call: PitchCall, location: PitchLocation) -> PitchRecord {
        PitchRecord {
            call,
            count: Count::new(1, 1, 0),
            zone: None,
            location: Some(location),
            strike_zone: Some(ZONE),
        }
    }

    #[test]
    fn test_center_is_always_in_zone() {
        let fraction = evaluator().in_zone_fraction(ZONE.center(), &ZONE);
        assert!((fraction - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_edge_is_about_half_in_zone() {
        let fraction = evaluator().in_zone_fraction(PitchLocation::new(ZONE.right, 2.5), &ZONE);
        assert!((fraction - 0.5).abs() < 0.1, "fraction = {fraction}");
    }

    #[test]
    fn test_unseeded_runs_converge() {
        const RUNS: u32 = 50;
        let edge = PitchLocation::new(ZONE.right, 2.5);
        let mut total = 0.0;
        for _ in 0..RUNS {
            let mut evaluator = MonteCarloEvaluator::new();
            let center = evaluator.in_zone_fraction(ZONE.center(), &ZONE);
            assert!((center - 1.0).abs() < f64::EPSILON);
            total += evaluator.in_zone_fraction(edge, &ZONE);
        }
        let mean = total / f64::from(RUNS);
        assert!((mean - 0.5).abs() < 0.05, "mean = {mean}");
    }

    #[test]
    fn test_far_outside_is_never_in_zone() {
        let fraction = evaluator().in_zone_fraction(PitchLocation::new(2.0, 2.5), &ZONE);
        assert!(fraction.abs() < f64::EPSILON);
    }

    #[test]
    fn test_same_seed_same_result() {
        let location = PitchLocation::new(ZONE.right + 0.005, ZONE.top - 0.01);
        let a = evaluator().in_zone_fraction(location, &ZONE);
        let b = evaluator().in_zone_fraction(location, &ZONE);
        assert!((a - b).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clear_misses_and_edge_calls() {
        let mut evaluator = evaluator();
        assert!(evaluator.is_missed_call(&pitch(PitchCall::CalledBall, ZONE.center())));
        assert!(!evaluator.is_missed_call(&pitch(PitchCall::CalledStrike, ZONE.center())));
        let outside = PitchLocation::new(1.5, 2.5);
        assert!(evaluator.is_missed_call(&pitch(PitchCall::CalledStrike, outside)));
        assert!(!evaluator.is_missed_call(&pitch(PitchCall::CalledBall, outside)));

        let edge = PitchLocation::new(ZONE.left, 2.5);
        assert!(!evaluator.is_missed_call(&pitch(PitchCall::CalledStrike, edge)));
        assert!(!evaluator.is_missed_call(&pitch(PitchCall::CalledBall, edge)));
    }

    #[test]
    fn test_priced_like_other_strategies() {
        let delta = &RunTables::default_tables().delta;
        let record = pitch(PitchCall::CalledBall, ZONE.center());
        let favor = evaluator()
            .evaluate(&record, false, RunnerState::EMPTY, delta)
            .unwrap();
        let expected = delta.delta_for_ball_call(0, 1, 0, RunnerState::EMPTY).unwrap();
        assert!((favor - expected).abs() < 1e-12);
    }

    #[test]
    fn test_seed_text_round_trip_and_errors() {
        let seed: SampleSeed = SEED.parse().unwrap();
        assert_eq!(seed.to_string(), SEED);
        let json = serde_json::to_string(&seed).unwrap();
        assert_eq!(json, format!("\"{SEED}\""));
        assert_eq!(serde_json::from_str::<SampleSeed>(&json).unwrap(), seed);

        assert!("abc".parse::<SampleSeed>().is_err());
        assert!("zz23456789abcdef0123456789abcdef".parse::<SampleSeed>().is_err());
    }
}
