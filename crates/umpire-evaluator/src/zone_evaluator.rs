//! Zone-number strategy: trust the feed's zone classification.

use umpire_engine::{PitchCall, PitchRecord, is_zone_number_in_zone};

use crate::call_evaluator::CallEvaluator;

/// Judges calls by the feed's zone number.
///
/// Zones 1-9 tile the strike zone and 11-14 surround it. A called strike in a
/// zone above 10 or a called ball in zones 1-9 is a miss. Pitches without a zone
/// number or without a usable tracked location are never misses.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZoneEvaluator;

impl ZoneEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Applies the zone-number rule alone, without looking at tracking data.
    #[must_use]
    pub fn is_missed(pitch: &PitchRecord) -> bool {
        let Some(zone) = pitch.zone else {
            return false;
        };
        match pitch.call {
            PitchCall::CalledStrike => zone > 10,
            PitchCall::CalledBall => is_zone_number_in_zone(zone),
            PitchCall::NotACall => false,
        }
    }
}

impl CallEvaluator for ZoneEvaluator {
    fn is_missed_call(&mut self, pitch: &PitchRecord) -> bool {
        pitch.tracked_location().is_some() && Self::is_missed(pitch)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use umpire_engine::{Count, PitchLocation, RunTables, RunnerState, StrikeZone, feed::PlayEvent};

    use super::*;

    const ZONE: StrikeZone = StrikeZone::new(-0.83, 0.83, 3.5, 1.5);

    fn pitch(call: PitchCall, zone: Option<u8>, count: Count) -> PitchRecord {
        PitchRecord {
            call,
            count,
            zone,
            location: Some(PitchLocation::new(1.2, 2.5)),
            strike_zone: Some(ZONE),
        }
    }

    #[test]
    fn test_zone_rules() {
        let count = Count::new(1, 1, 0);
        assert!(ZoneEvaluator::is_missed(&pitch(PitchCall::CalledStrike, Some(11), count)));
        assert!(ZoneEvaluator::is_missed(&pitch(PitchCall::CalledStrike, Some(14), count)));
        assert!(!ZoneEvaluator::is_missed(&pitch(PitchCall::CalledStrike, Some(5), count)));
        assert!(ZoneEvaluator::is_missed(&pitch(PitchCall::CalledBall, Some(1), count)));
        assert!(ZoneEvaluator::is_missed(&pitch(PitchCall::CalledBall, Some(9), count)));
        assert!(!ZoneEvaluator::is_missed(&pitch(PitchCall::CalledBall, Some(12), count)));
        assert!(!ZoneEvaluator::is_missed(&pitch(PitchCall::NotACall, Some(12), count)));
        assert!(!ZoneEvaluator::is_missed(&pitch(PitchCall::CalledBall, None, count)));
    }

    #[test]
    fn test_called_strike_outside_with_runner_on_first_and_second() {
        // the recorded 1-1 count already includes the called strike
        let delta = &RunTables::default_tables().delta;
        let runners = RunnerState::try_from(3).unwrap();
        let record = pitch(PitchCall::CalledStrike, Some(11), Count::new(1, 1, 1));

        let favor = ZoneEvaluator::new()
            .evaluate(&record, true, runners, delta)
            .unwrap();

        let expected = delta.delta_for_strike_call(1, 0, 1, runners).unwrap();
        assert!((favor - expected).abs() < 1e-12);
        assert!(favor > 0.0);
    }

    #[test]
    fn test_correct_call_is_zero() {
        let delta = &RunTables::default_tables().delta;
        let record = pitch(PitchCall::CalledBall, Some(13), Count::new(2, 0, 0));
        let favor = ZoneEvaluator::new()
            .evaluate(&record, false, RunnerState::EMPTY, delta)
            .unwrap();
        assert!(favor.abs() < f64::EPSILON);
    }

    #[test]
    fn test_untracked_pitch_is_not_priced() {
        let delta = &RunTables::default_tables().delta;
        let runners = RunnerState::new(true, true, false);
        let event: PlayEvent = serde_json::from_value(json!({
            "index": 0,
            "isPitch": true,
            "details": {"code": "C", "description": "Called Strike"},
            "count": {"balls": 1, "strikes": 1, "outs": 1},
            "pitchData": {"zone": 11, "coordinates": {}}
        }))
        .unwrap();
        let record = event.pitch_record().unwrap();
        assert_eq!(record.zone, Some(11));
        assert!(record.tracked_location().is_none());

        let mut evaluator = ZoneEvaluator::new();
        assert!(!evaluator.is_missed_call(&record));
        let favor = evaluator.evaluate(&record, true, runners, delta).unwrap();
        assert!(favor.abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_finite_location_is_not_priced() {
        let delta = &RunTables::default_tables().delta;
        let runners = RunnerState::new(true, true, false);
        let mut record = pitch(PitchCall::CalledStrike, Some(11), Count::new(1, 1, 1));
        record.location = Some(PitchLocation::new(f64::NAN, 2.5));

        let mut evaluator = ZoneEvaluator::new();
        assert!(!evaluator.is_missed_call(&record));
        let favor = evaluator.evaluate(&record, true, runners, delta).unwrap();
        assert!(favor.abs() < f64::EPSILON);
    }
}
