//! Game evaluation: replaying a game and accumulating the umpire's favor.
//!
//! [`evaluate_game`] walks every at-bat in order, keeps base occupancy up to date
//! with a [`RunnerTracker`], and asks the call evaluator about every pitch. Each
//! miss is kept as a [`MissedCall`] so it can be traced later without the game.

use std::fmt;

use serde::Serialize;
use umpire_engine::{
    DeltaTable, PitchRecord, RunnerState, RunnerTracker, TableLookupError,
    feed::{AtBat, Game},
};

use crate::call_evaluator::CallEvaluator;

/// One pitch the umpire got wrong, with what it cost.
#[derive(Debug, Clone, Serialize)]
pub struct MissedCall {
    /// 1-based position among the game's missed calls.
    pub ordinal: usize,
    pub at_bat_index: usize,
    pub event_index: usize,
    pub inning: u8,
    pub is_top_inning: bool,
    pub pitcher: String,
    pub batter: String,
    pub runners: RunnerState,
    pub pitch: PitchRecord,
    /// Signed expected runs given to the home team.
    pub home_favor: f64,
}

impl fmt::Display for MissedCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let half = if self.is_top_inning { "Top" } else { "Bottom" };
        writeln!(f, "{half} {}", self.inning)?;
        writeln!(f, "{} to {}", self.pitcher, self.batter)?;

        let outs = self.pitch.count.outs;
        let noun = if outs == 1 { "out" } else { "outs" };
        writeln!(f, "{outs} {noun}, {}", self.runners)?;

        let count = self.pitch.count_before().unwrap_or(self.pitch.count);
        writeln!(f, "{count}, {}", self.pitch.call.describe_miss())?;
        if let Some(zone) = self.pitch.zone {
            writeln!(f, "Zone: {zone}")?;
        }
        if let Some(location) = self.pitch.location {
            writeln!(f, "pX = {:.3} | pZ = {:.3}", location.x, location.z)?;
        }
        if let Some(zone) = self.pitch.strike_zone {
            writeln!(f, "left = {:.3} | right = {:.3}", zone.left, zone.right)?;
            writeln!(f, "bot = {:.3} | top = {:.3}", zone.bottom, zone.top)?;
        }
        write!(f, "Home Favor: {:5.3}", self.home_favor)
    }
}

/// Missed calls of one game and their net effect.
#[derive(Debug, Default, Clone, Serialize)]
pub struct GameFavor {
    pub missed_call_count: usize,
    /// Net expected runs given to the home team; negative favors the away team.
    pub home_favor: f64,
    pub missed_calls: Vec<MissedCall>,
}

impl GameFavor {
    /// Umpire favor as shown on a scoreboard, e.g. `+0.52 NYY (4)`.
    ///
    /// Names the favored team with a non-negative amount, followed by the number
    /// of missed calls.
    #[must_use]
    pub fn summary(&self, home: &str, away: &str) -> String {
        let (team, favor) = if self.home_favor < 0.0 {
            (away, -self.home_favor)
        } else {
            (home, self.home_favor)
        };
        format!("{favor:+.2} {team} ({})", self.missed_call_count)
    }

    fn record(&mut self, mut missed_call: MissedCall) {
        self.missed_call_count += 1;
        missed_call.ordinal = self.missed_call_count;
        self.home_favor += missed_call.home_favor;
        self.missed_calls.push(missed_call);
    }
}

impl fmt::Display for GameFavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Missed Calls. {:.3} Home Favor",
            self.missed_call_count, self.home_favor
        )
    }
}

/// Replays `game` and sums the favor of every missed call.
///
/// Every pitch is priced against the bases as they stood when it was thrown.
/// Fails only when a pitch's count cannot index the delta table.
pub fn evaluate_game(
    game: &Game,
    evaluator: &mut dyn CallEvaluator,
    delta: &DeltaTable,
) -> Result<GameFavor, TableLookupError> {
    let mut tracker = RunnerTracker::new();
    let mut favor = GameFavor::default();

    for at_bat in game.at_bats() {
        tracker.place_runners_for_new_at_bat(at_bat);
        evaluate_at_bat(at_bat, &mut tracker, evaluator, delta, &mut favor)?;
        tracker.advance_on_play_outcome(at_bat);
    }

    tracing::debug!(
        game_pk = game.game_pk,
        missed_calls = favor.missed_call_count,
        home_favor = favor.home_favor,
        "evaluated game"
    );
    Ok(favor)
}

fn evaluate_at_bat(
    at_bat: &AtBat,
    tracker: &mut RunnerTracker,
    evaluator: &mut dyn CallEvaluator,
    delta: &DeltaTable,
    favor: &mut GameFavor,
) -> Result<(), TableLookupError> {
    let is_top = at_bat.about.is_top_inning;
    let last = at_bat.play_events.len().saturating_sub(1);

    for (position, event) in at_bat.play_events.iter().enumerate() {
        if let Some(pitch) = event.pitch_record() {
            let runners = tracker.state();
            if let Some(home_favor) = evaluator.missed_call_favor(&pitch, is_top, runners, delta)? {
                let missed_call = MissedCall {
                    ordinal: 0,
                    at_bat_index: at_bat.about.at_bat_index,
                    event_index: event.index,
                    inning: at_bat.about.inning,
                    is_top_inning: is_top,
                    pitcher: at_bat.matchup.pitcher.full_name.clone(),
                    batter: at_bat.matchup.batter.full_name.clone(),
                    runners,
                    pitch,
                    home_favor,
                };
                tracing::debug!(
                    inning = missed_call.inning,
                    at_bat = missed_call.at_bat_index,
                    event = missed_call.event_index,
                    call = ?pitch.call,
                    home_favor,
                    "missed call"
                );
                favor.record(missed_call);
            }
        }
        if position < last {
            tracker.apply_movements_at(at_bat, event.index);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use umpire_engine::{Count, PitchCall, PitchLocation, RunTables, StrikeZone};

    use super::*;
    use crate::{
        call_evaluator::CallMethod, monte_carlo_evaluator::SampleSeed,
        zone_evaluator::ZoneEvaluator,
    };

    fn pitch_event(index: usize, code: &str, count: (u8, u8, u8), zone: u8, x: f64) -> Value {
        json!({
            "index": index,
            "isPitch": true,
            "details": {"code": code, "description": code},
            "count": {"balls": count.0, "strikes": count.1, "outs": count.2},
            "pitchData": {
                "zone": zone,
                "strikeZoneTop": 3.4,
                "strikeZoneBottom": 1.6,
                "coordinates": {"pX": x, "pZ": 2.5}
            }
        })
    }

    fn leg(runner: u64, start: Value, end: Value, play_index: usize) -> Value {
        json!({
            "movement": {"start": start, "end": end, "isOut": false},
            "details": {"runner": {"id": runner}, "playIndex": play_index}
        })
    }

    /// Top 1st: a single, then a missed strike call with a runner on first.
    /// Bottom 1st: a missed ball call with the bases empty.
    fn game() -> Game {
        serde_json::from_value(json!({
            "gamePk": 1,
            "gameData": {"teams": {"home": {"abbreviation": "SEA"}, "away": {"abbreviation": "TEX"}}},
            "liveData": {"plays": {"allPlays": [
                {
                    "about": {"atBatIndex": 0, "inning": 1, "isTopInning": true, "halfInning": "top"},
                    "matchup": {"pitcher": {"id": 10, "fullName": "Home Pitcher"}, "batter": {"id": 1, "fullName": "Away One"}},
                    "playEvents": [pitch_event(0, "X", (0, 0, 0), 5, 0.0)],
                    "runners": [leg(1, json!(null), json!("1B"), 0)]
                },
                {
                    "about": {"atBatIndex": 1, "inning": 1, "isTopInning": true, "halfInning": "top"},
                    "matchup": {"pitcher": {"id": 10, "fullName": "Home Pitcher"}, "batter": {"id": 2, "fullName": "Away Two"}},
                    "playEvents": [
                        pitch_event(0, "C", (0, 1, 0), 12, 1.5),
                        pitch_event(1, "S", (0, 2, 0), 5, 0.0)
                    ],
                    "runners": []
                },
                {
                    "about": {"atBatIndex": 2, "inning": 1, "isTopInning": false, "halfInning": "bottom"},
                    "matchup": {"pitcher": {"id": 20, "fullName": "Away Pitcher"}, "batter": {"id": 3, "fullName": "Home One"}},
                    "playEvents": [
                        pitch_event(0, "B", (1, 0, 0), 5, 0.0),
                        pitch_event(1, "C", (1, 1, 0), 5, 0.1)
                    ],
                    "runners": []
                }
            ]}}
        }))
        .unwrap()
    }

    fn delta() -> &'static DeltaTable {
        &RunTables::default_tables().delta
    }

    #[test]
    fn test_evaluate_game_zone_strategy() {
        let favor = evaluate_game(&game(), &mut ZoneEvaluator::new(), delta()).unwrap();

        assert_eq!(favor.missed_call_count, 2);
        let first = &favor.missed_calls[0];
        assert_eq!(first.ordinal, 1);
        assert_eq!(first.runners, RunnerState::new(true, false, false));
        assert!(first.is_top_inning);
        let expected_first = delta()
            .delta_for_strike_call(0, 0, 0, RunnerState::new(true, false, false))
            .unwrap();
        assert!((first.home_favor - expected_first).abs() < 1e-12);

        let second = &favor.missed_calls[1];
        assert_eq!(second.ordinal, 2);
        assert_eq!(second.runners, RunnerState::EMPTY);
        // strike called ball in the bottom half helps the home offense
        let expected_second = delta()
            .delta_for_ball_call(0, 0, 0, RunnerState::EMPTY)
            .unwrap();
        assert!((second.home_favor - expected_second).abs() < 1e-12);

        assert!((favor.home_favor - (expected_first + expected_second)).abs() < 1e-12);
    }

    #[test]
    fn test_seeded_monte_carlo_is_deterministic() {
        let seed: SampleSeed = "00000000000000000000000000000042".parse().unwrap();
        let run = || {
            let mut evaluator = CallMethod::MonteCarlo.build(Some(seed));
            evaluate_game(&game(), evaluator.as_mut(), delta()).unwrap()
        };
        let a = run();
        let b = run();
        assert_eq!(a.missed_call_count, b.missed_call_count);
        assert!((a.home_favor - b.home_favor).abs() < f64::EPSILON);
        // both misses are far from the zone edges
        assert_eq!(a.missed_call_count, 2);
    }

    #[test]
    fn test_mid_at_bat_steal_changes_runner_state() {
        let game: Game = serde_json::from_value(json!({
            "liveData": {"plays": {"allPlays": [{
                "about": {"inning": 3, "isTopInning": true},
                "playEvents": [
                    pitch_event(0, "C", (0, 1, 1), 12, 1.5),
                    {"index": 1, "isPitch": false, "details": {"description": "Stolen Base 2B"}},
                    pitch_event(2, "C", (0, 2, 1), 12, 1.5),
                    pitch_event(3, "X", (0, 2, 1), 5, 0.0)
                ],
                "runners": [
                    {"movement": {"originBase": "1B", "start": "1B", "end": "2B", "isOut": false},
                     "details": {"runner": {"id": 7}, "playIndex": 1}},
                    {"movement": {"originBase": "1B", "start": "2B", "end": "score", "isOut": false},
                     "details": {"runner": {"id": 7}, "playIndex": 3}}
                ]
            }]}}
        }))
        .unwrap();

        let favor = evaluate_game(&game, &mut ZoneEvaluator::new(), delta()).unwrap();
        let runners: Vec<_> = favor.missed_calls.iter().map(|m| m.runners).collect();
        assert_eq!(
            runners,
            vec![
                RunnerState::new(true, false, false),
                RunnerState::new(false, true, false)
            ]
        );
    }

    #[test]
    fn test_summary_names_favored_team() {
        let mut favor = GameFavor {
            missed_call_count: 4,
            home_favor: 0.5213,
            missed_calls: vec![],
        };
        assert_eq!(favor.summary("NYY", "BOS"), "+0.52 NYY (4)");
        favor.home_favor = -0.3;
        assert_eq!(favor.summary("NYY", "BOS"), "+0.30 BOS (4)");
        assert_eq!(GameFavor::default().summary("NYY", "BOS"), "+0.00 NYY (0)");
    }

    #[test]
    fn test_missed_call_trace() {
        let missed_call = MissedCall {
            ordinal: 1,
            at_bat_index: 12,
            event_index: 3,
            inning: 4,
            is_top_inning: false,
            pitcher: "Logan Gilbert".to_owned(),
            batter: "Corey Seager".to_owned(),
            runners: RunnerState::new(true, false, true),
            pitch: PitchRecord {
                call: PitchCall::CalledStrike,
                count: Count::new(2, 2, 1),
                zone: Some(14),
                location: Some(PitchLocation::new(0.95, 1.4)),
                strike_zone: Some(StrikeZone::new(-0.83, 0.83, 3.5, 1.5)),
            },
            home_favor: -0.25,
        };
        assert_eq!(
            missed_call.to_string(),
            "Bottom 4\n\
             Logan Gilbert to Corey Seager\n\
             1 out, runners on first and third\n\
             2-1, ball called strike\n\
             Zone: 14\n\
             pX = 0.950 | pZ = 1.400\n\
             left = -0.830 | right = 0.830\n\
             bot = 1.500 | top = 3.500\n\
             Home Favor: -0.250"
        );
    }
}
