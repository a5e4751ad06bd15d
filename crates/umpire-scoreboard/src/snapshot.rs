use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use umpire_engine::{RunnerState, feed::Game};

/// Scoreboard fields of one game at one point in time.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreboardSnapshot {
    pub abstract_game_state: String,
    pub abstract_game_code: String,
    pub detailed_state: String,
    pub coded_game_state: String,
    pub delay_seconds: u64,
    pub status_code: String,
    /// Coarse phase: `Pregame`, `Live`, `Final`, `Delayed`, `Suspended`.
    pub game_state: String,
    pub away_abv: String,
    pub home_abv: String,
    pub away_score: u32,
    pub home_score: u32,
    pub start_time: String,
    pub inning: u8,
    /// `T` or `B`.
    pub inning_state: String,
    pub outs: u8,
    /// Base occupancy as a 3-bit integer.
    pub runners: u8,
    /// Umpire favor summary, e.g. `+0.52 NYY (4)`.
    pub umpire: String,
    pub game_pk: u64,
}

impl ScoreboardSnapshot {
    /// Reads the scoreboard fields out of a game feed.
    ///
    /// Runners come from the linescore's offense, which reflects the bases right
    /// now even in the middle of an at-bat.
    #[must_use]
    pub fn from_game(game: &Game, umpire: String, delay_seconds: u64) -> Self {
        let status = &game.game_data.status;
        let linescore = &game.live_data.linescore;
        Self {
            abstract_game_state: status.abstract_game_state.clone(),
            abstract_game_code: status.abstract_game_code.clone(),
            detailed_state: status.detailed_state.clone(),
            coded_game_state: status.coded_game_state.clone(),
            delay_seconds,
            status_code: status.status_code.clone(),
            game_state: status.phase().to_owned(),
            away_abv: game.away_abbreviation().to_owned(),
            home_abv: game.home_abbreviation().to_owned(),
            away_score: linescore.teams.away.runs,
            home_score: linescore.teams.home.runs,
            start_time: game.game_data.datetime.date_time.clone(),
            inning: linescore.current_inning,
            inning_state: linescore.inning_state().to_owned(),
            outs: linescore.outs,
            runners: RunnerState::from(&linescore.offense).as_int(),
            umpire,
            game_pk: game.game_pk,
        }
    }

    #[must_use]
    pub fn runner_state(&self) -> RunnerState {
        RunnerState::try_from(self.runners).unwrap_or_default()
    }

    /// All fields as a flat key-value mapping.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}
