use serde::Serialize;
use serde_json::{Map, Value};

use crate::ScoreboardSnapshot;

/// Fields that differ between two snapshots; unchanged fields are `None`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreboardDiff {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abstract_game_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abstract_game_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coded_game_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_abv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_abv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inning: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inning_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outs: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runners: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub umpire: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_pk: Option<u64>,
}

impl ScoreboardDiff {
    #[must_use]
    pub fn is_changed(&self) -> bool {
        *self != Self::default()
    }

    /// Changed fields as a flat key-value mapping.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Returns whether the field named `key` changed.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.to_map().contains_key(key)
    }
}

fn changed<T: PartialEq + Clone>(old: &T, new: &T) -> Option<T> {
    (old != new).then(|| new.clone())
}

/// Returns the fields of `new` that differ from `old`.
#[must_use]
pub fn diff(old: &ScoreboardSnapshot, new: &ScoreboardSnapshot) -> ScoreboardDiff {
    ScoreboardDiff {
        abstract_game_state: changed(&old.abstract_game_state, &new.abstract_game_state),
        abstract_game_code: changed(&old.abstract_game_code, &new.abstract_game_code),
        detailed_state: changed(&old.detailed_state, &new.detailed_state),
        coded_game_state: changed(&old.coded_game_state, &new.coded_game_state),
        delay_seconds: changed(&old.delay_seconds, &new.delay_seconds),
        status_code: changed(&old.status_code, &new.status_code),
        game_state: changed(&old.game_state, &new.game_state),
        away_abv: changed(&old.away_abv, &new.away_abv),
        home_abv: changed(&old.home_abv, &new.home_abv),
        away_score: changed(&old.away_score, &new.away_score),
        home_score: changed(&old.home_score, &new.home_score),
        start_time: changed(&old.start_time, &new.start_time),
        inning: changed(&old.inning, &new.inning),
        inning_state: changed(&old.inning_state, &new.inning_state),
        outs: changed(&old.outs, &new.outs),
        runners: changed(&old.runners, &new.runners),
        umpire: changed(&old.umpire, &new.umpire),
        game_pk: changed(&old.game_pk, &new.game_pk),
    }
}
