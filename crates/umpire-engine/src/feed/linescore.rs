use serde::{Deserialize, Serialize};

use super::Person;
use crate::RunnerState;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Linescore {
    #[serde(default)]
    pub current_inning: u8,
    /// Missing before first pitch; treated as the top half.
    #[serde(default = "default_true")]
    pub is_top_inning: bool,
    #[serde(default)]
    pub balls: u8,
    #[serde(default)]
    pub strikes: u8,
    #[serde(default)]
    pub outs: u8,
    #[serde(default)]
    pub teams: LinescoreTeams,
    #[serde(default)]
    pub offense: Offense,
}

fn default_true() -> bool {
    true
}

impl Linescore {
    /// `T` for the top half, `B` for the bottom half.
    #[must_use]
    pub fn inning_state(&self) -> &'static str {
        if self.is_top_inning { "T" } else { "B" }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LinescoreTeams {
    #[serde(default)]
    pub home: TeamLine,
    #[serde(default)]
    pub away: TeamLine,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TeamLine {
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub hits: u32,
    #[serde(default)]
    pub errors: u32,
}

/// Offense snapshot of the live linescore: who is on base right now.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Offense {
    #[serde(default)]
    pub first: Option<Person>,
    #[serde(default)]
    pub second: Option<Person>,
    #[serde(default)]
    pub third: Option<Person>,
    #[serde(default)]
    pub batter: Option<Person>,
}

impl From<&Offense> for RunnerState {
    fn from(offense: &Offense) -> Self {
        RunnerState::new(
            offense.first.is_some(),
            offense.second.is_some(),
            offense.third.is_some(),
        )
    }
}
