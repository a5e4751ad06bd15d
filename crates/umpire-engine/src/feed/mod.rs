//! Serde schema of the live game feed.
//!
//! Only the fields the evaluators and the scoreboard read are modeled. Every
//! field is optional or defaulted: in-progress games omit large parts of the
//! document, and a missing field must never abort an evaluation.
//!
//! # Example
//!
//! ```
//! use umpire_engine::feed::Game;
//!
//! let game: Game = serde_json::from_str(r#"{
//!     "gamePk": 717404,
//!     "gameData": {"teams": {"home": {"abbreviation": "SEA"}, "away": {"abbreviation": "TEX"}}},
//!     "liveData": {"plays": {"allPlays": []}}
//! }"#).unwrap();
//!
//! assert_eq!(game.game_pk, 717404);
//! assert_eq!(game.home_abbreviation(), "SEA");
//! assert!(game.at_bats().is_empty());
//! ```

pub use self::{game::*, linescore::*, plays::*};

mod game;
mod linescore;
mod plays;

/// A player reference (`{"id": 123, "fullName": "..."}`).
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub full_name: String,
}
