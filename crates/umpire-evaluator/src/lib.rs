//! Missed-call detection and run-favor accounting for umpire ball/strike calls.
//!
//! The crate has two levels:
//!
//! 1. **Call Evaluation** ([`call_evaluator`]) - Decides whether a single called
//!    pitch was wrong and prices the mistake in expected runs.
//!
//! 2. **Game Evaluation** ([`game_evaluator`]) - Replays every pitch of a game,
//!    tracking base runners, and sums the priced mistakes into a home favor.
//!
//! # Strategies
//!
//! Three interchangeable [`CallEvaluator`](call_evaluator::CallEvaluator)
//! implementations decide whether a call was wrong:
//!
//! - [`zone_evaluator`] - Trusts the feed's zone number (1-9 in the zone)
//! - [`buffer_evaluator`] - Forgives every call within a thin band around the zone edges
//! - [`monte_carlo_evaluator`] - Jitters the tracked location inside a measurement
//!   error disk and requires a 90% consensus before calling a miss
//!
//! [`CallMethod`](call_evaluator::CallMethod) selects one by name.
//!
//! # Sign Convention
//!
//! A positive favor means the home team benefited. A ball wrongly called a strike
//! helps the defense; in the top half of an inning the home team is on defense.
//!
//! # Example
//!
//! ```
//! use umpire_engine::{RunTables, feed::Game};
//! use umpire_evaluator::{call_evaluator::CallMethod, game_evaluator};
//!
//! let game: Game = serde_json::from_str(r#"{"liveData": {"plays": {"allPlays": []}}}"#).unwrap();
//! let mut evaluator = CallMethod::Zone.build(None);
//! let favor = game_evaluator::evaluate_game(
//!     &game,
//!     evaluator.as_mut(),
//!     &RunTables::default_tables().delta,
//! )
//! .unwrap();
//! assert_eq!(favor.missed_call_count, 0);
//! ```

pub mod buffer_evaluator;
pub mod call_evaluator;
pub mod game_evaluator;
pub mod monte_carlo_evaluator;
pub mod zone_evaluator;
