//! Game-walking state and run values.
//!
//! - [`RunnerTracker`] - Base occupancy as a game is replayed at-bat by at-bat
//! - [`RunExpectancyTable`] - Expected runs for the rest of the inning per game state
//! - [`DeltaTable`] - Run swing between a ball and a strike per pre-pitch state
//! - [`RunTables`] - The two tables loaded together from JSON
//!
//! # Replay Order
//!
//! Evaluators replay a game as follows:
//!
//! 1. [`RunnerTracker::place_runners_for_new_at_bat`] at the start of each at-bat
//! 2. For each play event: price the pitch against [`RunnerTracker::state`], then
//!    [`RunnerTracker::apply_movements_at`] for steals, wild pitches and pickoffs
//! 3. [`RunnerTracker::advance_on_play_outcome`] once the at-bat concludes
//!
//! # Example
//!
//! ```
//! use umpire_engine::{RunTables, RunnerState};
//!
//! let tables = RunTables::default_tables();
//! let swing = tables
//!     .delta
//!     .delta_for_strike_call(3, 2, 2, RunnerState::LOADED)
//!     .unwrap();
//! assert!(swing > 0.0);
//! ```

pub use self::{run_expectancy::*, runner_tracker::*};

mod run_expectancy;
mod runner_tracker;
