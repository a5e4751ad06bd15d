//! Plain value types describing a single pitch and the game state around it.
//!
//! - [`Count`] - Balls, strikes and outs, with the pre-pitch guards used for pricing
//! - [`RunnerState`] - Base occupancy as a 3-bit integer
//! - [`StrikeZone`] / [`PitchLocation`] - Zone bounds and pitch coordinates, in feet
//! - [`PitchRecord`] - What the evaluators see of one pitch

pub use self::{count::*, pitch::*, runner_state::*, strike_zone::*};

mod count;
mod pitch;
mod runner_state;
mod strike_zone;
