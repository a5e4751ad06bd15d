use std::fmt;

use serde::{Deserialize, Serialize};

/// Ball/strike count and outs.
///
/// The live feed records the count *after* each pitch, so a terminal pitch can
/// show four balls or three strikes. Run-expectancy lookups need the count the
/// pitch was thrown in, which is recovered with [`Count::before_called_strike`]
/// and [`Count::before_called_ball`].
///
/// # Example
///
/// ```
/// use umpire_engine::Count;
///
/// let after = Count::new(1, 2, 0);
/// assert_eq!(after.before_called_strike(), Some(Count::new(1, 1, 0)));
/// assert_eq!(Count::new(0, 0, 1).before_called_strike(), None);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Count {
    #[serde(default)]
    pub balls: u8,
    #[serde(default)]
    pub strikes: u8,
    #[serde(default)]
    pub outs: u8,
}

impl Count {
    /// Number of ball states in a run-expectancy table (0-3).
    pub const BALL_STATES: usize = 4;
    /// Number of strike states in a run-expectancy table (0-2).
    pub const STRIKE_STATES: usize = 3;
    /// Number of out states in a run-expectancy table (0-2).
    pub const OUT_STATES: usize = 3;

    #[must_use]
    pub const fn new(balls: u8, strikes: u8, outs: u8) -> Self {
        Self {
            balls,
            strikes,
            outs,
        }
    }

    /// Returns the count a called strike was thrown in.
    ///
    /// `None` when the recorded count has no strike to take back, which means
    /// the record is inconsistent and must not be priced.
    #[must_use]
    pub const fn before_called_strike(self) -> Option<Self> {
        match self.strikes.checked_sub(1) {
            Some(strikes) => Some(Self { strikes, ..self }),
            None => None,
        }
    }

    /// Returns the count a called ball was thrown in.
    ///
    /// `None` when the recorded count has no ball to take back.
    #[must_use]
    pub const fn before_called_ball(self) -> Option<Self> {
        match self.balls.checked_sub(1) {
            Some(balls) => Some(Self { balls, ..self }),
            None => None,
        }
    }

    /// Returns whether this count can index a run-expectancy table.
    #[must_use]
    pub const fn is_table_index(self) -> bool {
        (self.balls as usize) < Self::BALL_STATES
            && (self.strikes as usize) < Self::STRIKE_STATES
            && (self.outs as usize) < Self::OUT_STATES
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.balls, self.strikes)
    }
}
