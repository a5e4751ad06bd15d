use std::fmt;

use serde::{Deserialize, Serialize};

use crate::InvalidRunnerStateError;

/// One of the three bases a runner can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    First,
    Second,
    Third,
}

impl Base {
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];

    const fn bit(self) -> u8 {
        match self {
            Self::First => 0b001,
            Self::Second => 0b010,
            Self::Third => 0b100,
        }
    }

    /// Parses the feed's base notation (`"1B"`, `"2B"`, `"3B"`).
    ///
    /// Home plate and `"score"` are not bases and return `None`.
    #[must_use]
    pub fn from_feed_code(code: &str) -> Option<Self> {
        match code {
            "1B" => Some(Self::First),
            "2B" => Some(Self::Second),
            "3B" => Some(Self::Third),
            _ => None,
        }
    }
}

/// Base occupancy encoded as a 3-bit integer.
///
/// First base is bit 0, second base bit 1 and third base bit 2, so the encoding
/// doubles as the runner index of a run-expectancy table.
///
/// # Example
///
/// ```
/// use umpire_engine::RunnerState;
///
/// let corners = RunnerState::new(true, false, true);
/// assert_eq!(corners.as_int(), 5);
/// assert_eq!(RunnerState::try_from(5).unwrap(), corners);
/// assert_eq!(corners.to_string(), "runners on first and third");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct RunnerState(u8);

impl RunnerState {
    /// Number of distinct runner states.
    pub const LEN: usize = 8;
    pub const EMPTY: Self = Self(0);
    pub const LOADED: Self = Self(0b111);

    #[must_use]
    pub const fn new(first: bool, second: bool, third: bool) -> Self {
        Self((first as u8) | ((second as u8) << 1) | ((third as u8) << 2))
    }

    #[must_use]
    pub const fn as_int(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn is_occupied(self, base: Base) -> bool {
        self.0 & base.bit() != 0
    }

    #[must_use]
    pub const fn on_first(self) -> bool {
        self.is_occupied(Base::First)
    }

    #[must_use]
    pub const fn on_second(self) -> bool {
        self.is_occupied(Base::Second)
    }

    #[must_use]
    pub const fn on_third(self) -> bool {
        self.is_occupied(Base::Third)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn with(self, base: Base) -> Self {
        Self(self.0 | base.bit())
    }

    #[must_use]
    pub const fn without(self, base: Base) -> Self {
        Self(self.0 & !base.bit())
    }

    /// Returns the occupancy and runs scored after a base on balls.
    ///
    /// Only forced runners move: the batter takes first, and each runner
    /// advances one base if every base behind them is occupied.
    #[must_use]
    pub const fn after_walk(self) -> (Self, u8) {
        let first = self.on_first();
        let second = self.on_second();
        let third = self.on_third();
        let next = Self::new(true, second || first, third || (first && second));
        let runs = (first && second && third) as u8;
        (next, runs)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).map(RunnerState)
    }

    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self.0 {
            0b000 => "bases empty",
            0b001 => "runner on first",
            0b010 => "runner on second",
            0b011 => "runners on first and second",
            0b100 => "runner on third",
            0b101 => "runners on first and third",
            0b110 => "runners on second and third",
            _ => "bases loaded",
        }
    }
}

impl TryFrom<u8> for RunnerState {
    type Error = InvalidRunnerStateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if usize::from(value) < Self::LEN {
            Ok(Self(value))
        } else {
            Err(InvalidRunnerStateError { value })
        }
    }
}

impl From<RunnerState> for u8 {
    fn from(state: RunnerState) -> Self {
        state.0
    }
}

impl fmt::Display for RunnerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_roundtrip_corners() {
        let state = RunnerState::new(true, false, true);
        assert_eq!(state.as_int(), 5);

        let decoded = RunnerState::try_from(5).unwrap();
        assert_eq!(
            (decoded.on_first(), decoded.on_second(), decoded.on_third()),
            (true, false, true)
        );
    }

    #[test]
    fn test_every_encoding_decodes_to_itself() {
        for value in 0..8 {
            let state = RunnerState::try_from(value).unwrap();
            let rebuilt = RunnerState::new(state.on_first(), state.on_second(), state.on_third());
            assert_eq!(rebuilt.as_int(), value);
        }
    }

    #[test]
    fn test_out_of_range_integer_is_rejected() {
        let err = RunnerState::try_from(8).unwrap_err();
        assert_eq!(err, InvalidRunnerStateError { value: 8 });
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_with_and_without() {
        let state = RunnerState::EMPTY.with(Base::Second).with(Base::Third);
        assert_eq!(state.as_int(), 6);
        assert_eq!(state.without(Base::Third).as_int(), 2);
        assert_eq!(state.without(Base::First), state);
    }

    #[test]
    fn test_walk_forces_only_trailing_runners() {
        assert_eq!(RunnerState::EMPTY.after_walk(), (RunnerState::new(true, false, false), 0));
        assert_eq!(
            RunnerState::new(false, true, false).after_walk(),
            (RunnerState::new(true, true, false), 0)
        );
        assert_eq!(
            RunnerState::new(true, false, true).after_walk(),
            (RunnerState::LOADED, 0)
        );
        assert_eq!(RunnerState::LOADED.after_walk(), (RunnerState::LOADED, 1));
    }

    #[test]
    fn test_describe_covers_every_state() {
        let descriptions: Vec<_> = RunnerState::all().map(RunnerState::describe).collect();
        assert_eq!(descriptions[0], "bases empty");
        assert_eq!(descriptions[3], "runners on first and second");
        assert_eq!(descriptions[7], "bases loaded");
        let unique: std::collections::HashSet<_> = descriptions.iter().collect();
        assert_eq!(unique.len(), RunnerState::LEN);
    }

    #[test]
    fn test_serde_uses_integer_encoding() {
        let json = serde_json::to_string(&RunnerState::new(true, true, false)).unwrap();
        assert_eq!(json, "3");
        assert!(serde_json::from_str::<RunnerState>("9").is_err());
    }
}
