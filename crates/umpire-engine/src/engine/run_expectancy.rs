use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::{Count, RunnerState, TableLoadError, TableLookupError};

/// Values indexed by `[balls][strikes][outs][runners]`.
pub type StateGrid = [[[[f64; RunnerState::LEN]; Count::OUT_STATES]; Count::STRIKE_STATES];
    Count::BALL_STATES];

const DEFAULT_TABLE_JSON: &str = include_str!("../../data/run_expectancy.json");

fn lookup(
    grid: &StateGrid,
    balls: u8,
    strikes: u8,
    outs: u8,
    runners: RunnerState,
) -> Result<f64, TableLookupError> {
    let error = TableLookupError {
        balls,
        strikes,
        outs,
        runners: runners.as_int(),
    };
    grid.get(usize::from(balls))
        .and_then(|by_strikes| by_strikes.get(usize::from(strikes)))
        .and_then(|by_outs| by_outs.get(usize::from(outs)))
        .and_then(|by_runners| by_runners.get(runners.as_index()))
        .copied()
        .ok_or(error)
}

fn for_each_state(mut f: impl FnMut(usize, usize, usize, usize)) {
    for balls in 0..Count::BALL_STATES {
        for strikes in 0..Count::STRIKE_STATES {
            for outs in 0..Count::OUT_STATES {
                for runners in 0..RunnerState::LEN {
                    f(balls, strikes, outs, runners);
                }
            }
        }
    }
}

/// Expected runs scored from a game state to the end of the half-inning.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RunExpectancyTable {
    values: StateGrid,
}

impl RunExpectancyTable {
    /// Builds a table, rejecting negative or non-finite entries.
    pub fn new(values: StateGrid) -> Result<Self, TableLoadError> {
        let mut result = Ok(());
        for_each_state(|balls, strikes, outs, runners| {
            let value = values[balls][strikes][outs][runners];
            if result.is_err() {
                return;
            }
            if !value.is_finite() {
                result = Err(TableLoadError::NonFinite);
            } else if value < 0.0 {
                result = Err(TableLoadError::NegativeExpectedRuns {
                    balls,
                    strikes,
                    outs,
                    runners,
                    value,
                });
            }
        });
        result.map(|()| Self { values })
    }

    pub fn expected_runs(
        &self,
        balls: u8,
        strikes: u8,
        outs: u8,
        runners: RunnerState,
    ) -> Result<f64, TableLookupError> {
        lookup(&self.values, balls, strikes, outs, runners)
    }

    pub fn expected_runs_at(&self, count: Count, runners: RunnerState) -> Result<f64, TableLookupError> {
        self.expected_runs(count.balls, count.strikes, count.outs, runners)
    }

    /// Expected runs after a ball at `(balls, strikes, outs, runners)`.
    ///
    /// A fourth ball is a walk: forced runners advance and a forced-in run is
    /// added to the expectancy of the new state with a fresh count.
    fn after_ball(&self, balls: usize, strikes: usize, outs: usize, runners: RunnerState) -> f64 {
        if balls + 1 < Count::BALL_STATES {
            self.values[balls + 1][strikes][outs][runners.as_index()]
        } else {
            let (next, runs) = runners.after_walk();
            f64::from(runs) + self.values[0][0][outs][next.as_index()]
        }
    }

    /// Expected runs after a strike at `(balls, strikes, outs, runners)`.
    ///
    /// A third strike records an out with a fresh count; the third out ends the
    /// half-inning with nothing more to score.
    fn after_strike(&self, balls: usize, strikes: usize, outs: usize, runners: RunnerState) -> f64 {
        if strikes + 1 < Count::STRIKE_STATES {
            self.values[balls][strikes + 1][outs][runners.as_index()]
        } else if outs + 1 < Count::OUT_STATES {
            self.values[0][0][outs + 1][runners.as_index()]
        } else {
            0.0
        }
    }
}

/// Run swing between a ball and a strike for each pre-pitch state.
///
/// Each entry is `RE(after ball) - RE(after strike)`: the runs a wrong call moves
/// from the offense to the defense (or back).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DeltaTable {
    values: StateGrid,
}

impl DeltaTable {
    pub fn new(values: StateGrid) -> Result<Self, TableLoadError> {
        let mut finite = true;
        for_each_state(|b, s, o, r| finite &= values[b][s][o][r].is_finite());
        if finite {
            Ok(Self { values })
        } else {
            Err(TableLoadError::NonFinite)
        }
    }

    /// Derives the swing of every state from a run-expectancy table.
    #[must_use]
    pub fn derive(table: &RunExpectancyTable) -> Self {
        let mut values = [[[[0.0; RunnerState::LEN]; Count::OUT_STATES]; Count::STRIKE_STATES];
            Count::BALL_STATES];
        for_each_state(|balls, strikes, outs, runners| {
            // runner indices come from 0..RunnerState::LEN
            let state = RunnerState::new(runners & 1 != 0, runners & 2 != 0, runners & 4 != 0);
            values[balls][strikes][outs][runners] = table.after_ball(balls, strikes, outs, state)
                - table.after_strike(balls, strikes, outs, state);
        });
        Self { values }
    }

    /// Swing priced for a ball that was wrongly called a strike.
    ///
    /// Takes the count the pitch was thrown in, not the count recorded after it.
    pub fn delta_for_strike_call(
        &self,
        balls: u8,
        strikes: u8,
        outs: u8,
        runners: RunnerState,
    ) -> Result<f64, TableLookupError> {
        lookup(&self.values, balls, strikes, outs, runners)
    }

    /// Swing priced for a strike that was wrongly called a ball.
    ///
    /// Takes the count the pitch was thrown in, not the count recorded after it.
    pub fn delta_for_ball_call(
        &self,
        balls: u8,
        strikes: u8,
        outs: u8,
        runners: RunnerState,
    ) -> Result<f64, TableLookupError> {
        lookup(&self.values, balls, strikes, outs, runners)
    }
}

#[derive(Debug, Deserialize)]
struct TableFile {
    run_expectancy: StateGrid,
    #[serde(default)]
    delta: Option<StateGrid>,
}

/// A run-expectancy table and the delta table priced from it.
#[derive(Debug, Clone, PartialEq)]
pub struct RunTables {
    pub expectancy: RunExpectancyTable,
    pub delta: DeltaTable,
}

impl RunTables {
    /// Builds the tables, deriving the delta table from the expectancy table.
    #[must_use]
    pub fn from_expectancy(expectancy: RunExpectancyTable) -> Self {
        let delta = DeltaTable::derive(&expectancy);
        Self { expectancy, delta }
    }

    /// Parses `{"run_expectancy": [...], "delta": [...]}`; `delta` is optional.
    pub fn from_json(json: &str) -> Result<Self, TableLoadError> {
        let file: TableFile = serde_json::from_str(json).map_err(TableLoadError::Parse)?;
        let expectancy = RunExpectancyTable::new(file.run_expectancy)?;
        match file.delta {
            Some(delta) => Ok(Self {
                expectancy,
                delta: DeltaTable::new(delta)?,
            }),
            None => Ok(Self::from_expectancy(expectancy)),
        }
    }

    /// Tables shipped with the crate, parsed on first use.
    pub fn default_tables() -> &'static Self {
        static TABLES: OnceLock<RunTables> = OnceLock::new();
        TABLES.get_or_init(|| {
            Self::from_json(DEFAULT_TABLE_JSON).expect("embedded run expectancy table should be valid")
        })
    }
}
