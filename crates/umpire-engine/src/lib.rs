//! Baseball game mechanics for umpire call analysis.
//!
//! - [`core`] - Plain value types: counts, base occupancy, strike zones, pitch records
//! - [`engine`] - Game-walking state: the runner tracker and run-expectancy tables
//! - [`feed`] - Serde schema of the live game feed consumed by the evaluators

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
pub mod feed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("runner state {value} is out of range (expected 0..=7)")]
pub struct InvalidRunnerStateError {
    pub value: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display(
    "run expectancy lookup out of range: balls={balls}, strikes={strikes}, outs={outs}, runners={runners}"
)]
pub struct TableLookupError {
    pub balls: u8,
    pub strikes: u8,
    pub outs: u8,
    pub runners: u8,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TableLoadError {
    #[display("failed to parse run expectancy table")]
    Parse(serde_json::Error),
    #[display(
        "negative expected runs {value} at balls={balls}, strikes={strikes}, outs={outs}, runners={runners}"
    )]
    NegativeExpectedRuns {
        balls: usize,
        strikes: usize,
        outs: usize,
        runners: usize,
        value: f64,
    },
    #[display("non-finite value in run expectancy table")]
    NonFinite,
}
