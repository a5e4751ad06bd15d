//! Live scoreboard state and change detection.
//!
//! - [`ScoreboardSnapshot`] - The fixed set of fields a scoreboard shows for one game
//! - [`ScoreboardDiff`] - The fields that changed between two snapshots
//!
//! A live display keeps the last snapshot it rendered as a baseline. On every
//! poll it builds a fresh snapshot, diffs it against the baseline and, if
//! anything changed, renders the diff and keeps the fresh snapshot as the new
//! baseline. [`diff`] itself is pure; keeping the baseline is the caller's job.
//!
//! # Example
//!
//! ```
//! use umpire_scoreboard::{ScoreboardSnapshot, diff};
//!
//! let old = ScoreboardSnapshot { outs: 1, ..ScoreboardSnapshot::default() };
//! let new = ScoreboardSnapshot { outs: 2, ..old.clone() };
//!
//! let changes = diff(&old, &new);
//! assert!(changes.is_changed());
//! assert_eq!(changes.to_map()["outs"], 2);
//! assert!(!diff(&new, &new).is_changed());
//! ```

pub use self::{diff::*, snapshot::*};

mod diff;
mod snapshot;
