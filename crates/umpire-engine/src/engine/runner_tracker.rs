use crate::{
    Base, RunnerState,
    feed::{AtBat, RunnerMovement},
};

/// Tracks base occupancy while a game is replayed.
///
/// The feed reports runner movements per at-bat, tagged with the play event that
/// caused them. The tracker applies them in event order so that every pitch can be
/// priced against the bases as they stood when it was thrown.
///
/// # Example
///
/// ```
/// use umpire_engine::{RunnerTracker, feed::AtBat};
///
/// let at_bat: AtBat = serde_json::from_value(serde_json::json!({
///     "about": {"inning": 1, "isTopInning": true},
///     "playEvents": [{"index": 0, "isPitch": true, "details": {"code": "X"}}],
///     "runners": [{
///         "movement": {"start": null, "end": "2B", "isOut": false},
///         "details": {"runner": {"id": 7}, "playIndex": 0}
///     }]
/// }))
/// .unwrap();
///
/// let mut tracker = RunnerTracker::new();
/// tracker.place_runners_for_new_at_bat(&at_bat);
/// assert!(tracker.state().is_empty());
/// tracker.advance_on_play_outcome(&at_bat);
/// assert!(tracker.state().on_second());
/// ```
#[derive(Debug, Default, Clone)]
pub struct RunnerTracker {
    state: RunnerState,
    half_inning: Option<(u8, bool)>,
}

/// A runner's net movement over a group of legs.
#[derive(Debug, Clone, Copy)]
struct RunnerPath {
    runner_id: u64,
    start: Option<Base>,
    end: Option<Base>,
    is_out: bool,
}

fn feed_base(code: Option<&str>) -> Option<Base> {
    code.and_then(Base::from_feed_code)
}

impl RunnerTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> RunnerState {
        self.state
    }

    /// Prepares the bases for the first pitch of `at_bat`.
    ///
    /// Occupancy carries over within a half-inning and is cleared when a new
    /// half-inning starts. Every base a runner starts the at-bat from is then
    /// marked, which also places the automatic runner of extra innings. A
    /// runner's origin is the start of their first leg in the at-bat.
    pub fn place_runners_for_new_at_bat(&mut self, at_bat: &AtBat) {
        let half_inning = at_bat.half_inning_key();
        if self.half_inning != Some(half_inning) {
            self.state = RunnerState::EMPTY;
            self.half_inning = Some(half_inning);
        }
        let mut seen = vec![];
        for leg in &at_bat.runners {
            let runner_id = leg.details.runner.id;
            if seen.contains(&runner_id) {
                continue;
            }
            seen.push(runner_id);
            let origin = leg.movement.origin_base.as_deref().or(leg.movement.start.as_deref());
            if let Some(base) = feed_base(origin) {
                self.state = self.state.with(base);
            }
        }
    }

    /// Applies the movements caused by the play event at `event_index`.
    ///
    /// Used for events inside an at-bat (stolen bases, wild pitches, pickoffs).
    pub fn apply_movements_at(&mut self, at_bat: &AtBat, event_index: usize) {
        self.apply(
            at_bat
                .runners
                .iter()
                .filter(|leg| leg.details.play_index == event_index),
        );
    }

    /// Applies the movements of the at-bat's final play event.
    ///
    /// Movements attached to earlier events are expected to have been applied
    /// through [`Self::apply_movements_at`] already.
    pub fn advance_on_play_outcome(&mut self, at_bat: &AtBat) {
        let final_index = at_bat.last_event().map_or(0, |event| event.index);
        self.apply(
            at_bat
                .runners
                .iter()
                .filter(|leg| leg.details.play_index >= final_index),
        );
    }

    fn apply<'a>(&mut self, legs: impl Iterator<Item = &'a RunnerMovement>) {
        let mut paths: Vec<RunnerPath> = vec![];
        for leg in legs {
            let runner_id = leg.details.runner.id;
            let end = feed_base(leg.movement.end.as_deref());
            if let Some(path) = paths.iter_mut().find(|p| p.runner_id == runner_id) {
                path.end = end;
                path.is_out |= leg.movement.is_out;
            } else {
                paths.push(RunnerPath {
                    runner_id,
                    start: feed_base(leg.movement.start.as_deref()),
                    end,
                    is_out: leg.movement.is_out,
                });
            }
        }

        // vacate every origin first so a runner moving into a base another
        // runner just left is not cleared
        for path in &paths {
            if let Some(base) = path.start {
                self.state = self.state.without(base);
            }
        }
        for path in paths.iter().filter(|p| !p.is_out) {
            if let Some(base) = path.end {
                self.state = self.state.with(base);
            }
        }
    }
}
