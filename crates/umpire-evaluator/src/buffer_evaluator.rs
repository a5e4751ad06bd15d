//! Buffer strategy: forgive calls on pitches that graze a zone edge.

use umpire_engine::{PitchLocation, PitchRecord, StrikeZone};

use crate::{call_evaluator::CallEvaluator, zone_evaluator::ZoneEvaluator};

/// Width of the grace band on each side of a zone edge, in feet (0.35 inch).
pub const BUFFER_FEET: f64 = 0.35 / 12.0;

/// Judges calls by zone number, except near the zone edges.
///
/// A band of [`BUFFER_FEET`] runs along both sides of each of the four edges.
/// Any call on a pitch inside the band stands; elsewhere the zone number decides,
/// as in [`ZoneEvaluator`]. Pitches without tracking data are never misses.
#[derive(Debug, Clone, Copy)]
pub struct BufferEvaluator {
    buffer: f64,
}

impl Default for BufferEvaluator {
    fn default() -> Self {
        Self {
            buffer: BUFFER_FEET,
        }
    }
}

impl BufferEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_buffer(buffer: f64) -> Self {
        Self { buffer }
    }

    /// Returns whether `location` lies in the grace band around `zone`'s edges.
    ///
    /// The band is the union of four rectangles, one per edge, each spanning the
    /// full edge plus the band width at both ends.
    #[must_use]
    pub fn in_buffer(&self, location: PitchLocation, zone: &StrikeZone) -> bool {
        let b = self.buffer;
        let PitchLocation { x, z } = location;
        let along_vertical_edge = (zone.bottom - b..=zone.top + b).contains(&z);
        let along_horizontal_edge = (zone.left - b..=zone.right + b).contains(&x);

        let left = along_vertical_edge && (zone.left - b..=zone.left + b).contains(&x);
        let right = along_vertical_edge && (zone.right - b..=zone.right + b).contains(&x);
        let top = along_horizontal_edge && (zone.top - b..=zone.top + b).contains(&z);
        let bottom = along_horizontal_edge && (zone.bottom - b..=zone.bottom + b).contains(&z);
        left || right || top || bottom
    }
}

impl CallEvaluator for BufferEvaluator {
    fn is_missed_call(&mut self, pitch: &PitchRecord) -> bool {
        let Some((location, zone)) = pitch.tracked_location() else {
            return false;
        };
        !self.in_buffer(location, &zone) && ZoneEvaluator::is_missed(pitch)
    }
}
