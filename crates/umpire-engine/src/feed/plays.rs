use serde::{Deserialize, Serialize};

use super::Person;
use crate::{Count, PitchCall, PitchLocation, PitchRecord, StrikeZone};

/// One plate appearance (`liveData.plays.allPlays[i]`).
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtBat {
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub matchup: Matchup,
    #[serde(default)]
    pub result: AtBatResult,
    #[serde(default)]
    pub count: Count,
    #[serde(default)]
    pub runners: Vec<RunnerMovement>,
    #[serde(default)]
    pub play_events: Vec<PlayEvent>,
}

impl AtBat {
    /// Play events that are pitches, in the order they were thrown.
    pub fn pitches(&self) -> impl Iterator<Item = &PlayEvent> + '_ {
        self.play_events.iter().filter(|event| event.is_pitch)
    }

    #[must_use]
    pub fn last_event(&self) -> Option<&PlayEvent> {
        self.play_events.last()
    }

    /// Identifies the half-inning this at-bat belongs to.
    #[must_use]
    pub fn half_inning_key(&self) -> (u8, bool) {
        (self.about.inning, self.about.is_top_inning)
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    #[serde(default)]
    pub at_bat_index: usize,
    /// `top` or `bottom`.
    #[serde(default)]
    pub half_inning: String,
    #[serde(default)]
    pub is_top_inning: bool,
    #[serde(default)]
    pub inning: u8,
    #[serde(default)]
    pub is_complete: bool,
}

impl About {
    /// `Top` or `Bottom`, capitalized for display.
    #[must_use]
    pub fn half_inning_label(&self) -> &'static str {
        if self.is_top_inning { "Top" } else { "Bottom" }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Matchup {
    #[serde(default)]
    pub batter: Person,
    #[serde(default)]
    pub pitcher: Person,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtBatResult {
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub away_score: u32,
    #[serde(default)]
    pub home_score: u32,
}

/// One leg of a runner's movement during an at-bat.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RunnerMovement {
    #[serde(default)]
    pub movement: Movement,
    #[serde(default)]
    pub details: MovementDetails,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    /// Base the runner occupied when the at-bat began (`None` for the batter).
    #[serde(default)]
    pub origin_base: Option<String>,
    /// Base at the start of this leg (`None` for the batter).
    #[serde(default)]
    pub start: Option<String>,
    /// Base at the end of this leg; `"score"` for a run, `None` when put out.
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub is_out: bool,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementDetails {
    #[serde(default)]
    pub runner: Person,
    /// Index into the at-bat's play events of the event that caused this leg.
    #[serde(default)]
    pub play_index: usize,
    #[serde(default)]
    pub event: String,
}

/// A pitch, pickoff, substitution or other action within an at-bat.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayEvent {
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub is_pitch: bool,
    #[serde(default)]
    pub details: EventDetails,
    #[serde(default)]
    pub count: Count,
    #[serde(default)]
    pub pitch_data: Option<PitchData>,
    #[serde(default)]
    pub hit_data: Option<HitData>,
}

impl PlayEvent {
    /// Extracts what a call evaluator needs from a pitch event.
    ///
    /// Returns `None` for events that are not pitches. Missing tracking data is
    /// carried as `None` fields rather than rejected here.
    #[must_use]
    pub fn pitch_record(&self) -> Option<PitchRecord> {
        if !self.is_pitch {
            return None;
        }
        let pitch_data = self.pitch_data.as_ref();
        let zone = pitch_data.and_then(|p| p.zone).or(self.details.zone);
        Some(PitchRecord {
            call: PitchCall::from_code(&self.details.code),
            count: self.count,
            zone,
            location: pitch_data.and_then(PitchData::location),
            strike_zone: pitch_data.and_then(PitchData::strike_zone),
        })
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    /// Pitch result code: `C` called strike, `B` ball, `S` swinging strike, ...
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub zone: Option<u8>,
    #[serde(default, rename = "type")]
    pub pitch_type: Option<PitchType>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PitchType {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchData {
    #[serde(default)]
    pub start_speed: Option<f64>,
    #[serde(default)]
    pub strike_zone_top: Option<f64>,
    #[serde(default)]
    pub strike_zone_bottom: Option<f64>,
    #[serde(default)]
    pub zone: Option<u8>,
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub breaks: Option<Breaks>,
}

impl PitchData {
    #[must_use]
    pub fn location(&self) -> Option<PitchLocation> {
        Some(PitchLocation::new(self.coordinates.p_x?, self.coordinates.p_z?))
    }

    /// Zone bounds for this pitch.
    ///
    /// Explicit bounds in the coordinates take precedence; otherwise the zone
    /// is built from the batter's strike zone top and bottom.
    #[must_use]
    pub fn strike_zone(&self) -> Option<StrikeZone> {
        let c = &self.coordinates;
        if let (Some(left), Some(right), Some(top), Some(bottom)) =
            (c.px_min, c.px_max, c.pz_top, c.pz_bot)
        {
            return Some(StrikeZone::new(left, right, top, bottom));
        }
        Some(StrikeZone::from_batter_bounds(
            self.strike_zone_top?,
            self.strike_zone_bottom?,
        ))
    }

    #[must_use]
    pub fn spin_rate(&self) -> Option<f64> {
        self.breaks.as_ref().and_then(|b| b.spin_rate)
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default, rename = "pX")]
    pub p_x: Option<f64>,
    #[serde(default, rename = "pZ")]
    pub p_z: Option<f64>,
    #[serde(default, rename = "pZ_top")]
    pub pz_top: Option<f64>,
    #[serde(default, rename = "pZ_bot")]
    pub pz_bot: Option<f64>,
    #[serde(default, rename = "PX_MIN")]
    pub px_min: Option<f64>,
    #[serde(default, rename = "PX_MAX")]
    pub px_max: Option<f64>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breaks {
    #[serde(default)]
    pub spin_rate: Option<f64>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitData {
    #[serde(default)]
    pub launch_speed: Option<f64>,
    #[serde(default)]
    pub launch_angle: Option<f64>,
    #[serde(default)]
    pub total_distance: Option<f64>,
}
