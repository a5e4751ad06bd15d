use serde::{Deserialize, Serialize};

use super::{Count, PitchLocation, StrikeZone};

/// The umpire's decision on a pitch, as far as call analysis is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(rename_all = "kebab-case")]
pub enum PitchCall {
    CalledStrike,
    CalledBall,
    /// Swings, fouls, balls in play, hit batters, automatic balls and strikes.
    NotACall,
}

impl PitchCall {
    /// Maps the feed's pitch result code (`"C"` called strike, `"B"` ball).
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "C" => Self::CalledStrike,
            "B" => Self::CalledBall,
            _ => Self::NotACall,
        }
    }

    #[must_use]
    pub fn describe_miss(self) -> &'static str {
        match self {
            Self::CalledStrike => "ball called strike",
            Self::CalledBall => "strike called ball",
            Self::NotACall => "no call",
        }
    }
}

/// Returns whether a feed zone number lies inside the strike zone.
///
/// Zones 1-9 tile the strike zone; 11-14 are the four quadrants outside it.
#[must_use]
pub fn is_zone_number_in_zone(zone: u8) -> bool {
    (1..=9).contains(&zone)
}

/// One pitch as seen by a call evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchRecord {
    pub call: PitchCall,
    /// Count recorded after the pitch.
    pub count: Count,
    /// Feed zone classification (1-9 inside, 11-14 outside).
    pub zone: Option<u8>,
    pub location: Option<PitchLocation>,
    pub strike_zone: Option<StrikeZone>,
}

impl PitchRecord {
    #[must_use]
    pub fn is_decision(&self) -> bool {
        !self.call.is_not_a_call()
    }

    /// Returns the measured location and zone bounds when both are usable.
    ///
    /// Pitches without tracking data, or with degenerate bounds, yield `None`
    /// and are treated as if no decision was made.
    #[must_use]
    pub fn tracked_location(&self) -> Option<(PitchLocation, StrikeZone)> {
        let location = self.location.filter(|l| l.is_finite())?;
        let strike_zone = self.strike_zone.filter(StrikeZone::is_valid)?;
        Some((location, strike_zone))
    }

    /// Returns the count the pitch was thrown in, if the record allows it.
    #[must_use]
    pub fn count_before(&self) -> Option<Count> {
        match self.call {
            PitchCall::CalledStrike => self.count.before_called_strike(),
            PitchCall::CalledBall => self.count.before_called_ball(),
            PitchCall::NotACall => None,
        }
    }
}
