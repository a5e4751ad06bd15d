use serde::{Deserialize, Serialize};

/// Radius of a baseball, in feet.
pub const BALL_RADIUS_FEET: f64 = 1.45 / 12.0;

/// Half the width of home plate, in feet.
pub const PLATE_HALF_WIDTH_FEET: f64 = 8.5 / 12.0;

/// Horizontal bound of the zone for the ball's center: any part of the ball
/// touching the plate's edge counts.
pub const ZONE_HALF_WIDTH_FEET: f64 = PLATE_HALF_WIDTH_FEET + BALL_RADIUS_FEET;

/// Pitch location as it crosses the front of home plate, in feet.
///
/// `x` is horizontal distance from the middle of the plate (catcher's view),
/// `z` is height above the ground.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchLocation {
    pub x: f64,
    pub z: f64,
}

impl PitchLocation {
    #[must_use]
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dz: f64) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.z.is_finite()
    }
}

/// Rectangular strike zone bounds for the ball's center, in feet.
///
/// Horizontal bounds are fixed by the plate; vertical bounds depend on the batter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeZone {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl StrikeZone {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Builds the zone from the batter's strike zone top and bottom.
    ///
    /// The batter bounds describe the rule-book zone; they are widened by the
    /// ball radius so that a pitch clipping the edge counts as a strike.
    #[must_use]
    pub fn from_batter_bounds(zone_top: f64, zone_bottom: f64) -> Self {
        Self {
            left: -ZONE_HALF_WIDTH_FEET,
            right: ZONE_HALF_WIDTH_FEET,
            top: zone_top + BALL_RADIUS_FEET,
            bottom: zone_bottom - BALL_RADIUS_FEET,
        }
    }

    /// Returns whether the bounds describe a non-empty finite rectangle.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.left, self.right, self.top, self.bottom]
            .iter()
            .all(|v| v.is_finite())
            && self.left < self.right
            && self.bottom < self.top
    }

    /// Returns whether the location lies inside the zone (edges inclusive).
    #[must_use]
    pub fn contains(&self, location: PitchLocation) -> bool {
        (self.left..=self.right).contains(&location.x)
            && (self.bottom..=self.top).contains(&location.z)
    }

    #[must_use]
    pub fn center(&self) -> PitchLocation {
        PitchLocation::new(
            f64::midpoint(self.left, self.right),
            f64::midpoint(self.bottom, self.top),
        )
    }
}
