use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use umpire_engine::feed::PlayEvent;

use crate::ui::widgets::Row;

/// The most recent pitch: outcome, velocity and type, spin, zone.
#[derive(Debug)]
pub struct PitchDisplay<'a> {
    pitch: Option<&'a PlayEvent>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PitchDisplay<'a> {
    pub fn new(pitch: Option<&'a PlayEvent>) -> Self {
        Self { pitch, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn height(&self) -> u16 {
        super::rows_height(self.rows().len(), self.block.as_ref())
    }

    fn rows(&self) -> Vec<Row> {
        let pitch = self.pitch;
        let details = pitch.map(|p| &p.details);
        let pitch_data = pitch.and_then(|p| p.pitch_data.as_ref());

        let speed = pitch_data.and_then(|d| d.start_speed);
        let kind = details
            .and_then(|d| d.pitch_type.as_ref())
            .map(|t| t.description.as_str());
        let pitch_kind = match (speed, kind) {
            (Some(speed), Some(kind)) => Some(format!("{speed:.1} mph {kind}")),
            (Some(speed), None) => Some(format!("{speed:.1} mph")),
            (None, Some(kind)) => Some(kind.to_owned()),
            (None, None) => None,
        };
        let zone = pitch_data
            .and_then(|d| d.zone)
            .or_else(|| details.and_then(|d| d.zone));

        vec![
            Row::optional("RESULT", details.map(|d| d.description.clone())),
            Row::optional("PITCH", pitch_kind),
            Row::optional(
                "SPIN",
                pitch_data
                    .and_then(|d| d.spin_rate())
                    .map(|rpm| format!("{rpm:.0} rpm")),
            ),
            Row::optional("ZONE", zone.map(|zone| zone.to_string())),
        ]
    }
}

impl Widget for PitchDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}

impl Widget for &PitchDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        super::render_rows(&self.rows(), area, buf);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_pitch_rows() {
        let pitch: PlayEvent = serde_json::from_value(json!({
            "index": 2,
            "isPitch": true,
            "details": {
                "code": "C",
                "description": "Called Strike",
                "type": {"code": "FF", "description": "Four-Seam Fastball"}
            },
            "count": {"balls": 1, "strikes": 1, "outs": 0},
            "pitchData": {
                "startSpeed": 95.14,
                "zone": 3,
                "coordinates": {"pX": 0.5, "pZ": 3.1},
                "breaks": {"spinRate": 2301.0}
            }
        }))
        .unwrap();
        let values: Vec<_> = PitchDisplay::new(Some(&pitch))
            .rows()
            .into_iter()
            .map(|row| row.value)
            .collect();
        assert_eq!(
            values,
            [
                "Called Strike",
                "95.1 mph Four-Seam Fastball",
                "2301 rpm",
                "3"
            ]
        );
    }

    #[test]
    fn test_no_pitch_yet() {
        let rows = PitchDisplay::new(None).rows();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.value == "-"));
    }
}
