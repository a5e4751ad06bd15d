use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use umpire_scoreboard::{ScoreboardDiff, ScoreboardSnapshot};

use crate::ui::widgets::{Row, style};

/// Score, inning, outs, runners and umpire favor, with fields that changed in the
/// latest refresh highlighted.
#[derive(Debug)]
pub struct ScoreboardDisplay<'a> {
    snapshot: &'a ScoreboardSnapshot,
    changes: &'a ScoreboardDiff,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ScoreboardDisplay<'a> {
    pub fn new(snapshot: &'a ScoreboardSnapshot, changes: &'a ScoreboardDiff) -> Self {
        Self {
            snapshot,
            changes,
            block: None,
        }
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

    fn highlight(&self, row: Row, fields: &[&str]) -> Row {
        if fields.iter().any(|field| self.changes.contains(field)) {
            row.styled(style::CHANGED)
        } else {
            row
        }
    }

    fn rows(&self) -> Vec<Row> {
        let s = self.snapshot;
        let half = match s.inning_state.as_str() {
            "T" => "Top",
            "B" => "Bot",
            other => other,
        };
        let outs_noun = if s.outs == 1 { "out" } else { "outs" };
        vec![
            self.highlight(
                Row::new("AWAY", format!("{} {}", s.away_abv, s.away_score)),
                &["away_abv", "away_score"],
            ),
            self.highlight(
                Row::new("HOME", format!("{} {}", s.home_abv, s.home_score)),
                &["home_abv", "home_score"],
            ),
            self.highlight(
                Row::new("INNING", format!("{half} {}", s.inning)),
                &["inning", "inning_state"],
            ),
            self.highlight(Row::new("OUTS", format!("{} {outs_noun}", s.outs)), &["outs"]),
            self.highlight(
                Row::new("RUNNERS", s.runner_state().describe()),
                &["runners"],
            ),
            self.highlight(
                Row::new("UMPIRE", s.umpire.as_str()).styled(style::FAVOR),
                &["umpire"],
            ),
            self.highlight(
                Row::new("STATUS", s.detailed_state.as_str()).styled(style::STATUS),
                &["detailed_state", "game_state"],
            ),
        ]
    }
}

impl Widget for ScoreboardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}

impl Widget for &ScoreboardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        super::render_rows(&self.rows(), area, buf);
    }
}

#[cfg(test)]
mod tests {
    use umpire_scoreboard::diff;

    use super::*;

    fn snapshot() -> ScoreboardSnapshot {
        ScoreboardSnapshot {
            detailed_state: "In Progress".to_owned(),
            away_abv: "BOS".to_owned(),
            home_abv: "NYY".to_owned(),
            away_score: 3,
            home_score: 4,
            inning: 5,
            inning_state: "B".to_owned(),
            outs: 1,
            runners: 5,
            umpire: "+0.52 NYY (4)".to_owned(),
            ..ScoreboardSnapshot::default()
        }
    }

    #[test]
    fn test_rows_show_scoreboard_fields() {
        let snapshot = snapshot();
        let changes = ScoreboardDiff::default();
        let rows = ScoreboardDisplay::new(&snapshot, &changes).rows();
        let values: Vec<_> = rows.iter().map(|row| row.value.as_str()).collect();
        assert_eq!(
            values,
            [
                "BOS 3",
                "NYY 4",
                "Bot 5",
                "1 out",
                "runners on first and third",
                "+0.52 NYY (4)",
                "In Progress"
            ]
        );
        assert!(rows.iter().all(|row| row.style != style::CHANGED));
    }

    #[test]
    fn test_changed_fields_are_highlighted() {
        let old = snapshot();
        let new = ScoreboardSnapshot {
            outs: 2,
            home_score: 5,
            ..snapshot()
        };
        let changes = diff(&old, &new);
        let rows = ScoreboardDisplay::new(&new, &changes).rows();
        let changed: Vec<_> = rows
            .iter()
            .filter(|row| row.style == style::CHANGED)
            .map(|row| row.label)
            .collect();
        assert_eq!(changed, ["HOME", "OUTS"]);
    }
}
