use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use umpire_engine::{RunExpectancyTable, RunnerState, feed::AtBat};

use crate::ui::widgets::Row;

/// Pitcher against batter, the count, and what the situation is worth.
#[derive(Debug)]
pub struct AtBatDisplay<'a> {
    at_bat: Option<&'a AtBat>,
    runners: RunnerState,
    table: &'a RunExpectancyTable,
    block: Option<BlockWidget<'a>>,
}

impl<'a> AtBatDisplay<'a> {
    pub fn new(
        at_bat: Option<&'a AtBat>,
        runners: RunnerState,
        table: &'a RunExpectancyTable,
    ) -> Self {
        Self {
            at_bat,
            runners,
            table,
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

    fn rows(&self) -> Vec<Row> {
        let Some(at_bat) = self.at_bat else {
            return vec![Row::optional("PITCHER", None), Row::optional("BATTER", None)];
        };
        let count = at_bat.count;
        // Counts that ended the at-bat (ball four, strike three, third out) have
        // no table entry.
        let expected_runs = self
            .table
            .expected_runs_at(count, self.runners)
            .ok()
            .map(|runs| format!("{runs:.3}"));
        vec![
            Row::new("PITCHER", at_bat.matchup.pitcher.full_name.as_str()),
            Row::new("BATTER", at_bat.matchup.batter.full_name.as_str()),
            Row::new(
                "COUNT",
                format!("{}-{}, {} out", count.balls, count.strikes, count.outs),
            ),
            Row::new("RUNNERS", self.runners.describe()),
            Row::optional("EXP RUNS", expected_runs),
        ]
    }
}

impl Widget for AtBatDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}

impl Widget for &AtBatDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        super::render_rows(&self.rows(), area, buf);
    }
}
