use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use umpire_engine::feed::HitData;

use crate::ui::widgets::Row;

#[derive(Debug)]
pub struct HitDisplay<'a> {
    hit: Option<&'a HitData>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> HitDisplay<'a> {
    pub fn new(hit: Option<&'a HitData>) -> Self {
        Self { hit, block: None }
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
        let hit = self.hit;
        vec![
            Row::optional(
                "EXIT VELO",
                hit.and_then(|h| h.launch_speed).map(|v| format!("{v:.1} mph")),
            ),
            Row::optional(
                "ANGLE",
                hit.and_then(|h| h.launch_angle).map(|a| format!("{a:.0}°")),
            ),
            Row::optional(
                "DISTANCE",
                hit.and_then(|h| h.total_distance).map(|d| format!("{d:.0} ft")),
            ),
        ]
    }
}

impl Widget for HitDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}

impl Widget for &HitDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        super::render_rows(&self.rows(), area, buf);
    }
}
