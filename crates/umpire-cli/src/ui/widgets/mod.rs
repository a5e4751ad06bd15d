use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block as BlockWidget, Widget},
};

pub use self::{
    at_bat_display::*, hit_display::*, pitch_display::*, scoreboard_display::*,
};

mod at_bat_display;
mod hit_display;
mod pitch_display;
mod scoreboard_display;

mod color {
    use ratatui::style::Color;

    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const LABEL: Style = fg_bg(color::GRAY, color::BLACK);
    pub const MISSING: Style = fg_bg(color::GRAY, color::BLACK);
    /// Values that changed in the latest refresh.
    pub const CHANGED: Style = fg_bg(color::YELLOW, color::BLACK).add_modifier(Modifier::BOLD);
    pub const FAVOR: Style = fg_bg(color::CYAN, color::BLACK);
    pub const STATUS: Style = fg_bg(color::GREEN, color::BLACK);
    pub const ERROR: Style = fg_bg(color::RED, color::BLACK);
}

/// A `LABEL: value` line.
#[derive(Debug, Clone)]
struct Row {
    label: &'static str,
    value: String,
    style: Style,
}

impl Row {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            style: style::DEFAULT,
        }
    }

    fn styled(self, style: Style) -> Self {
        Self { style, ..self }
    }

    /// Shows `value`, or a dash in the missing style when there is none.
    fn optional(label: &'static str, value: Option<String>) -> Self {
        match value {
            Some(value) => Self::new(label, value),
            None => Self::new(label, "-").styled(style::MISSING),
        }
    }
}

/// Renders rows top to bottom, labels left-aligned and values right-aligned.
fn render_rows(rows: &[Row], area: Rect, buf: &mut Buffer) {
    let rows_areas = Layout::vertical(rows.iter().map(|_| Constraint::Length(1))).split(area);
    for (row, area) in iter::zip(rows, rows_areas.iter().copied()) {
        let [label_area, value_area] =
            area.layout(&Layout::horizontal([Constraint::Length(10), Constraint::Fill(1)]));
        Line::styled(row.label, style::LABEL)
            .left_aligned()
            .render(label_area, buf);
        Line::styled(row.value.as_str(), row.style)
            .right_aligned()
            .render(value_area, buf);
    }
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn rows_height(rows: usize, block: Option<&BlockWidget>) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX) + block_vertical_margin(block)
}
