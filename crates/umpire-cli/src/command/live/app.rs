use chrono::{DateTime, Local};
use crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use umpire_engine::feed::Game;
use umpire_scoreboard::{ScoreboardDiff, ScoreboardSnapshot, diff};

use crate::{
    client::GameSource,
    command::Evaluation,
    tui::{App, Tui},
    ui::widgets::{AtBatDisplay, HitDisplay, PitchDisplay, ScoreboardDisplay, style},
};

/// The latest successfully evaluated state of the game.
#[derive(Debug)]
struct LiveView {
    game: Game,
    snapshot: ScoreboardSnapshot,
    updated_at: DateTime<Local>,
}

/// Live scoreboard: refetches and re-evaluates the game on every tick.
#[derive(Debug)]
pub struct LiveApp {
    source: GameSource,
    evaluation: Evaluation,
    view: Option<LiveView>,
    /// Fields that changed in the latest refresh.
    changes: ScoreboardDiff,
    error: Option<String>,
    is_exiting: bool,
}

impl LiveApp {
    pub fn new(source: GameSource, evaluation: Evaluation) -> Self {
        Self {
            source,
            evaluation,
            view: None,
            changes: ScoreboardDiff::default(),
            error: None,
            is_exiting: false,
        }
    }

    fn refresh(&mut self) {
        let result = self.source.fetch().and_then(|game| self.apply_game(game));
        match result {
            Ok(()) => self.error = None,
            Err(err) => {
                tracing::warn!(?err, source = %self.source, "refresh failed");
                self.error = Some(format!("{err:#}"));
            }
        }
    }

    /// Evaluates a freshly fetched feed and diffs it against the previous one.
    ///
    /// The first snapshot has nothing to compare against, so nothing is marked
    /// as changed.
    fn apply_game(&mut self, game: Game) -> anyhow::Result<()> {
        let favor = self.evaluation.evaluate(&game)?;
        let umpire = favor.summary(game.home_abbreviation(), game.away_abbreviation());
        let snapshot =
            ScoreboardSnapshot::from_game(&game, umpire, self.source.delay_seconds());

        self.changes = self
            .view
            .as_ref()
            .map(|view| diff(&view.snapshot, &snapshot))
            .unwrap_or_default();
        if self.changes.is_changed() {
            tracing::debug!(changes = ?self.changes.to_map(), "scoreboard changed");
        }
        self.view = Some(LiveView {
            game,
            snapshot,
            updated_at: Local::now(),
        });
        Ok(())
    }

    fn draw_view(&self, frame: &mut Frame, view: &LiveView, area: Rect) {
        let LiveView {
            game,
            snapshot,
            updated_at,
        } = view;
        let at_bat = game.current_at_bat();
        let last_pitch = at_bat.and_then(|at_bat| at_bat.pitches().last());
        let hit = at_bat.and_then(|at_bat| {
            at_bat
                .play_events
                .iter()
                .rev()
                .find_map(|event| event.hit_data.as_ref())
        });

        let scoreboard = ScoreboardDisplay::new(snapshot, &self.changes)
            .block(Block::bordered().title(Line::from("SCOREBOARD").centered()));
        let at_bat_display = AtBatDisplay::new(
            at_bat,
            snapshot.runner_state(),
            &self.evaluation.tables.expectancy,
        )
        .block(Block::bordered().title(Line::from("AT BAT").centered()));
        let pitch = PitchDisplay::new(last_pitch)
            .block(Block::bordered().title(Line::from("LAST PITCH").centered()));
        let hit = HitDisplay::new(hit).block(Block::bordered().title(Line::from("HIT").centered()));

        let top_height = scoreboard.height().max(at_bat_display.height());
        let bottom_height = pitch.height().max(hit.height());
        let [title_area, top_area, bottom_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(top_height),
            Constraint::Length(bottom_height),
        ])
        .areas(area);
        let [scoreboard_area, at_bat_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(top_area);
        let [pitch_area, hit_area] =
            Layout::horizontal([Constraint::Fill(2), Constraint::Fill(1)]).areas(bottom_area);

        let title = Line::from(vec![
            Span::styled(
                format!("{} @ {}", snapshot.away_abv, snapshot.home_abv),
                style::DEFAULT,
            ),
            Span::styled(format!("  {}", self.source), style::LABEL),
            Span::styled(
                format!("  updated {}", updated_at.format("%H:%M:%S")),
                style::LABEL,
            ),
        ])
        .centered();
        frame.render_widget(title, title_area);
        frame.render_widget(&scoreboard, scoreboard_area);
        frame.render_widget(&at_bat_display, at_bat_area);
        frame.render_widget(&pitch, pitch_area);
        frame.render_widget(&hit, hit_area);
    }
}

impl App for LiveApp {
    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, tui: &mut Tui, event: Event) {
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
                KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.is_exiting = true;
                }
                KeyCode::Char('r') => tui.request_tick(),
                _ => {}
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [main_area, status_area, help_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        match &self.view {
            Some(view) => self.draw_view(frame, view, main_area),
            None => frame.render_widget(
                Paragraph::new(format!("Loading {}...", self.source))
                    .style(style::LABEL)
                    .centered(),
                main_area,
            ),
        }
        if let Some(error) = &self.error {
            frame.render_widget(
                Line::styled(error.as_str(), style::ERROR).centered(),
                status_area,
            );
        }
        frame.render_widget(
            Line::styled("Controls: R (Refresh) | Q (Quit)", style::LABEL).centered(),
            help_area,
        );
    }

    fn update(&mut self, _tui: &mut Tui) {
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use serde_json::json;
    use umpire_engine::RunTables;
    use umpire_evaluator::call_evaluator::CallMethod;

    use super::*;

    fn app() -> LiveApp {
        let evaluation = Evaluation {
            method: CallMethod::Zone,
            seed: "0123456789abcdef0123456789abcdef".parse().unwrap(),
            tables: RunTables::default_tables().clone(),
        };
        LiveApp::new(
            GameSource::File {
                path: PathBuf::from("missing-game.json"),
            },
            evaluation,
        )
    }

    fn game(outs: u8, home_runs: u32) -> Game {
        serde_json::from_value(json!({
            "gamePk": 745123,
            "gameData": {
                "status": {"abstractGameState": "Live", "detailedState": "In Progress"},
                "teams": {"away": {"abbreviation": "BOS"}, "home": {"abbreviation": "NYY"}}
            },
            "liveData": {
                "plays": {"allPlays": []},
                "linescore": {
                    "currentInning": 3,
                    "isTopInning": true,
                    "outs": outs,
                    "teams": {"away": {"runs": 1}, "home": {"runs": home_runs}}
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_first_refresh_marks_nothing_changed() {
        let mut app = app();
        app.apply_game(game(1, 0)).unwrap();
        assert!(!app.changes.is_changed());
        let view = app.view.as_ref().unwrap();
        assert_eq!(view.snapshot.outs, 1);
        assert_eq!(view.snapshot.umpire, "+0.00 NYY (0)");
    }

    #[test]
    fn test_later_refreshes_diff_against_previous() {
        let mut app = app();
        app.apply_game(game(1, 0)).unwrap();
        app.apply_game(game(2, 0)).unwrap();
        assert_eq!(
            serde_json::Value::Object(app.changes.to_map()),
            json!({"outs": 2})
        );

        app.apply_game(game(2, 1)).unwrap();
        assert!(app.changes.contains("home_score"));
        assert!(!app.changes.contains("outs"));

        app.apply_game(game(2, 1)).unwrap();
        assert!(!app.changes.is_changed());
    }

    #[test]
    fn test_failed_fetch_keeps_last_view() {
        let mut app = app();
        app.apply_game(game(1, 0)).unwrap();
        app.refresh();
        assert!(app.error.is_some());
        assert_eq!(app.view.as_ref().unwrap().snapshot.outs, 1);
    }
}
