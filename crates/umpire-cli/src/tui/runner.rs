use std::time::Duration;

use crate::tui::{App, event::TuiEvent, event_loop::EventLoop};

/// TUI application runtime.
#[derive(Debug)]
pub struct Tui {
    events: EventLoop,
}

impl Tui {
    /// Creates a runtime that ticks every `tick_interval`, starting immediately.
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            events: EventLoop::new(tick_interval),
        }
    }

    /// Makes the next event a tick instead of waiting out the interval.
    pub fn request_tick(&mut self) {
        self.events.request_tick();
    }

    /// Runs `app` until it asks to exit.
    ///
    /// Ticks call `app.update()`, renders call `app.draw()` and terminal events
    /// go to `app.handle_event()`. The terminal is restored on return.
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => app.update(&mut self),
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => app.handle_event(&mut self, event),
                }
            }
            Ok(())
        })
    }
}
