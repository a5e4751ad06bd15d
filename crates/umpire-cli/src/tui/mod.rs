//! Minimal terminal runtime: a ticking event loop driving one [`App`].

mod app;
mod event;
mod event_loop;
mod runner;

pub use self::{app::App, runner::Tui};
