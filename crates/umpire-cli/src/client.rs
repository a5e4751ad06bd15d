//! Where game feeds come from: the public stats API or a saved JSON file.

use std::{fmt, path::PathBuf, time::Duration};

use anyhow::Context;
use chrono::{DateTime, TimeDelta, Utc};
use reqwest::blocking::Client;
use umpire_engine::feed::Game;

use crate::util;

pub const DEFAULT_API_BASE: &str = "https://statsapi.mlb.com/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
const TIMECODE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Blocking client for the live game feed endpoint.
#[derive(Debug, Clone)]
pub struct StatsApiClient {
    http: Client,
    base: String,
}

impl StatsApiClient {
    pub fn new(base: Option<String>) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("umpire/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        let base = base.unwrap_or_else(|| DEFAULT_API_BASE.to_owned());
        Ok(Self {
            http,
            base: base.trim_end_matches('/').to_owned(),
        })
    }

    pub fn feed_url(&self, game_pk: u64) -> String {
        format!("{}/v1.1/game/{game_pk}/feed/live", self.base)
    }

    /// Fetches the feed, as it stood `delay_seconds` ago when non-zero.
    pub fn fetch_game(&self, game_pk: u64, delay_seconds: u64) -> anyhow::Result<Game> {
        let url = self.feed_url(game_pk);
        let mut request = self.http.get(&url);
        if delay_seconds > 0 {
            request = request.query(&[("timecode", timecode(Utc::now(), delay_seconds)?)]);
        }
        tracing::debug!(%url, delay_seconds, "fetching game feed");

        let game = request
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .with_context(|| format!("Failed to fetch game feed: {url}"))?
            .json::<Game>()
            .with_context(|| format!("Failed to parse game feed: {url}"))?;
        Ok(game)
    }
}

/// Feed timecode for the moment `delay_seconds` before `now`.
pub fn timecode(now: DateTime<Utc>, delay_seconds: u64) -> anyhow::Result<String> {
    let delay = i64::try_from(delay_seconds)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .with_context(|| format!("Delay is too large: {delay_seconds}s"))?;
    let at = now
        .checked_sub_signed(delay)
        .with_context(|| format!("Delay is too large: {delay_seconds}s"))?;
    Ok(at.format(TIMECODE_FORMAT).to_string())
}

/// A game to evaluate.
#[derive(Debug, Clone)]
pub enum GameSource {
    Api {
        client: StatsApiClient,
        game_pk: u64,
        delay_seconds: u64,
    },
    File {
        path: PathBuf,
    },
}

impl GameSource {
    pub fn fetch(&self) -> anyhow::Result<Game> {
        match self {
            GameSource::Api {
                client,
                game_pk,
                delay_seconds,
            } => client.fetch_game(*game_pk, *delay_seconds),
            GameSource::File { path } => util::read_json_file("game", path),
        }
    }

    pub fn delay_seconds(&self) -> u64 {
        match self {
            GameSource::Api { delay_seconds, .. } => *delay_seconds,
            GameSource::File { .. } => 0,
        }
    }
}

impl fmt::Display for GameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameSource::Api {
                game_pk,
                delay_seconds: 0,
                ..
            } => write!(f, "game {game_pk}"),
            GameSource::Api {
                game_pk,
                delay_seconds,
                ..
            } => write!(f, "game {game_pk} ({delay_seconds}s behind)"),
            GameSource::File { path } => write!(f, "{}", path.display()),
        }
    }
}
