use serde::{Deserialize, Serialize};

use super::{AtBat, Linescore};

/// Root of the live game feed document.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(default)]
    pub game_pk: u64,
    #[serde(default)]
    pub game_data: GameData,
    #[serde(default)]
    pub live_data: LiveData,
}

impl Game {
    /// At-bats in chronological order.
    #[must_use]
    pub fn at_bats(&self) -> &[AtBat] {
        &self.live_data.plays.all_plays
    }

    /// The at-bat in progress, or the last one of a finished game.
    #[must_use]
    pub fn current_at_bat(&self) -> Option<&AtBat> {
        self.live_data
            .plays
            .current_play
            .as_ref()
            .or_else(|| self.at_bats().last())
    }

    #[must_use]
    pub fn home_abbreviation(&self) -> &str {
        &self.game_data.teams.home.abbreviation
    }

    #[must_use]
    pub fn away_abbreviation(&self) -> &str {
        &self.game_data.teams.away.abbreviation
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    #[serde(default)]
    pub status: GameStatus,
    #[serde(default)]
    pub teams: Teams,
    #[serde(default)]
    pub datetime: GameDateTime,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    /// `Preview`, `Live` or `Final`.
    #[serde(default)]
    pub abstract_game_state: String,
    /// `P`, `L` or `F`.
    #[serde(default)]
    pub abstract_game_code: String,
    /// e.g. `In Progress`, `Delayed: Rain`, `Final`.
    #[serde(default)]
    pub detailed_state: String,
    #[serde(default)]
    pub coded_game_state: String,
    #[serde(default)]
    pub status_code: String,
}

impl GameStatus {
    /// Coarse game phase for display: `Delayed` and `Suspended` take precedence
    /// over the abstract state, which otherwise maps to `Pregame`, `Live`, `Final`.
    #[must_use]
    pub fn phase(&self) -> &'static str {
        if self.detailed_state.starts_with("Delayed") {
            return "Delayed";
        }
        if self.detailed_state.starts_with("Suspended") {
            return "Suspended";
        }
        match self.abstract_game_state.as_str() {
            "Live" => "Live",
            "Final" => "Final",
            "Preview" => "Pregame",
            _ => "Unknown",
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Teams {
    #[serde(default)]
    pub away: Team,
    #[serde(default)]
    pub home: Team,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub team_name: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GameDateTime {
    /// Scheduled first pitch, RFC 3339.
    #[serde(default, rename = "dateTime", alias = "startTime")]
    pub date_time: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LiveData {
    #[serde(default)]
    pub plays: Plays,
    #[serde(default)]
    pub linescore: Linescore,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plays {
    #[serde(default)]
    pub all_plays: Vec<AtBat>,
    #[serde(default)]
    pub current_play: Option<AtBat>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let game: Game = serde_json::from_value(json!({})).unwrap();
        assert_eq!(game.game_pk, 0);
        assert!(game.at_bats().is_empty());
        assert!(game.current_at_bat().is_none());
        assert_eq!(game.home_abbreviation(), "");
    }

    #[test]
    fn test_status_phase() {
        let status = |abstract_state: &str, detailed: &str| GameStatus {
            abstract_game_state: abstract_state.to_owned(),
            detailed_state: detailed.to_owned(),
            ..GameStatus::default()
        };
        assert_eq!(status("Live", "In Progress").phase(), "Live");
        assert_eq!(status("Live", "Delayed: Rain").phase(), "Delayed");
        assert_eq!(status("Preview", "Scheduled").phase(), "Pregame");
        assert_eq!(status("Final", "Final").phase(), "Final");
        assert_eq!(status("Live", "Suspended: Rain").phase(), "Suspended");
    }

    #[test]
    fn test_start_time_alias() {
        let datetime: GameDateTime =
            serde_json::from_value(json!({"startTime": "2023-06-01T19:10:00Z"})).unwrap();
        assert_eq!(datetime.date_time, "2023-06-01T19:10:00Z");
    }
}
