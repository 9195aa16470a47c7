use crate::model::{DraftError, FormFields, GameId, WeekDaySelection};
use serde::{Deserialize, Serialize};

pub const GAME_FIELD: &str = "game";
pub const NAME_FIELD: &str = "name";
pub const YEARS_PLAYING_FIELD: &str = "yearsPlaying";
pub const DISCORD_FIELD: &str = "discord";
pub const HOUR_START_FIELD: &str = "hourStart";
pub const HOUR_END_FIELD: &str = "hourEnd";

/// Request body for `POST /games/{gameId}/ads`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAd {
    pub name: String,
    pub years_playing: u32,
    pub discord: String,
    pub week_days: Vec<u8>,
    pub hour_start: String,
    pub hour_end: String,
    pub use_voice_channel: bool,
}

/// An ad assembled from one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdDraft {
    pub game_id: GameId,
    pub ad: NewAd,
}

impl AdDraft {
    /// Combines the native form values with the toggle group and checkbox state.
    ///
    /// Only the name is required. Every other field is passed through as typed,
    /// so an unselected game yields an empty `game_id`.
    pub fn from_form(
        fields: &FormFields,
        week_days: &WeekDaySelection,
        use_voice_channel: bool,
    ) -> Result<Self, DraftError> {
        let name = fields.get(NAME_FIELD).unwrap_or_default();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }

        Ok(AdDraft {
            game_id: fields.get_or_empty(GAME_FIELD),
            ad: NewAd {
                name: name.to_string(),
                years_playing: parse_years_playing(fields.get(YEARS_PLAYING_FIELD)),
                discord: fields.get_or_empty(DISCORD_FIELD),
                week_days: week_days.codes(),
                hour_start: fields.get_or_empty(HOUR_START_FIELD),
                hour_end: fields.get_or_empty(HOUR_END_FIELD),
                use_voice_channel,
            },
        })
    }
}

// Number inputs already drop non-numeric text, so anything unparsable here is empty.
fn parse_years_playing(value: Option<&str>) -> u32 {
    value
        .map(str::trim)
        .and_then(|years| years.parse().ok())
        .unwrap_or_default()
}
