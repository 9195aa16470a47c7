mod ad;
mod checked_state;
mod error;
mod form_fields;
mod game;
mod identifiable;
mod named;
mod week_day;

pub use ad::{
    AdDraft, NewAd, DISCORD_FIELD, GAME_FIELD, HOUR_END_FIELD, HOUR_START_FIELD, NAME_FIELD,
    YEARS_PLAYING_FIELD,
};
pub use checked_state::CheckedState;
pub use error::DraftError;
pub use form_fields::FormFields;
pub use game::{Game, GameId};
pub use identifiable::Identifiable;
pub use named::Named;
pub use week_day::{WeekDay, WeekDayOption, WeekDaySelection, WEEK_DAY_OPTIONS};
