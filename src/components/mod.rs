mod create_ad_modal;
mod dialog;
mod game_select;
mod input;
mod voice_channel_checkbox;
mod week_day_toggle_group;

#[cfg(all(test, target_arch = "wasm32"))]
mod tests;

pub use create_ad_modal::{harvest_form, CreateAdModal, CreateAdModalProps};
pub use dialog::{Dialog, DialogProps};
pub use game_select::{select_options, GameSelect, SelectOption, GAME_PLACEHOLDER};
pub use input::{Input, InputProps};
pub use voice_channel_checkbox::VoiceChannelCheckbox;
pub use week_day_toggle_group::WeekDayToggleGroup;
