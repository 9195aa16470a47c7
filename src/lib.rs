pub mod api;
pub mod config;
pub mod model;

#[cfg(feature = "yew")]
pub mod app;
#[cfg(feature = "yew")]
pub mod components;
#[cfg(feature = "yew")]
pub mod hooks;
#[cfg(feature = "yew")]
pub mod providers;

pub mod prelude {
    #[cfg(feature = "yew")]
    pub use crate::api::{AlertNotifier, HttpAdsApi};
    pub use crate::api::{load_games, submit_ad, AdsApi, ApiError, Notifier, SubmitOutcome};
    #[cfg(feature = "yew")]
    pub use crate::app::App;
    #[cfg(feature = "yew")]
    pub use crate::components::*;
    pub use crate::config::Config;
    #[cfg(feature = "yew")]
    pub use crate::hooks::{use_games, use_services, ServiceContext};
    pub use crate::model::AdDraft;
    pub use crate::model::CheckedState;
    pub use crate::model::DraftError;
    pub use crate::model::FormFields;
    pub use crate::model::Game;
    pub use crate::model::NewAd;
    pub use crate::model::WeekDay;
    pub use crate::model::WeekDaySelection;
    #[cfg(feature = "yew")]
    pub use crate::providers::ServiceProvider;
}
