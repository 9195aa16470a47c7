mod ads_api;
mod error;
mod games;
mod notifier;
mod submit;

#[cfg(feature = "yew")]
mod alert;
#[cfg(feature = "yew")]
mod http;

#[cfg(test)]
pub(crate) mod mock;

pub use ads_api::{ads_url, games_url, AdsApi};
pub use error::ApiError;
pub use games::load_games;
pub use notifier::{Notifier, AD_CREATED_MESSAGE, AD_FAILED_MESSAGE};
pub use submit::{submit_ad, SubmitOutcome};

#[cfg(feature = "yew")]
pub use alert::AlertNotifier;
#[cfg(feature = "yew")]
pub use http::HttpAdsApi;
