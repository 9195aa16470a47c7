use super::ApiError;
use crate::model::{Game, NewAd};
use async_trait::async_trait;

/// Remote service that lists games and stores ads.
#[async_trait(?Send)]
pub trait AdsApi {
    async fn list_games(&self) -> Result<Vec<Game>, ApiError>;
    async fn create_ad(&self, game_id: &str, ad: &NewAd) -> Result<(), ApiError>;
}

pub fn games_url(base_url: &str) -> String {
    format!("{}/games", base_url.trim_end_matches('/'))
}

pub fn ads_url(base_url: &str, game_id: &str) -> String {
    format!("{}/games/{}/ads", base_url.trim_end_matches('/'), game_id)
}
