use super::{ads_url, games_url, AdsApi, ApiError};
use crate::model::{Game, NewAd};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};

/// [`AdsApi`] backed by the browser's `fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpAdsApi {
    base_url: String,
}

impl HttpAdsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn ensure_success(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            Ok(response)
        } else {
            Err(ApiError::Status(response.status()))
        }
    }
}

#[async_trait(?Send)]
impl AdsApi for HttpAdsApi {
    async fn list_games(&self) -> Result<Vec<Game>, ApiError> {
        let url = games_url(&self.base_url);
        log::debug!("GET {}", url);

        let response = Self::ensure_success(Request::get(&url).send().await?)?;
        Ok(response.json::<Vec<Game>>().await?)
    }

    async fn create_ad(&self, game_id: &str, ad: &NewAd) -> Result<(), ApiError> {
        let url = ads_url(&self.base_url, game_id);
        log::debug!("POST {}", url);

        let request = Request::post(&url)
            .json(ad)
            .map_err(|err| ApiError::Encode(err.to_string()))?;
        Self::ensure_success(request.send().await?)?;
        Ok(())
    }
}
