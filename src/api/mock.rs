use super::{AdsApi, ApiError, Notifier};
use crate::model::{Game, NewAd};
use async_trait::async_trait;
use std::cell::RefCell;

/// In-memory ads service recording every call.
#[derive(Default)]
pub struct MockAdsApi {
    games: Vec<Game>,
    failure: Option<ApiError>,
    list_calls: RefCell<usize>,
    created: RefCell<Vec<(String, NewAd)>>,
}

impl MockAdsApi {
    pub fn with_games(games: Vec<Game>) -> Self {
        MockAdsApi {
            games,
            ..Default::default()
        }
    }

    pub fn failing(error: ApiError) -> Self {
        MockAdsApi {
            failure: Some(error),
            ..Default::default()
        }
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.borrow()
    }

    pub fn created(&self) -> Vec<(String, NewAd)> {
        self.created.borrow().clone()
    }
}

#[async_trait(?Send)]
impl AdsApi for MockAdsApi {
    async fn list_games(&self) -> Result<Vec<Game>, ApiError> {
        *self.list_calls.borrow_mut() += 1;
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(self.games.clone()),
        }
    }

    async fn create_ad(&self, game_id: &str, ad: &NewAd) -> Result<(), ApiError> {
        self.created
            .borrow_mut()
            .push((game_id.to_string(), ad.clone()));
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
