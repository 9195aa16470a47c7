use super::AdsApi;
use crate::model::Game;

/// Fetches the selectable games. A failed request degrades to an empty list.
pub async fn load_games<A>(api: &A) -> Vec<Game>
where
    A: AdsApi + ?Sized,
{
    match api.list_games().await {
        Ok(games) => {
            log::debug!("Loaded {} games", games.len());
            games
        }
        Err(err) => {
            log::warn!("Failed to load games: {}", err);
            Vec::new()
        }
    }
}
