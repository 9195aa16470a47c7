use crate::api::load_games;
use crate::model::Game;
use yew::prelude::*;
use yew_hooks::use_mount;

use super::use_services;

/// Games offered in the select.
///
/// Fetched once when the calling component mounts; stays empty if the request fails.
#[hook]
pub fn use_games() -> Vec<Game> {
    let services = use_services();
    let games = use_state(Vec::<Game>::new);

    {
        let games = games.clone();
        use_mount(move || {
            wasm_bindgen_futures::spawn_local(async move {
                games.set(load_games(&*services.api).await);
            });
        });
    }

    (*games).clone()
}
