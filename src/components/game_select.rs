use crate::model::{Game, Identifiable, Named, GAME_FIELD};
use yew::prelude::*;

pub const GAME_PLACEHOLDER: &str = "Selecione o game que deseja jogar";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

/// The disabled placeholder followed by one option per game.
pub fn select_options(games: &[Game]) -> Vec<SelectOption> {
    let placeholder = SelectOption {
        value: String::new(),
        label: GAME_PLACEHOLDER.to_string(),
        disabled: true,
    };

    std::iter::once(placeholder)
        .chain(games.iter().map(|game| SelectOption {
            value: game.identifier().to_string(),
            label: game.name().to_string(),
            disabled: false,
        }))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct GameSelectProps {
    pub games: Vec<Game>,
}

#[function_component(GameSelect)]
pub fn game_select(props: &GameSelectProps) -> Html {
    html! {
        <select id={GAME_FIELD} name={GAME_FIELD} class="duo-select">
            {for select_options(&props.games).into_iter().map(|option| {
                let placeholder = option.disabled;
                html! {
                    <option
                        key={option.value.clone()}
                        value={option.value}
                        disabled={placeholder}
                        selected={placeholder}
                    >
                        {option.label}
                    </option>
                }
            })}
        </select>
    }
}
