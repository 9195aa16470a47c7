use crate::model::CheckedState;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VoiceChannelCheckboxProps {
    pub checked: bool,
    pub on_checked_change: Callback<CheckedState>,
}

#[function_component(VoiceChannelCheckbox)]
pub fn voice_channel_checkbox(props: &VoiceChannelCheckboxProps) -> Html {
    let onchange = {
        let on_checked_change = props.on_checked_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_checked_change.emit(CheckedState::from_input(
                input.checked(),
                input.indeterminate(),
            ));
        })
    };

    html! {
        <label class="duo-checkbox">
            <input
                class="duo-checkbox__input"
                type="checkbox"
                checked={props.checked}
                {onchange}
            />
            <span class="duo-checkbox__indicator">
                {if props.checked { "✓" } else { "" }}
            </span>
            <span class="duo-checkbox__label">{"Costumo me conectar ao chat de voz"}</span>
        </label>
    }
}
