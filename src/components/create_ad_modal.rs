use crate::api::submit_ad;
use crate::hooks::{use_games, use_services};
use crate::model::{
    CheckedState, FormFields, WeekDay, WeekDaySelection, DISCORD_FIELD, GAME_FIELD, HOUR_END_FIELD,
    HOUR_START_FIELD, NAME_FIELD, YEARS_PLAYING_FIELD,
};
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use super::{GameSelect, Input, VoiceChannelCheckbox, WeekDayToggleGroup};

/// Reads every text entry of the form, keyed by input name.
pub fn harvest_form(form: &HtmlFormElement) -> FormFields {
    let form_data = match FormData::new_with_form(form) {
        Ok(form_data) => form_data,
        Err(err) => {
            log::error!("Could not read form data: {:?}", err);
            return FormFields::new();
        }
    };

    form_data
        .entries()
        .into_iter()
        .filter_map(|entry| {
            let pair = js_sys::Array::from(&entry.ok()?);
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct CreateAdModalProps {
    pub on_close: Callback<()>,
}

#[function_component(CreateAdModal)]
pub fn create_ad_modal(props: &CreateAdModalProps) -> Html {
    let services = use_services();
    let games = use_games();
    let week_days = use_reducer(WeekDaySelection::new);
    let use_voice_channel = use_state(|| false);

    let on_week_day_toggle = {
        let week_days = week_days.clone();
        Callback::from(move |day: WeekDay| week_days.dispatch(day))
    };

    let on_voice_change = {
        let use_voice_channel = use_voice_channel.clone();
        Callback::from(move |state: CheckedState| use_voice_channel.set(state.is_checked()))
    };

    // Submitting is not disabled while a request is pending.
    let on_submit = {
        let week_days = week_days.clone();
        let use_voice_channel = use_voice_channel.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form: HtmlFormElement = e.target_unchecked_into();
            let fields = harvest_form(&form);
            let selection = (*week_days).clone();
            let voice = *use_voice_channel;
            let services = services.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = submit_ad(
                    &*services.api,
                    &*services.notifier,
                    &fields,
                    &selection,
                    voice,
                )
                .await;
                log::debug!("Ad submission finished: {:?}", outcome);
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="duo-ad-modal">
            <h2 class="duo-ad-modal__title">{"Publique um anúncio"}</h2>

            <form class="duo-ad-modal__form" onsubmit={on_submit}>
                <div class="duo-ad-modal__field">
                    <label class="duo-ad-modal__label" for={GAME_FIELD}>{"Qual o game?"}</label>
                    <GameSelect {games} />
                </div>

                <div class="duo-ad-modal__field">
                    <label for={NAME_FIELD}>{"Seu nome (ou nickname)"}</label>
                    <Input
                        id={NAME_FIELD}
                        name={NAME_FIELD}
                        placeholder={"Como te chamam dentro do game?"}
                    />
                </div>

                <div class="duo-ad-modal__row">
                    <div class="duo-ad-modal__field">
                        <label for={YEARS_PLAYING_FIELD}>{"Joga há quantos anos?"}</label>
                        <Input
                            id={YEARS_PLAYING_FIELD}
                            name={YEARS_PLAYING_FIELD}
                            input_type="number"
                            min="0"
                            placeholder={"Tudo bem ser ZERO"}
                        />
                    </div>
                    <div class="duo-ad-modal__field">
                        <label for={DISCORD_FIELD}>{"Qual seu Discord?"}</label>
                        <Input id={DISCORD_FIELD} name={DISCORD_FIELD} placeholder={"Usuario#0000"} />
                    </div>
                </div>

                <div class="duo-ad-modal__row">
                    <div class="duo-ad-modal__field">
                        <label>{"Quando costuma jogar?"}</label>
                        <WeekDayToggleGroup
                            selection={(*week_days).clone()}
                            on_toggle={on_week_day_toggle}
                        />
                    </div>
                    <div class="duo-ad-modal__field duo-ad-modal__field--grow">
                        <label for={HOUR_START_FIELD}>{"Qual horário do dia?"}</label>
                        <div class="duo-ad-modal__hours">
                            <Input
                                id={HOUR_START_FIELD}
                                name={HOUR_START_FIELD}
                                input_type="time"
                                placeholder={"De"}
                            />
                            <Input
                                id={HOUR_END_FIELD}
                                name={HOUR_END_FIELD}
                                input_type="time"
                                placeholder={"Até"}
                            />
                        </div>
                    </div>
                </div>

                <VoiceChannelCheckbox
                    checked={*use_voice_channel}
                    on_checked_change={on_voice_change}
                />

                <footer class="duo-ad-modal__footer">
                    <button
                        type="button"
                        class="duo-btn duo-btn--secondary"
                        onclick={on_cancel}
                    >
                        {"Cancelar"}
                    </button>
                    <button type="submit" class="duo-btn duo-btn--primary">
                        <span class="duo-btn__icon">{"🎮"}</span>
                        <span>{"Encontrar duo"}</span>
                    </button>
                </footer>
            </form>
        </div>
    }
}
