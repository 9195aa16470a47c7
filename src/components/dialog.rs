use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub open: bool,
    /// Emits `false` when the overlay is clicked or Escape is pressed in the panel
    pub on_open_change: Callback<bool>,
    #[prop_or_default]
    pub children: Children,
}

/// Modal overlay with a centered panel. Renders nothing while closed.
#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_overlay_click = {
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |_: MouseEvent| on_open_change.emit(false))
    };

    let on_keydown = {
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_open_change.emit(false);
            }
        })
    };

    html! {
        <>
            <div class="duo-dialog__overlay" onclick={on_overlay_click}></div>
            <div
                class="duo-dialog__content"
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                onkeydown={on_keydown}
            >
                {props.children.clone()}
            </div>
        </>
    }
}

