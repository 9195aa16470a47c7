use crate::components::{CreateAdModal, Dialog};
use crate::config::Config;
use crate::hooks::ServiceContext;
use crate::providers::ServiceProvider;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let services = use_state(|| ServiceContext::http(&Config::default()));
    let open = use_state(|| false);

    let on_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };

    let on_open_change = {
        let open = open.clone();
        Callback::from(move |is_open: bool| open.set(is_open))
    };

    let on_close = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(false))
    };

    html! {
        <ServiceProvider services={(*services).clone()}>
            <main class="duo-app">
                <div class="duo-banner">
                    <div class="duo-banner__text">
                        <strong class="duo-banner__title">{"Não encontrou seu duo?"}</strong>
                        <span>{"Publique um anúncio para encontrar novos players!"}</span>
                    </div>
                    <button class="duo-btn duo-btn--primary" onclick={on_open}>
                        {"Publicar anúncio"}
                    </button>
                </div>

                <Dialog open={*open} {on_open_change}>
                    <CreateAdModal {on_close} />
                </Dialog>
            </main>
        </ServiceProvider>
    }
}
