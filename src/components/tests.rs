use super::{CreateAdModal, Dialog};
use crate::api::mock::{MockAdsApi, RecordingNotifier};
use crate::api::AD_CREATED_MESSAGE;
use crate::hooks::ServiceContext;
use crate::model::Game;
use crate::providers::ServiceProvider;
use gloo_timers::future::TimeoutFuture;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlInputElement, KeyboardEventInit};
use yew::prelude::*;

// Run with: wasm-pack test --firefox --headless

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct HarnessProps {
    services: ServiceContext,
    closes: Rc<Cell<usize>>,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let on_close = {
        let closes = props.closes.clone();
        Callback::from(move |_: ()| closes.set(closes.get() + 1))
    };

    html! {
        <ServiceProvider services={props.services.clone()}>
            <CreateAdModal {on_close} />
        </ServiceProvider>
    }
}

#[derive(Properties, PartialEq)]
struct DialogHarnessProps {
    open: bool,
    requests: Rc<RefCell<Vec<bool>>>,
}

#[function_component(DialogHarness)]
fn dialog_harness(props: &DialogHarnessProps) -> Html {
    let on_open_change = {
        let requests = props.requests.clone();
        Callback::from(move |open: bool| requests.borrow_mut().push(open))
    };

    html! {
        <Dialog open={props.open} {on_open_change}>
            <p class="dialog-body">{"Conteúdo"}</p>
        </Dialog>
    }
}

struct Mounted {
    root: Element,
    api: Rc<MockAdsApi>,
    notifier: Rc<RecordingNotifier>,
    closes: Rc<Cell<usize>>,
}

impl Mounted {
    fn click(&self, selector: &str) {
        click(&self.root, selector);
    }

    fn type_into(&self, selector: &str, value: &str) {
        query(&self.root, selector)
            .unchecked_into::<HtmlInputElement>()
            .set_value(value);
    }

    fn pressed_days(&self) -> Vec<String> {
        let buttons = self
            .root
            .query_selector_all(".duo-week-days__item[aria-pressed='true']")
            .unwrap();
        (0..buttons.length())
            .filter_map(|i| buttons.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|button| button.get_attribute("title"))
            .collect()
    }
}

fn query(root: &Element, selector: &str) -> Element {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {}", selector))
}

fn click(root: &Element, selector: &str) {
    query(root, selector).unchecked_into::<HtmlElement>().click();
}

async fn settle() {
    TimeoutFuture::new(50).await;
}

fn container() -> Element {
    console_error_panic_hook::set_once();

    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

async fn mount(games: Vec<Game>) -> Mounted {
    let root = container();

    let api = Rc::new(MockAdsApi::with_games(games));
    let notifier = Rc::new(RecordingNotifier::default());
    let closes = Rc::new(Cell::new(0));
    let services = ServiceContext {
        api: api.clone(),
        notifier: notifier.clone(),
    };

    yew::Renderer::<Harness>::with_root_and_props(
        root.clone(),
        HarnessProps {
            services,
            closes: closes.clone(),
        },
    )
    .render();
    settle().await;

    Mounted {
        root,
        api,
        notifier,
        closes,
    }
}

async fn mount_dialog(open: bool) -> (Element, Rc<RefCell<Vec<bool>>>) {
    let root = container();
    let requests = Rc::new(RefCell::new(Vec::new()));

    yew::Renderer::<DialogHarness>::with_root_and_props(
        root.clone(),
        DialogHarnessProps {
            open,
            requests: requests.clone(),
        },
    )
    .render();
    settle().await;

    (root, requests)
}

#[wasm_bindgen_test]
async fn renders_loaded_games_once() {
    let mounted = mount(vec![Game::new("1", "Chess")]).await;

    let options = mounted.root.query_selector_all("select option").unwrap();
    assert_eq!(options.length(), 2);

    let chess = query(&mounted.root, "select option[value='1']");
    assert_eq!(chess.text_content().as_deref(), Some("Chess"));

    mounted.click("button[title='Domingo']");
    settle().await;
    assert_eq!(mounted.pressed_days(), vec!["Domingo".to_string()]);

    mounted.click("button[title='Domingo']");
    settle().await;
    assert!(mounted.pressed_days().is_empty());

    assert_eq!(mounted.api.list_calls(), 1);
}

#[wasm_bindgen_test]
async fn clicks_before_rerender_are_all_kept() {
    let mounted = mount(Vec::new()).await;

    mounted.click("button[title='Segunda']");
    mounted.click("button[title='Sexta']");
    settle().await;

    assert_eq!(
        mounted.pressed_days(),
        vec!["Segunda".to_string(), "Sexta".to_string()]
    );
}

#[wasm_bindgen_test]
async fn empty_name_is_not_submitted() {
    let mounted = mount(vec![Game::new("1", "Chess")]).await;

    mounted.click("button[type='submit']");
    settle().await;

    assert!(mounted.api.created().is_empty());
    assert!(mounted.notifier.messages().is_empty());
    assert_eq!(mounted.closes.get(), 0);
}

#[wasm_bindgen_test]
async fn submits_selected_days_and_voice_flag() {
    let mounted = mount(vec![Game::new("1", "Chess")]).await;

    mounted.type_into("#name", "Nick");
    mounted.type_into("#yearsPlaying", "4");
    mounted.click("button[title='Segunda']");
    settle().await;
    mounted.click("button[title='Sexta']");
    settle().await;
    mounted.click(".duo-checkbox__input");
    settle().await;

    mounted.click("button[type='submit']");
    settle().await;

    let created = mounted.api.created();
    assert_eq!(created.len(), 1);

    let (game_id, ad) = &created[0];
    assert_eq!(game_id, "");
    assert_eq!(ad.name, "Nick");
    assert_eq!(ad.years_playing, 4);
    assert_eq!(ad.week_days, vec![1, 5]);
    assert!(ad.use_voice_channel);
    assert_eq!(
        mounted.notifier.messages(),
        vec![AD_CREATED_MESSAGE.to_string()]
    );
}

#[wasm_bindgen_test]
async fn checking_then_unchecking_voice_channel_sends_false() {
    let mounted = mount(Vec::new()).await;

    mounted.type_into("#name", "Nick");
    mounted.click(".duo-checkbox__input");
    settle().await;
    assert_eq!(
        query(&mounted.root, ".duo-checkbox__indicator").text_content().as_deref(),
        Some("✓")
    );

    mounted.click(".duo-checkbox__input");
    settle().await;

    mounted.click("button[type='submit']");
    settle().await;

    let created = mounted.api.created();
    assert_eq!(created.len(), 1);
    assert!(!created[0].1.use_voice_channel);
}

#[wasm_bindgen_test]
async fn cancel_emits_on_close_without_submitting() {
    let mounted = mount(Vec::new()).await;

    mounted.type_into("#name", "Nick");
    mounted.click(".duo-btn--secondary");
    settle().await;

    assert_eq!(mounted.closes.get(), 1);
    assert!(mounted.api.created().is_empty());
    assert!(mounted.notifier.messages().is_empty());
}

#[wasm_bindgen_test]
async fn closed_dialog_renders_nothing() {
    let (root, requests) = mount_dialog(false).await;

    assert!(root.query_selector(".duo-dialog__content").unwrap().is_none());
    assert!(root.query_selector(".duo-dialog__overlay").unwrap().is_none());
    assert!(root.query_selector(".dialog-body").unwrap().is_none());
    assert!(requests.borrow().is_empty());
}

#[wasm_bindgen_test]
async fn overlay_click_and_escape_request_close() {
    let (root, requests) = mount_dialog(true).await;

    assert!(root.query_selector(".dialog-body").unwrap().is_some());

    click(&root, ".dialog-body");
    settle().await;
    assert!(requests.borrow().is_empty());

    click(&root, ".duo-dialog__overlay");
    settle().await;
    assert_eq!(*requests.borrow(), vec![false]);

    let init = KeyboardEventInit::new();
    init.set_key("Enter");
    init.set_bubbles(true);
    let enter = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    query(&root, ".duo-dialog__content")
        .dispatch_event(&enter)
        .unwrap();
    settle().await;
    assert_eq!(*requests.borrow(), vec![false]);

    init.set_key("Escape");
    let escape =
        web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    query(&root, ".duo-dialog__content")
        .dispatch_event(&escape)
        .unwrap();
    settle().await;
    assert_eq!(*requests.borrow(), vec![false, false]);
}
