use crate::api::{AdsApi, AlertNotifier, HttpAdsApi, Notifier};
use crate::config::Config;
use std::rc::Rc;
use yew::prelude::*;

/// Collaborators shared by the ad dialog.
#[derive(Clone)]
pub struct ServiceContext {
    /// Lists games and stores ads
    pub api: Rc<dyn AdsApi>,

    /// Reports the outcome of a submission
    pub notifier: Rc<dyn Notifier>,
}

impl ServiceContext {
    pub fn new(api: impl AdsApi + 'static, notifier: impl Notifier + 'static) -> Self {
        Self {
            api: Rc::new(api),
            notifier: Rc::new(notifier),
        }
    }

    /// Talks to the ads service at `config.api_url` and reports through `window.alert`.
    pub fn http(config: &Config) -> Self {
        Self::new(HttpAdsApi::new(config.api_url.clone()), AlertNotifier)
    }
}

impl PartialEq for ServiceContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api) && Rc::ptr_eq(&self.notifier, &other.notifier)
    }
}

/// Hook to access the ads service and notifier
#[hook]
pub fn use_services() -> ServiceContext {
    use_context::<ServiceContext>().expect("use_services must be used within a ServiceProvider")
}
