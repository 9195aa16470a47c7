use crate::hooks::ServiceContext;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ServiceProviderProps {
    pub services: ServiceContext,
    pub children: Children,
}

#[function_component(ServiceProvider)]
pub fn service_provider(props: &ServiceProviderProps) -> Html {
    html! {
        <ContextProvider<ServiceContext> context={props.services.clone()}>
            {props.children.clone()}
        </ContextProvider<ServiceContext>>
    }
}
