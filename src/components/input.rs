use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InputProps {
    pub id: AttrValue,
    pub name: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub min: Option<AttrValue>,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    html! {
        <input
            class="duo-input"
            id={props.id.clone()}
            name={props.name.clone()}
            type={props.input_type.clone()}
            placeholder={props.placeholder.clone()}
            min={props.min.clone()}
        />
    }
}
