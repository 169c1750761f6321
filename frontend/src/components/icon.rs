use yew::prelude::*;

use crate::icons::{IconKind, IconTable};

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let table = use_memo(|_| IconTable::registered(), ());
    let Some(paths) = table.lookup(props.kind) else {
        log::warn!("icon {} is not registered", props.kind);
        return html! {};
    };

    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for paths.iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
