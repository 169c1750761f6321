use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::{self, FaqEntry};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_bool_toggle(false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.toggle();
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={(*is_open).to_string()}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section class="section faq-section">
            <h2>{"FAQ"}</h2>
            <div class="faq-grid">
                { for content::faqs().iter().map(|entry| html! { <FaqItem entry={*entry} /> }) }
            </div>
        </section>
    }
}
