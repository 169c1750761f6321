use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::cards::{use_theme, CheckItem};
use crate::config::Business;
use crate::content::{self, SelectField};

// How long the local notice stays up after pressing Submit.
const NOTICE_MS: u32 = 6_000;

/// What the visitor typed. Nothing here ever leaves the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub vehicle: String,
    pub selections: Vec<String>,
    pub consent: bool,
}

impl QuoteDraft {
    pub fn is_blank(&self) -> bool {
        [&self.name, &self.phone, &self.email, &self.vehicle]
            .iter()
            .all(|v| v.trim().is_empty())
    }

    /// Text shown after Submit. The form is a preview, so it always points
    /// the visitor to the phone line.
    pub fn notice(&self, business: &Business) -> String {
        if self.is_blank() {
            return format!(
                "Add your vehicle details, or call us at {}.",
                business.phone_display
            );
        }
        let greeting = match self.name.trim() {
            "" => "Thanks!".to_string(),
            name => format!("Thanks, {}!", name),
        };
        let subject = match self.vehicle.trim() {
            "" => "your install".to_string(),
            vehicle => format!("the install on your {}", vehicle),
        };
        format!(
            "{} Online quotes are coming soon. Call {} to book {}.",
            greeting, business.phone_display, subject
        )
    }
}

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    label: AttrValue,
    placeholder: AttrValue,
    value: String,
    onchange: Callback<String>,
}

#[function_component(TextField)]
fn text_field(props: &TextFieldProps) -> Html {
    let onchange = {
        let cb = props.onchange.clone();
        move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        }
    };
    html! {
        <div class="form-field">
            <label>{props.label.clone()}</label>
            <input placeholder={props.placeholder.clone()} value={props.value.clone()} {onchange} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SelectFieldProps {
    field: SelectField,
    onchange: Callback<String>,
}

#[function_component(Select)]
fn select(props: &SelectFieldProps) -> Html {
    let onchange = {
        let cb = props.onchange.clone();
        move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        }
    };
    html! {
        <div class="form-field">
            <label>{props.field.label}</label>
            <select {onchange}>
                { for props.field.options.iter().map(|o| html! { <option value={*o}>{*o}</option> }) }
            </select>
        </div>
    }
}

fn draft_setter(draft: &UseStateHandle<QuoteDraft>, apply: fn(&mut QuoteDraft, String)) -> Callback<String> {
    let draft = draft.clone();
    Callback::from(move |value: String| {
        let mut next = (*draft).clone();
        apply(&mut next, value);
        draft.set(next);
    })
}

#[function_component(QuoteForm)]
pub fn quote_form() -> Html {
    let theme = use_theme();
    let draft = use_state(|| QuoteDraft {
        selections: content::quote_selects()
            .iter()
            .map(|s| s.options.first().copied().unwrap_or_default().to_string())
            .collect(),
        ..QuoteDraft::default()
    });
    let notice = use_state(|| None::<String>);

    let on_consent = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.consent = input.checked();
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let notice = notice.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            log::info!("quote form is a preview, nothing was sent");
            notice.set(Some(draft.notice(content::business())));
            let notice = notice.clone();
            Timeout::new(NOTICE_MS, move || notice.set(None)).forget();
        })
    };

    html! {
        <section id="quote" class="section">
            <div class="two-col">
                <div>
                    <h2>{"Get a Fast Dash Cam Quote"}</h2>
                    <p class="muted">
                        {"Tell us your vehicle and preferred setup. We\u{2019}ll recommend the best option and schedule your install."}
                    </p>
                    <ul class="check-list">
                        <CheckItem text="Front\u{2011}only or Front + Rear" />
                        <CheckItem text="Parking Mode options" />
                        <CheckItem text="Customer\u{2011}supplied or purchased here" />
                    </ul>
                </div>
                <form class="card quote-form">
                    <TextField label="Name" placeholder="Your name" value={draft.name.clone()}
                        onchange={draft_setter(&draft, |d, v| d.name = v)} />
                    <TextField label="Phone" placeholder={content::business().phone_display} value={draft.phone.clone()}
                        onchange={draft_setter(&draft, |d, v| d.phone = v)} />
                    <TextField label="Email" placeholder="you@example.com" value={draft.email.clone()}
                        onchange={draft_setter(&draft, |d, v| d.email = v)} />
                    <TextField label="Vehicle Year / Make / Model" placeholder="e.g., 2021 Toyota 4Runner"
                        value={draft.vehicle.clone()} onchange={draft_setter(&draft, |d, v| d.vehicle = v)} />
                    {
                        for content::quote_selects().iter().enumerate().map(|(i, field)| {
                            let draft = draft.clone();
                            let onchange = Callback::from(move |value: String| {
                                let mut next = (*draft).clone();
                                if let Some(slot) = next.selections.get_mut(i) {
                                    *slot = value;
                                }
                                draft.set(next);
                            });
                            html! { <Select field={*field} {onchange} /> }
                        })
                    }
                    <div class="consent">
                        <input id="sms" type="checkbox" checked={draft.consent} onchange={on_consent} />
                        <label for="sms">{"I agree to be contacted by phone/SMS and email about my request."}</label>
                    </div>
                    <button type="button" class="solid-button" style={theme.solid_style()} onclick={on_submit}>
                        {"Submit"}
                    </button>
                    {
                        if let Some(text) = (*notice).clone() {
                            html! { <p class="form-notice" role="status">{text}</p> }
                        } else {
                            html! {}
                        }
                    }
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BUSINESS;

    #[test]
    fn blank_draft_points_to_the_phone_line() {
        let draft = QuoteDraft::default();
        assert!(draft.is_blank());
        assert_eq!(
            draft.notice(&BUSINESS),
            "Add your vehicle details, or call us at (704) 610\u{2011}6023."
        );
    }

    #[test]
    fn filled_draft_is_addressed_by_name_and_vehicle() {
        let draft = QuoteDraft {
            name: " Sam ".into(),
            vehicle: "2021 Toyota 4Runner".into(),
            ..QuoteDraft::default()
        };
        assert_eq!(
            draft.notice(&BUSINESS),
            "Thanks, Sam! Online quotes are coming soon. Call (704) 610\u{2011}6023 to book the install on your 2021 Toyota 4Runner."
        );
    }

    #[test]
    fn phone_only_draft_gets_a_generic_notice() {
        let draft = QuoteDraft { phone: "555".into(), ..QuoteDraft::default() };
        assert!(draft.notice(&BUSINESS).starts_with("Thanks! Online quotes"));
        assert!(draft.notice(&BUSINESS).ends_with("to book your install."));
    }
}
