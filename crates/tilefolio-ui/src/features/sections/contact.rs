//! Contact form.
//!
//! # Design
//! - Posts JSON to the configured endpoint; without one, a local stub
//!   acknowledges after a short delay.
//! - States are idle, sending, sent and failed. There is no retry.

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use tilefolio_content::ContactSettings;
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::core::contact::{ContactMessage, ContactStatus};

const STUB_DELAY_MS: u32 = 600;

#[derive(Properties, PartialEq)]
pub(crate) struct ContactFormProps {
    pub settings: ContactSettings,
}

#[derive(Clone, Copy)]
enum Field {
    Name,
    Email,
    Message,
}

#[function_component(ContactForm)]
pub(crate) fn contact_form(props: &ContactFormProps) -> Html {
    let draft = use_state(ContactMessage::default);
    let status = use_state(ContactStatus::default);

    let on_field = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let Some(value) = input_value(&event) else {
                return;
            };
            let mut next = (*draft).clone();
            match field {
                Field::Name => next.name = value,
                Field::Email => next.email = value,
                Field::Message => next.message = value,
            }
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let status = status.clone();
        let endpoint = props.settings.endpoint.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if status.is_busy() {
                return;
            }
            let message = (*draft).clone();
            if !message.is_complete() {
                status.set(ContactStatus::Failed(format!(
                    "please fill in {}",
                    message.missing_fields().join(", ")
                )));
                return;
            }
            status.set(ContactStatus::Sending);
            let status = status.clone();
            let draft = draft.clone();
            let endpoint = endpoint.clone();
            yew::platform::spawn_local(async move {
                match submit(endpoint.as_deref(), &message).await {
                    Ok(()) => {
                        info!("contact message sent");
                        draft.set(ContactMessage::default());
                        status.set(ContactStatus::Sent);
                    }
                    Err(reason) => {
                        warn!(%reason, "contact message failed");
                        status.set(ContactStatus::Failed(reason));
                    }
                }
            });
        })
    };

    html! {
        <form class="contact-form" {onsubmit} novalidate=true>
            <label class="contact-form__field">
                <span>{"Name"}</span>
                <input
                    type="text"
                    name="name"
                    required=true
                    value={draft.name.clone()}
                    oninput={on_field(Field::Name)}
                />
            </label>
            <label class="contact-form__field">
                <span>{"Email"}</span>
                <input
                    type="email"
                    name="email"
                    required=true
                    value={draft.email.clone()}
                    oninput={on_field(Field::Email)}
                />
            </label>
            <label class="contact-form__field">
                <span>{"Message"}</span>
                <textarea
                    name="message"
                    rows="5"
                    required=true
                    value={draft.message.clone()}
                    oninput={on_field(Field::Message)}
                />
            </label>
            <button type="submit" class="contact-form__submit" disabled={status.is_busy()}>
                {"Send"}
            </button>
            {for status.message().map(|text| html! {
                <p class="contact-form__status" role="status">{text}</p>
            })}
        </form>
    }
}

async fn submit(endpoint: Option<&str>, message: &ContactMessage) -> Result<(), String> {
    let Some(endpoint) = endpoint else {
        TimeoutFuture::new(STUB_DELAY_MS).await;
        return Ok(());
    };
    let response = Request::post(endpoint)
        .json(message)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("server responded with {}", response.status()))
    }
}

fn input_value(event: &InputEvent) -> Option<String> {
    let target = event.target()?;
    target
        .dyn_ref::<HtmlInputElement>()
        .map(HtmlInputElement::value)
        .or_else(|| target.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value))
}
