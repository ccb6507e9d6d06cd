use chrono::Utc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::toast::use_toaster;
use crate::models::lead::{capture_lead, LeadError, LeadForm, LeadRecord};
use crate::session::Session;
use crate::state::SessionContext;
use crate::storage::LeadStoreHandle;

#[derive(Properties, PartialEq)]
pub struct LeadCaptureFormProps {
    #[prop_or(AttrValue::from("Claim your seat"))]
    pub heading: AttrValue,
    #[prop_or(AttrValue::from("Reserve my spot"))]
    pub cta_label: AttrValue,
    #[prop_or_default]
    pub on_captured: Callback<LeadRecord>,
}

fn input_setter(field: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        field.set(input.value());
    })
}

#[function_component(LeadCaptureForm)]
pub fn lead_capture_form(props: &LeadCaptureFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let touched = use_state(|| false);
    let store = use_context::<LeadStoreHandle>();
    let session = use_context::<SessionContext>();
    let toaster = use_toaster();

    let form = LeadForm {
        name: (*name).clone(),
        email: (*email).clone(),
        phone: (*phone).clone(),
    };
    let validation = form.validate();

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let touched = touched.clone();
        let form = form.clone();
        let on_captured = props.on_captured.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            touched.set(true);

            let Some(store) = store.as_ref() else {
                log::error!("Lead form rendered without a lead store");
                toaster.error("Sign-up is unavailable right now.");
                return;
            };

            match capture_lead(&*store.0, &form, Utc::now()) {
                Ok(record) => {
                    toaster.success(format!("Welcome, {}! Your seat is reserved.", record.name));
                    if let Some(session) = session.as_ref() {
                        session.set(Session {
                            student_name: Some(record.name.clone()),
                        });
                    }
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    touched.set(false);
                    on_captured.emit(record);
                }
                Err(LeadError::Storage(e)) => {
                    log::error!("Failed to store lead: {}", e);
                    toaster.error("We couldn't save your details. Please try again.");
                }
                Err(e) => {
                    toaster.error(e.to_string());
                }
            }
        })
    };

    let show_hint = *touched || !form.name.is_empty() || !form.email.is_empty();

    html! {
        <form class="lead-form" {onsubmit}>
            <style>
                {r#"
                    .lead-form {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(244, 162, 97, 0.15);
                        border-radius: 16px;
                        padding: 2.5rem;
                        max-width: 480px;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        backdrop-filter: blur(10px);
                    }
                    .lead-form h3 {
                        margin: 0 0 0.5rem;
                        color: #fff;
                        text-align: center;
                    }
                    .lead-form input {
                        padding: 0.8rem 1rem;
                        border-radius: 8px;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: rgba(0, 0, 0, 0.3);
                        color: #fff;
                        font-size: 1rem;
                    }
                    .lead-form button {
                        padding: 0.9rem;
                        border: none;
                        border-radius: 8px;
                        background: linear-gradient(45deg, #E76F51, #F4A261);
                        color: #fff;
                        font-weight: 700;
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .lead-form button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .lead-form-hint {
                        color: #F4A261;
                        font-size: 0.85rem;
                        text-align: center;
                    }
                "#}
            </style>
            <h3>{props.heading.clone()}</h3>
            <input type="text" placeholder="Your name" value={(*name).clone()} oninput={input_setter(name.clone())} />
            <input type="email" placeholder="Email" value={(*email).clone()} oninput={input_setter(email.clone())} />
            <input type="tel" placeholder="Phone (optional)" value={(*phone).clone()} oninput={input_setter(phone.clone())} />
            <button type="submit" disabled={!form.is_valid()}>{props.cta_label.clone()}</button>
            {
                match validation {
                    Err(e) if show_hint => html! { <p class="lead-form-hint">{e.to_string()}</p> },
                    _ => html! {},
                }
            }
        </form>
    }
}
