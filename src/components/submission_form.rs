use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::models::course::Challenge;
use crate::models::progress::ChallengeSubmission;
use crate::models::submission_gate::{GateBlock, SubmissionGate};

#[derive(Properties, PartialEq)]
pub struct SubmissionFormProps {
    pub challenge: Challenge,
    #[prop_or_default]
    pub prior: Option<ChallengeSubmission>,
    pub on_submit: Callback<String>,
}

#[function_component(SubmissionForm)]
pub fn submission_form(props: &SubmissionFormProps) -> Html {
    let content = use_state(String::new);
    let gate = SubmissionGate::for_challenge(&props.challenge);
    let verdict = gate.check(props.prior.as_ref(), &content);

    // A finished submission leaves nothing to edit.
    if let Err(GateBlock::AlreadySubmitted(status)) = &verdict {
        return html! {
            <p class="submission-closed">
                {format!("{} Your submission is {}.", status.icon(), status.label().to_lowercase())}
            </p>
        };
    }

    let oninput = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            content.set(area.value());
        })
    };

    let onsubmit = {
        let content = content.clone();
        let on_submit = props.on_submit.clone();
        let allowed = verdict.is_ok();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if allowed {
                on_submit.emit((*content).clone());
                content.set(String::new());
            }
        })
    };

    let counter = match gate.max_length {
        Some(max) => format!("{} / {}", content.chars().count(), max),
        None => format!("{}", content.chars().count()),
    };

    html! {
        <form class="submission-form" {onsubmit}>
            {
                if props.prior.is_some() {
                    html! { <p class="submission-revise">{"✏️ Revise and resubmit using your mentor's feedback."}</p> }
                } else {
                    html! {}
                }
            }
            <label>{props.challenge.submission_format.label()}</label>
            <textarea
                rows="8"
                placeholder={props.challenge.submission_format.placeholder()}
                value={(*content).clone()}
                {oninput}
            />
            <div class="submission-footer">
                <span class="submission-counter">{counter}</span>
                {
                    match &verdict {
                        Err(block @ GateBlock::TooLong { .. }) => html! {
                            <span class="submission-block">{block.to_string()}</span>
                        },
                        _ => html! {},
                    }
                }
                <button type="submit" disabled={verdict.is_err()}>
                    {format!("Submit for {} shards", props.challenge.reward_shards)}
                </button>
            </div>
        </form>
    }
}
