use chrono::Utc;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::flame_course;
use crate::components::status_badge::StatusBadge;
use crate::components::submission_form::SubmissionForm;
use crate::components::toast::use_toaster;
use crate::config;
use crate::models::course::{ScrollId, Section, SectionKind};
use crate::models::progress::{ChallengeSubmission, SubmissionStatus};
use crate::pages::not_found::NotFound;
use crate::state::{ProgressAction, ProgressContext};
use crate::Route;

fn render_section(section: &Section) -> Html {
    let body = match &section.kind {
        SectionKind::Code { language } => html! {
            <pre class={format!("code-block language-{}", language)}><code>{&section.body}</code></pre>
        },
        SectionKind::Ritual => html! {
            <blockquote class="ritual">{&section.body}</blockquote>
        },
        SectionKind::Text | SectionKind::Interactive => html! {
            <p>{&section.body}</p>
        },
    };

    html! {
        <article class="scroll-section" key={section.id.clone()}>
            <span class="section-badge">{section.kind.badge()}</span>
            <h3>{&section.title}</h3>
            {body}
        </article>
    }
}

fn render_submission(submission: &ChallengeSubmission) -> Html {
    html! {
        <li class="submission-entry" key={submission.id.clone()}>
            <div class="submission-meta">
                <StatusBadge status={submission.status} />
                <span class="submission-date">{submission.submitted_at.format("%B %d, %Y %H:%M").to_string()}</span>
            </div>
            <pre class="submission-content">{&submission.content}</pre>
            {
                if let Some(feedback) = &submission.feedback {
                    html! { <p class="submission-feedback">{format!("Mentor: {}", feedback)}</p> }
                } else {
                    html! {}
                }
            }
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct ReviewToolsProps {
    submission_id: AttrValue,
}

/// Mentor controls for settling a pending submission by hand.
#[function_component(ReviewTools)]
fn review_tools(props: &ReviewToolsProps) -> Html {
    let progress = use_context::<ProgressContext>();
    let feedback = use_state(String::new);

    let on_feedback = {
        let feedback = feedback.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            feedback.set(input.value());
        })
    };

    let verdict_button = |verdict: SubmissionStatus, label: &'static str| {
        let progress = progress.clone();
        let feedback = feedback.clone();
        let submission_id = props.submission_id.to_string();
        let onclick = Callback::from(move |_: MouseEvent| {
            if let Some(progress) = progress.as_ref() {
                progress.dispatch(ProgressAction::Review {
                    submission_id: submission_id.clone(),
                    verdict,
                    feedback: Some((*feedback).clone()),
                });
                feedback.set(String::new());
            }
        });
        html! { <button {onclick}>{label}</button> }
    };

    html! {
        <div class="review-tools">
            <h4>{"Mentor review"}</h4>
            <input type="text" placeholder="Feedback for the student" value={(*feedback).clone()} oninput={on_feedback} />
            <div class="review-buttons">
                {verdict_button(SubmissionStatus::Approved, "Approve")}
                {verdict_button(SubmissionStatus::NeedsRevision, "Request revision")}
                {verdict_button(SubmissionStatus::Rejected, "Reject")}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollPageProps {
    pub id: ScrollId,
}

#[function_component(ScrollPage)]
pub fn scroll_page(props: &ScrollPageProps) -> Html {
    let course = use_memo(|_| flame_course(), ());
    let progress = use_context::<ProgressContext>();
    let toaster = use_toaster();

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |id: &ScrollId| {
                if let Some(progress) = progress {
                    progress.dispatch(ProgressAction::OpenScroll(*id));
                }
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            props.id,
        );
    }

    let Some(scroll) = course.scroll(props.id) else {
        return html! { <NotFound /> };
    };
    let Some(progress) = progress else {
        log::error!("Scroll page rendered without progress context");
        return html! {};
    };

    if !progress.is_unlocked(&course, scroll.id) {
        return html! {
            <div class="scroll-page locked">
                <h1>{format!("🔒 Scroll {}: {}", scroll.number, scroll.title)}</h1>
                <p>{"Finish the previous scroll's challenge to unlock this one."}</p>
                <Link<Route> to={Route::Course} classes="forward-link">{"Back to the course"}</Link<Route>>
            </div>
        };
    }

    let challenge = &scroll.challenge;
    let history: Vec<ChallengeSubmission> = progress.submissions_for(&challenge.id).cloned().collect();
    let latest = history.last().cloned();

    let on_submit = {
        let progress = progress.clone();
        let course = course.clone();
        let scroll_id = scroll.id;
        Callback::from(move |content: String| {
            // The reducer applies the action later, so judge it against the state we have now.
            if let Err(e) = progress.check_submission(&course, scroll_id, &content) {
                toaster.error(e.to_string());
                return;
            }
            progress.dispatch(ProgressAction::Submit {
                scroll_id,
                content,
                at: Utc::now(),
            });
            toaster.success("Submitted! A mentor will review it soon.");
        })
    };

    let pending = latest
        .as_ref()
        .filter(|submission| submission.status == SubmissionStatus::Pending);

    html! {
        <div class="scroll-page">
            <style>
                {r#"
                    .scroll-page { max-width: 820px; margin: 0 auto; padding: 6rem 1.5rem 3rem; color: #fff; }
                    .scroll-section { margin-bottom: 2rem; }
                    .section-badge { font-size: 0.8rem; color: #F4A261; }
                    .code-block { background: #111; padding: 1rem; border-radius: 8px; overflow-x: auto; }
                    .ritual { border-left: 3px solid #E76F51; padding-left: 1rem; color: #F6C177; font-style: italic; }
                    .challenge-card { background: rgba(30, 30, 30, 0.7); border: 1px solid rgba(244, 162, 97, 0.3); border-radius: 16px; padding: 2rem; }
                    .submission-form textarea { width: 100%; background: rgba(0, 0, 0, 0.3); color: #fff; border-radius: 8px; padding: 0.8rem; }
                    .submission-footer { display: flex; justify-content: space-between; align-items: center; gap: 1rem; margin-top: 0.5rem; }
                    .submission-block { color: #E63946; }
                    .status-badge { padding: 0.15rem 0.6rem; border-radius: 999px; font-size: 0.85rem; }
                    .submission-history { list-style: none; padding: 0; }
                    .submission-entry { border-top: 1px solid rgba(255, 255, 255, 0.08); padding: 1rem 0; }
                    .review-tools { margin-top: 1.5rem; padding: 1rem; border: 1px dashed #7EB2FF; border-radius: 8px; }
                "#}
            </style>
            <Link<Route> to={Route::Course} classes="back-link">{"← All scrolls"}</Link<Route>>
            <h1>{format!("Scroll {}: {}", scroll.number, scroll.title)}</h1>
            <p class="scroll-summary">{&scroll.summary}</p>

            { for scroll.sections.iter().map(render_section) }

            <section class="challenge-card">
                <h2>{format!("🏆 {}", challenge.title)}</h2>
                <p>{&challenge.prompt}</p>
                <p class="challenge-reward">{format!("Reward: {} FlameShards", challenge.reward_shards)}</p>
                <h4>{"Include"}</h4>
                <ul class="challenge-fields">
                    { for challenge.required_fields.iter().map(|field| html! { <li>{field}</li> }) }
                </ul>

                <SubmissionForm key={challenge.id.clone()} challenge={challenge.clone()} prior={latest.clone()} on_submit={on_submit} />

                {
                    match pending {
                        Some(submission) if config::review_tools_enabled() => html! {
                            <ReviewTools submission_id={submission.id.clone()} />
                        },
                        _ => html! {},
                    }
                }

                {
                    if history.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <>
                                <h4>{"Your submissions"}</h4>
                                <ul class="submission-history">
                                    { for history.iter().rev().map(render_submission) }
                                </ul>
                            </>
                        }
                    }
                }
            </section>

            {
                if let Some(next) = course.next_scroll(scroll.id) {
                    if progress.is_completed(scroll.id) {
                        html! {
                            <Link<Route> to={Route::Scroll { id: next.id }} classes="forward-link">
                                {format!("Continue to Scroll {} →", next.number)}
                            </Link<Route>>
                        }
                    } else {
                        html! {}
                    }
                } else if progress.is_completed(scroll.id) {
                    html! {
                        <Link<Route> to={Route::Certificate} classes="forward-link">{"🎓 Claim your certificate"}</Link<Route>>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
