use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::flame_course;
use crate::components::flameshard_card::{FlameShardCard, LevelLadder};
use crate::models::course::{Course, ScrollId};
use crate::models::progress::StudentProgress;
use crate::state::{ProgressContext, SessionContext};
use crate::Route;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ScrollState {
    Completed,
    Current,
    Open,
    Locked,
}

impl ScrollState {
    fn of(progress: &StudentProgress, course: &Course, scroll_id: ScrollId) -> Self {
        if progress.is_completed(scroll_id) {
            ScrollState::Completed
        } else if !progress.is_unlocked(course, scroll_id) {
            ScrollState::Locked
        } else if progress.current_scroll == scroll_id {
            ScrollState::Current
        } else {
            ScrollState::Open
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ScrollState::Completed => "✅",
            ScrollState::Current => "🔥",
            ScrollState::Open => "📜",
            ScrollState::Locked => "🔒",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            ScrollState::Completed => "scroll-row completed",
            ScrollState::Current => "scroll-row current",
            ScrollState::Open => "scroll-row",
            ScrollState::Locked => "scroll-row locked",
        }
    }
}

#[function_component(CourseDashboard)]
pub fn course_dashboard() -> Html {
    let course = use_memo(|_| flame_course(), ());
    let session = use_context::<SessionContext>()
        .map(|session| (*session).clone())
        .unwrap_or_default();
    let progress = use_context::<ProgressContext>();
    let Some(progress) = progress else {
        log::error!("Course dashboard rendered without progress context");
        return html! {};
    };

    let completion = progress.completion_percent(&course);
    let pending = progress.pending_count();

    html! {
        <div class="course-dashboard">
            <style>
                {r#"
                    .course-dashboard { max-width: 900px; margin: 0 auto; padding: 6rem 1.5rem 3rem; color: #fff; }
                    .progress-track { height: 10px; background: rgba(255, 255, 255, 0.1); border-radius: 999px; overflow: hidden; }
                    .progress-fill { height: 100%; background: #F4A261; transition: width 0.6s ease; }
                    .scroll-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.2rem 1.5rem;
                        margin-bottom: 0.75rem;
                        border-radius: 12px;
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(255, 255, 255, 0.06);
                    }
                    .scroll-row.current { border-color: #F4A261; }
                    .scroll-row.completed { opacity: 0.8; }
                    .scroll-row.locked { opacity: 0.45; }
                    .flameshard-card { border: 2px solid; border-radius: 16px; padding: 1.5rem; margin: 1.5rem 0; background: rgba(30, 30, 30, 0.7); }
                    .flameshard-header { display: flex; justify-content: space-between; font-weight: 700; }
                "#}
            </style>
            <h1>{format!("Welcome back, {}", session.display_name())}</h1>
            {
                if !session.is_enrolled() {
                    html! {
                        <p class="enroll-reminder">
                            <Link<Route> to={Route::Home}>{"Reserve your seat"}</Link<Route>>
                            {" to put your name on the certificate."}
                        </p>
                    }
                } else {
                    html! {}
                }
            }

            <FlameShardCard shards={progress.total_shards} />

            <h2>{&course.title}</h2>
            <p>{format!("{}% complete", completion)}</p>
            <div class="progress-track">
                <div class="progress-fill" style={format!("width: {}%;", completion)}></div>
            </div>
            {
                if pending > 0 {
                    html! { <p class="pending-note">{format!("⏳ {} submission(s) waiting for review", pending)}</p> }
                } else {
                    html! {}
                }
            }

            <div class="scroll-list">
                { for course.scrolls.iter().map(|scroll| {
                    let state = ScrollState::of(&progress, &course, scroll.id);
                    html! {
                        <div class={state.class()}>
                            <div>
                                <strong>{format!("{} Scroll {}: {}", state.icon(), scroll.number, scroll.title)}</strong>
                                <div class="scroll-summary">{&scroll.summary}</div>
                            </div>
                            {
                                if state == ScrollState::Locked {
                                    html! { <span class="scroll-locked">{"Complete the previous scroll"}</span> }
                                } else {
                                    html! {
                                        <Link<Route> to={Route::Scroll { id: scroll.id }} classes="forward-link">
                                            {if state == ScrollState::Completed { "Review" } else { "Open" }}
                                        </Link<Route>>
                                    }
                                }
                            }
                        </div>
                    }
                }) }
            </div>

            <div class="certificate-link">
                <Link<Route> to={Route::Certificate} classes="forward-link">{"🎓 Certificate"}</Link<Route>>
            </div>

            <h2>{"Level ladder"}</h2>
            <LevelLadder current_shards={Some(progress.total_shards)} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::progress::SubmissionStatus;
    use chrono::Utc;

    #[test]
    fn scroll_states_follow_progress() {
        let course = flame_course();
        let mut progress = StudentProgress::new(&course);

        assert_eq!(ScrollState::of(&progress, &course, 1), ScrollState::Current);
        assert_eq!(ScrollState::of(&progress, &course, 2), ScrollState::Locked);

        let scroll = &course.scrolls[0];
        let id = progress
            .submit(scroll.id, &scroll.challenge, "done", Utc::now())
            .map(|s| s.id.clone())
            .unwrap();
        progress
            .review(&course, &id, SubmissionStatus::Approved, None)
            .unwrap();

        assert_eq!(ScrollState::of(&progress, &course, 1), ScrollState::Completed);
        assert_eq!(ScrollState::of(&progress, &course, 2), ScrollState::Current);
        assert_eq!(ScrollState::of(&progress, &course, 3), ScrollState::Locked);
    }
}
