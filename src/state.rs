use std::rc::Rc;

use chrono::{DateTime, Utc};
use yew::prelude::*;

use crate::catalog::flame_course;
use crate::models::course::ScrollId;
use crate::models::progress::{StudentProgress, SubmissionStatus};
use crate::session::Session;

pub type ProgressContext = UseReducerHandle<StudentProgress>;
pub type SessionContext = UseStateHandle<Session>;

pub enum ProgressAction {
    OpenScroll(ScrollId),
    Submit {
        scroll_id: ScrollId,
        content: String,
        at: DateTime<Utc>,
    },
    Review {
        submission_id: String,
        verdict: SubmissionStatus,
        feedback: Option<String>,
    },
}

impl Reducible for StudentProgress {
    type Action = ProgressAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let course = flame_course();
        let mut next = (*self).clone();

        let changed = match action {
            ProgressAction::OpenScroll(scroll_id) => {
                next.current_scroll != scroll_id && next.open_scroll(&course, scroll_id)
            }
            ProgressAction::Submit { scroll_id, content, at } => {
                match next.check_submission(&course, scroll_id, &content) {
                    Err(e) => {
                        log::warn!("Submission rejected: {}", e);
                        false
                    }
                    Ok(()) => match course.scroll(scroll_id) {
                        Some(scroll) => match next.submit(scroll_id, &scroll.challenge, &content, at) {
                            Ok(submission) => {
                                log::info!("Submitted {} for {}", submission.id, submission.challenge_id);
                                true
                            }
                            Err(block) => {
                                log::warn!("Submission blocked: {}", block);
                                false
                            }
                        },
                        None => false,
                    },
                }
            }
            ProgressAction::Review { submission_id, verdict, feedback } => {
                match next.review(&course, &submission_id, verdict, feedback) {
                    Ok(()) => {
                        log::info!("Reviewed {} as {}", submission_id, verdict.label());
                        true
                    }
                    Err(e) => {
                        log::warn!("Review rejected: {}", e);
                        false
                    }
                }
            }
        };

        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Rc<StudentProgress> {
        Rc::new(StudentProgress::new(&flame_course()))
    }

    fn submit(state: Rc<StudentProgress>, scroll_id: ScrollId, content: &str) -> Rc<StudentProgress> {
        state.reduce(ProgressAction::Submit {
            scroll_id,
            content: content.to_string(),
            at: Utc::now(),
        })
    }

    #[test]
    fn blocked_actions_keep_the_same_state() {
        let state = start();

        let after = submit(state.clone(), 2, "skipping ahead");
        assert!(Rc::ptr_eq(&state, &after));

        let after = submit(state.clone(), 1, "   ");
        assert!(Rc::ptr_eq(&state, &after));

        let after = state.clone().reduce(ProgressAction::OpenScroll(3));
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn state_changes_exactly_when_the_pre_check_passes() {
        let course = flame_course();
        let state = start();

        for (scroll_id, content) in [(2, "skipping ahead"), (1, "   "), (999, "lost"), (1, "my intention")] {
            let accepted = state.check_submission(&course, scroll_id, content).is_ok();
            let after = submit(state.clone(), scroll_id, content);
            assert_eq!(accepted, !Rc::ptr_eq(&state, &after), "scroll {scroll_id}: {content:?}");
        }
    }

    #[test]
    fn submit_then_approve_advances() {
        let state = submit(start(), 1, "my intention");
        assert_eq!(state.submissions.len(), 1);

        let id = state.submissions[0].id.clone();
        let state = state.reduce(ProgressAction::Review {
            submission_id: id,
            verdict: SubmissionStatus::Approved,
            feedback: None,
        });

        assert!(state.is_completed(1));
        assert_eq!(state.current_scroll, 2);
        assert_eq!(state.total_shards, 100);
        assert_eq!(state.level().name, "Ember");

        let state = state.reduce(ProgressAction::OpenScroll(1));
        assert_eq!(state.current_scroll, 1);
    }
}
