use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::course::{Challenge, Course, ScrollId};
use crate::models::flameshard::{level_for_shards, FlameShardLevel};
use crate::models::submission_gate::{GateBlock, SubmissionGate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    NeedsRevision,
    Rejected,
}

impl SubmissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "Pending review",
            SubmissionStatus::Approved => "Approved",
            SubmissionStatus::NeedsRevision => "Needs revision",
            SubmissionStatus::Rejected => "Rejected",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "⏳",
            SubmissionStatus::Approved => "✅",
            SubmissionStatus::NeedsRevision => "✏️",
            SubmissionStatus::Rejected => "❌",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "#F4A261",
            SubmissionStatus::Approved => "#2A9D8F",
            SubmissionStatus::NeedsRevision => "#7EB2FF",
            SubmissionStatus::Rejected => "#E63946",
        }
    }

    pub fn allows_resubmission(&self) -> bool {
        matches!(self, SubmissionStatus::NeedsRevision)
    }

    pub fn is_final(&self) -> bool {
        !matches!(self, SubmissionStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeSubmission {
    pub id: String,
    pub challenge_id: String,
    pub scroll_id: ScrollId,
    pub content: String,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("no submission with id {0}")]
    UnknownSubmission(String),
    #[error("submission {id} was already reviewed ({})", .status.label())]
    NotPending { id: String, status: SubmissionStatus },
    #[error("a review must approve, reject or request a revision")]
    InvalidVerdict,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Scroll {0} is still locked")]
    LockedScroll(ScrollId),
    #[error("There is no scroll {0}")]
    UnknownScroll(ScrollId),
    #[error(transparent)]
    Blocked(#[from] GateBlock),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProgress {
    pub current_scroll: ScrollId,
    pub completed_scrolls: BTreeSet<ScrollId>,
    pub total_shards: u32,
    pub submissions: Vec<ChallengeSubmission>,
}

impl StudentProgress {
    pub fn new(course: &Course) -> Self {
        Self {
            current_scroll: course.first_scroll_id().unwrap_or_default(),
            completed_scrolls: BTreeSet::new(),
            total_shards: 0,
            submissions: Vec::new(),
        }
    }

    pub fn level(&self) -> &'static FlameShardLevel {
        level_for_shards(self.total_shards)
    }

    pub fn is_completed(&self, scroll_id: ScrollId) -> bool {
        self.completed_scrolls.contains(&scroll_id)
    }

    /// The first scroll is always open; later ones need their predecessor
    /// completed.
    pub fn is_unlocked(&self, course: &Course, scroll_id: ScrollId) -> bool {
        if course.scroll(scroll_id).is_none() {
            return false;
        }
        match course.previous_scroll(scroll_id) {
            Some(previous) => self.is_completed(previous.id),
            None => true,
        }
    }

    pub fn open_scroll(&mut self, course: &Course, scroll_id: ScrollId) -> bool {
        if self.is_unlocked(course, scroll_id) {
            self.current_scroll = scroll_id;
            true
        } else {
            false
        }
    }

    /// Percentage of scrolls completed, rounded down.
    pub fn completion_percent(&self, course: &Course) -> u8 {
        let total = course.scrolls.len();
        if total == 0 {
            return 0;
        }
        let done = course
            .scrolls
            .iter()
            .filter(|scroll| self.is_completed(scroll.id))
            .count();
        ((done * 100) / total) as u8
    }

    pub fn is_course_complete(&self, course: &Course) -> bool {
        !course.scrolls.is_empty()
            && course
                .scrolls
                .iter()
                .all(|scroll| self.is_completed(scroll.id))
    }

    pub fn latest_submission(&self, challenge_id: &str) -> Option<&ChallengeSubmission> {
        self.submissions
            .iter()
            .rev()
            .find(|submission| submission.challenge_id == challenge_id)
    }

    pub fn submissions_for<'a>(
        &'a self,
        challenge_id: &'a str,
    ) -> impl Iterator<Item = &'a ChallengeSubmission> + 'a {
        self.submissions
            .iter()
            .filter(move |submission| submission.challenge_id == challenge_id)
    }

    pub fn pending_count(&self) -> usize {
        self.submissions
            .iter()
            .filter(|submission| submission.status == SubmissionStatus::Pending)
            .count()
    }

    /// Whether `submit` would accept `content` for the scroll right now.
    pub fn check_submission(
        &self,
        course: &Course,
        scroll_id: ScrollId,
        content: &str,
    ) -> Result<(), SubmitError> {
        let scroll = course
            .scroll(scroll_id)
            .ok_or(SubmitError::UnknownScroll(scroll_id))?;
        if !self.is_unlocked(course, scroll_id) {
            return Err(SubmitError::LockedScroll(scroll_id));
        }
        SubmissionGate::for_challenge(&scroll.challenge)
            .check(self.latest_submission(&scroll.challenge.id), content)?;
        Ok(())
    }

    pub fn submit(
        &mut self,
        scroll_id: ScrollId,
        challenge: &Challenge,
        content: &str,
        at: DateTime<Utc>,
    ) -> Result<&ChallengeSubmission, GateBlock> {
        SubmissionGate::for_challenge(challenge)
            .check(self.latest_submission(&challenge.id), content)?;

        self.submissions.push(ChallengeSubmission {
            id: format!("sub-{}", self.submissions.len() + 1),
            challenge_id: challenge.id.clone(),
            scroll_id,
            content: content.trim().to_string(),
            submitted_at: at,
            status: SubmissionStatus::Pending,
            feedback: None,
        });

        Ok(&self.submissions[self.submissions.len() - 1])
    }

    /// Settles a pending submission. Approval completes its scroll, grants
    /// the challenge reward once and moves on to the next scroll.
    pub fn review(
        &mut self,
        course: &Course,
        submission_id: &str,
        verdict: SubmissionStatus,
        feedback: Option<String>,
    ) -> Result<(), ReviewError> {
        if verdict == SubmissionStatus::Pending {
            return Err(ReviewError::InvalidVerdict);
        }

        let submission = self
            .submissions
            .iter_mut()
            .find(|submission| submission.id == submission_id)
            .ok_or_else(|| ReviewError::UnknownSubmission(submission_id.to_string()))?;

        if submission.status.is_final() {
            return Err(ReviewError::NotPending {
                id: submission.id.clone(),
                status: submission.status,
            });
        }

        submission.status = verdict;
        submission.feedback = feedback.filter(|text| !text.trim().is_empty());

        if verdict == SubmissionStatus::Approved {
            let scroll_id = submission.scroll_id;
            if let Some(scroll) = course.scroll(scroll_id) {
                if self.completed_scrolls.insert(scroll_id) {
                    self.total_shards = self
                        .total_shards
                        .saturating_add(scroll.challenge.reward_shards);
                }
                if let Some(next) = course.next_scroll(scroll_id) {
                    self.current_scroll = next.id;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::flame_course;

    fn submit_first(progress: &mut StudentProgress, course: &Course, content: &str) -> String {
        let scroll = &course.scrolls[0];
        progress
            .submit(scroll.id, &scroll.challenge, content, Utc::now())
            .map(|submission| submission.id.clone())
            .unwrap()
    }

    #[test]
    fn fresh_progress_starts_at_first_scroll() {
        let course = flame_course();
        let progress = StudentProgress::new(&course);
        assert_eq!(progress.current_scroll, course.scrolls[0].id);
        assert_eq!(progress.total_shards, 0);
        assert_eq!(progress.level().name, "Spark");
        assert_eq!(progress.completion_percent(&course), 0);
    }

    #[test]
    fn later_scrolls_are_locked_until_predecessor_completes() {
        let course = flame_course();
        let mut progress = StudentProgress::new(&course);
        let second = course.scrolls[1].id;

        assert!(progress.is_unlocked(&course, course.scrolls[0].id));
        assert!(!progress.is_unlocked(&course, second));
        assert!(!progress.open_scroll(&course, second));
        assert!(!progress.is_unlocked(&course, 999));

        let id = submit_first(&mut progress, &course, "done");
        progress
            .review(&course, &id, SubmissionStatus::Approved, None)
            .unwrap();

        assert!(progress.is_unlocked(&course, second));
        assert_eq!(progress.current_scroll, second);
    }

    #[test]
    fn approval_awards_reward_once() {
        let course = flame_course();
        let reward = course.scrolls[0].challenge.reward_shards;
        let mut progress = StudentProgress::new(&course);

        let id = submit_first(&mut progress, &course, "my ritual log");
        assert_eq!(progress.pending_count(), 1);
        progress
            .review(&course, &id, SubmissionStatus::Approved, Some("Great".into()))
            .unwrap();

        assert_eq!(progress.total_shards, reward);
        assert!(progress.is_completed(course.scrolls[0].id));

        let again = progress.review(&course, &id, SubmissionStatus::Approved, None);
        assert_eq!(
            again,
            Err(ReviewError::NotPending {
                id: id.clone(),
                status: SubmissionStatus::Approved
            })
        );
        assert_eq!(progress.total_shards, reward);
    }

    #[test]
    fn revision_cycle_allows_a_second_submission() {
        let course = flame_course();
        let scroll = &course.scrolls[0];
        let mut progress = StudentProgress::new(&course);

        let first = submit_first(&mut progress, &course, "draft");
        assert!(progress
            .submit(scroll.id, &scroll.challenge, "too soon", Utc::now())
            .is_err());

        progress
            .review(
                &course,
                &first,
                SubmissionStatus::NeedsRevision,
                Some("Add your reflection".into()),
            )
            .unwrap();

        let second = submit_first(&mut progress, &course, "  final draft  ");
        assert_ne!(first, second);
        assert_eq!(progress.submissions_for(&scroll.challenge.id).count(), 2);

        let latest = progress.latest_submission(&scroll.challenge.id).unwrap();
        assert_eq!(latest.id, second);
        assert_eq!(latest.content, "final draft");
        assert_eq!(latest.status, SubmissionStatus::Pending);
    }

    #[test]
    fn rejected_submission_is_final() {
        let course = flame_course();
        let scroll = &course.scrolls[0];
        let mut progress = StudentProgress::new(&course);

        let id = submit_first(&mut progress, &course, "attempt");
        progress
            .review(&course, &id, SubmissionStatus::Rejected, None)
            .unwrap();

        let blocked = progress.submit(scroll.id, &scroll.challenge, "retry", Utc::now());
        assert_eq!(
            blocked.map(|s| s.id.clone()),
            Err(GateBlock::AlreadySubmitted(SubmissionStatus::Rejected))
        );
        assert_eq!(progress.total_shards, 0);
    }

    #[test]
    fn check_submission_matches_what_submit_accepts() {
        let course = flame_course();
        let mut progress = StudentProgress::new(&course);
        let first = course.scrolls[0].id;
        let second = course.scrolls[1].id;

        assert_eq!(
            progress.check_submission(&course, second, "skipping ahead"),
            Err(SubmitError::LockedScroll(second))
        );
        assert_eq!(
            progress.check_submission(&course, 999, "anything"),
            Err(SubmitError::UnknownScroll(999))
        );
        assert_eq!(
            progress.check_submission(&course, first, "   "),
            Err(SubmitError::Blocked(GateBlock::EmptyContent))
        );
        assert_eq!(progress.check_submission(&course, first, "my intention"), Ok(()));

        submit_first(&mut progress, &course, "my intention");
        assert_eq!(
            progress.check_submission(&course, first, "again"),
            Err(SubmitError::Blocked(GateBlock::AlreadySubmitted(SubmissionStatus::Pending)))
        );
    }

    #[test]
    fn review_rejects_bad_input() {
        let course = flame_course();
        let mut progress = StudentProgress::new(&course);
        let id = submit_first(&mut progress, &course, "attempt");

        assert_eq!(
            progress.review(&course, &id, SubmissionStatus::Pending, None),
            Err(ReviewError::InvalidVerdict)
        );
        assert_eq!(
            progress.review(&course, "sub-42", SubmissionStatus::Approved, None),
            Err(ReviewError::UnknownSubmission("sub-42".to_string()))
        );
    }

    #[test]
    fn blank_feedback_is_dropped() {
        let course = flame_course();
        let mut progress = StudentProgress::new(&course);
        let id = submit_first(&mut progress, &course, "attempt");
        progress
            .review(&course, &id, SubmissionStatus::NeedsRevision, Some("  ".into()))
            .unwrap();
        assert_eq!(progress.submissions[0].feedback, None);
    }

    #[test]
    fn completing_every_scroll_finishes_the_course() {
        let course = flame_course();
        let mut progress = StudentProgress::new(&course);

        for scroll in &course.scrolls {
            let id = progress
                .submit(scroll.id, &scroll.challenge, "done", Utc::now())
                .map(|s| s.id.clone())
                .unwrap();
            progress
                .review(&course, &id, SubmissionStatus::Approved, None)
                .unwrap();
        }

        assert!(progress.is_course_complete(&course));
        assert_eq!(progress.completion_percent(&course), 100);
        assert_eq!(progress.total_shards, course.total_shards());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&SubmissionStatus::NeedsRevision).unwrap();
        assert_eq!(json, "\"needs_revision\"");
    }
}
