use thiserror::Error;

use crate::models::course::Challenge;
use crate::models::progress::{ChallengeSubmission, SubmissionStatus};

/// Why the submit button is disabled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateBlock {
    #[error("This challenge was already submitted ({})", .0.label())]
    AlreadySubmitted(SubmissionStatus),
    #[error("Write something before submitting")]
    EmptyContent,
    #[error("Too long: {length} of {max} characters")]
    TooLong { length: usize, max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmissionGate {
    pub max_length: Option<usize>,
}

impl SubmissionGate {
    pub fn for_challenge(challenge: &Challenge) -> Self {
        Self {
            max_length: challenge.max_length,
        }
    }

    /// A new submission needs no prior one, or a prior one sent back for
    /// revision, plus non-blank content within the length limit.
    pub fn check(
        &self,
        prior: Option<&ChallengeSubmission>,
        content: &str,
    ) -> Result<(), GateBlock> {
        if let Some(prior) = prior {
            if !prior.status.allows_resubmission() {
                return Err(GateBlock::AlreadySubmitted(prior.status));
            }
        }

        if content.trim().is_empty() {
            return Err(GateBlock::EmptyContent);
        }

        if let Some(max) = self.max_length {
            let length = content.chars().count();
            if length > max {
                return Err(GateBlock::TooLong { length, max });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn submission(status: SubmissionStatus) -> ChallengeSubmission {
        ChallengeSubmission {
            id: "sub-1".to_string(),
            challenge_id: "challenge-1".to_string(),
            scroll_id: 1,
            content: "first try".to_string(),
            submitted_at: Utc::now(),
            status,
            feedback: None,
        }
    }

    #[test]
    fn first_submission_is_allowed() {
        let gate = SubmissionGate::default();
        assert_eq!(gate.check(None, "my answer"), Ok(()));
    }

    #[test]
    fn empty_content_is_never_accepted() {
        let gate = SubmissionGate::default();
        assert_eq!(gate.check(None, ""), Err(GateBlock::EmptyContent));
        assert_eq!(gate.check(None, "  \n\t"), Err(GateBlock::EmptyContent));

        let revision = submission(SubmissionStatus::NeedsRevision);
        assert_eq!(
            gate.check(Some(&revision), "   "),
            Err(GateBlock::EmptyContent)
        );
    }

    #[test]
    fn only_needs_revision_allows_resubmission() {
        let gate = SubmissionGate::default();

        let revision = submission(SubmissionStatus::NeedsRevision);
        assert_eq!(gate.check(Some(&revision), "second try"), Ok(()));

        for status in [
            SubmissionStatus::Pending,
            SubmissionStatus::Approved,
            SubmissionStatus::Rejected,
        ] {
            let prior = submission(status);
            assert_eq!(
                gate.check(Some(&prior), "second try"),
                Err(GateBlock::AlreadySubmitted(status))
            );
        }
    }

    #[test]
    fn max_length_counts_characters() {
        let gate = SubmissionGate {
            max_length: Some(5),
        };
        assert_eq!(gate.check(None, "🔥🔥🔥🔥🔥"), Ok(()));
        assert_eq!(
            gate.check(None, "flames"),
            Err(GateBlock::TooLong { length: 6, max: 5 })
        );
    }

    #[test]
    fn block_messages() {
        assert_eq!(
            GateBlock::AlreadySubmitted(SubmissionStatus::Approved).to_string(),
            "This challenge was already submitted (Approved)"
        );
        assert_eq!(
            GateBlock::TooLong { length: 12, max: 10 }.to_string(),
            "Too long: 12 of 10 characters"
        );
    }
}
