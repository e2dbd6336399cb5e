use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    errors::{AppError, AppResult},
    models::domain::Submission,
    repositories::SubmissionRepository,
    session::{Session, SessionPhase},
};

/// Finishes sessions and persists their submission records. Grading happens
/// inside [`Session::finish`]; this service owns the durable-write half and
/// its failure semantics.
pub struct SessionService {
    submissions: Arc<dyn SubmissionRepository>,
}

impl SessionService {
    pub fn new(submissions: Arc<dyn SubmissionRepository>) -> Self {
        Self { submissions }
    }

    /// Grades and persists the session's submission. On a write failure the
    /// session stays in `Submitting` and keeps its graded record, so the UI
    /// must not claim success and [`Self::retry_submit`] can run without
    /// re-grading or double-counting.
    pub async fn submit(
        &self,
        session: &mut Session,
        input: Option<&str>,
        now: DateTime<Utc>,
    ) -> AppResult<Submission> {
        let submission = session.finish(input, now)?;
        self.persist(session, submission).await
    }

    /// Re-attempts the durable write for a session stuck in `Submitting`.
    pub async fn retry_submit(&self, session: &mut Session) -> AppResult<Submission> {
        if session.phase() != SessionPhase::Submitting {
            return Err(AppError::DuplicateSubmission(format!(
                "no pending submission for room '{}'",
                session.room_id()
            )));
        }
        let submission = session
            .pending_submission()
            .cloned()
            .ok_or_else(|| AppError::SubmissionWriteFailed("pending record lost".to_string()))?;

        self.persist(session, submission).await
    }

    async fn persist(
        &self,
        session: &mut Session,
        submission: Submission,
    ) -> AppResult<Submission> {
        match self.submissions.create(submission.clone()).await {
            Ok(stored) => {
                session.mark_completed();
                log::info!(
                    "Stored submission '{}' for room '{}' ({}/{})",
                    stored.id,
                    stored.room_id,
                    stored.score,
                    stored.total_questions
                );
                Ok(stored)
            }
            Err(err) => {
                log::error!(
                    "Failed to store submission for room '{}': {}",
                    submission.room_id,
                    err
                );
                Err(AppError::SubmissionWriteFailed(err.to_string()))
            }
        }
    }
}
