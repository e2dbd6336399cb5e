use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Question, QuizDefinition, Submission};
use crate::services::grading::GradingService;

/// The already-authenticated student this session belongs to, as handed over
/// by the identity collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentIdentity {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress,
    /// Graded and awaiting a durable write; a failed write leaves the
    /// session here so the record can be retried without re-grading.
    Submitting,
    Completed,
}

/// One student attempt at a room's quiz. Created only from a non-empty
/// definition; mutated only by navigation and answer entry; done once a
/// submission record has been persisted.
pub struct Session {
    quiz: QuizDefinition,
    room_id: String,
    student: StudentIdentity,
    current_index: usize,
    answers: Vec<Option<String>>,
    deadline: Option<DateTime<Utc>>,
    phase: SessionPhase,
    pending: Option<Submission>,
}

impl Session {
    /// Starts an attempt. A zero-question definition is unavailable and
    /// never exposes navigation. The deadline is fixed here, once, and never
    /// recomputed.
    pub fn start(
        quiz: QuizDefinition,
        room_id: impl Into<String>,
        student: StudentIdentity,
        now: DateTime<Utc>,
    ) -> AppResult<Session> {
        let room_id = room_id.into();
        if quiz.questions.is_empty() {
            return Err(AppError::EmptyQuiz(room_id));
        }

        let deadline = quiz
            .time_limit_minutes
            .map(|minutes| now + Duration::minutes(i64::from(minutes)));
        let answers = vec![None; quiz.questions.len()];

        Ok(Session {
            quiz,
            room_id,
            student,
            current_index: 0,
            answers,
            deadline,
            phase: SessionPhase::InProgress,
            pending: None,
        })
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_in_progress(&self) -> bool {
        self.phase == SessionPhase::InProgress
    }

    pub fn quiz(&self) -> &QuizDefinition {
        &self.quiz
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based number shown to the student.
    pub fn display_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn current_question(&self) -> &Question {
        &self.quiz.questions[self.current_index]
    }

    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.quiz.questions.len()
    }

    /// Stores the currently-entered value for the current question. `None`
    /// keeps a previously saved answer: navigating away without a new
    /// selection never erases what the student chose earlier.
    pub fn record_answer(&mut self, input: Option<&str>) {
        if self.phase != SessionPhase::InProgress {
            return;
        }
        if let Some(value) = input {
            self.answers[self.current_index] = Some(value.trim().to_string());
        }
    }

    pub fn go_next(&mut self, input: Option<&str>) {
        if self.phase != SessionPhase::InProgress {
            return;
        }
        self.record_answer(input);
        if self.current_index + 1 < self.quiz.questions.len() {
            self.current_index += 1;
        }
    }

    pub fn go_previous(&mut self, input: Option<&str>) {
        if self.phase != SessionPhase::InProgress {
            return;
        }
        self.record_answer(input);
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Records the final answer, grades the attempt, and moves to
    /// `Submitting`. The one-shot guard lives here: the manual finish action
    /// and the timer expiry both funnel through this method, and only the
    /// first caller gets a record.
    pub fn finish(
        &mut self,
        input: Option<&str>,
        now: DateTime<Utc>,
    ) -> AppResult<Submission> {
        if self.phase != SessionPhase::InProgress {
            log::warn!(
                "Rejected repeat submission for room '{}' (phase {:?})",
                self.room_id,
                self.phase
            );
            return Err(AppError::DuplicateSubmission(self.room_id.clone()));
        }

        self.record_answer(input);
        let score = GradingService::score(&self.quiz, &self.answers);

        let submission = Submission {
            id: Uuid::new_v4().to_string(),
            room_id: self.room_id.clone(),
            student_id: self.student.id.clone(),
            student_name: self.student.name.clone(),
            score,
            total_questions: self.quiz.questions.len() as u32,
            answers: self.answers.clone(),
            submitted_at: now,
        };

        self.phase = SessionPhase::Submitting;
        self.pending = Some(submission.clone());
        Ok(submission)
    }

    /// The graded record awaiting persistence, if any.
    pub fn pending_submission(&self) -> Option<&Submission> {
        self.pending.as_ref()
    }

    pub fn mark_completed(&mut self) {
        if self.phase == SessionPhase::Submitting {
            self.phase = SessionPhase::Completed;
        }
    }
}
