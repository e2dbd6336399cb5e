use crate::models::domain::room::QuizDefinition;
use crate::models::domain::submission::Submission;
use crate::services::grading::GradingService;

/// Score cutoff at which a submission counts as approved (`>=`, not `>`).
pub const APPROVAL_THRESHOLD: f64 = 0.6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuestionStats {
    pub correct_count: u32,
    pub incorrect_count: u32,
}

/// Statistics over every submission recorded for one room. Derived on
/// demand from the definition plus the submission set, never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregateReport {
    pub submission_count: u32,
    pub approved_count: u32,
    /// `approved_count / submission_count`; `None` with zero submissions.
    pub approval_rate: Option<f64>,
    /// Mean of recorded scores; `None` with zero submissions.
    pub average_score: Option<f64>,
    /// Index-aligned with the quiz's question list.
    pub per_question: Vec<QuestionStats>,
}

impl AggregateReport {
    pub fn from_submissions(quiz: &QuizDefinition, submissions: &[Submission]) -> AggregateReport {
        let submission_count = submissions.len() as u32;
        let mut approved_count = 0u32;
        let mut score_sum = 0u64;
        let mut per_question = vec![QuestionStats::default(); quiz.question_count()];

        for submission in submissions {
            score_sum += u64::from(submission.score);
            if submission
                .score_ratio()
                .is_some_and(|ratio| ratio >= APPROVAL_THRESHOLD)
            {
                approved_count += 1;
            }

            // Answer slots beyond the current question count are ignored:
            // the definition may have been shortened after this submission
            // was recorded.
            for (index, question) in quiz.questions.iter().enumerate() {
                let answer = submission.answers.get(index).and_then(Option::as_deref);
                if GradingService::is_correct(question, answer) {
                    per_question[index].correct_count += 1;
                } else {
                    per_question[index].incorrect_count += 1;
                }
            }
        }

        let (approval_rate, average_score) = if submission_count == 0 {
            (None, None)
        } else {
            (
                Some(approved_count as f64 / submission_count as f64),
                Some(score_sum as f64 / submission_count as f64),
            )
        };

        AggregateReport {
            submission_count,
            approved_count,
            approval_rate,
            average_score,
            per_question,
        }
    }

    /// Question indices ranked hardest first (most incorrect answers).
    /// Ties keep the original question order.
    pub fn most_difficult(&self, n: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.per_question.len()).collect();
        indices.sort_by_key(|&i| std::cmp::Reverse(self.per_question[i].incorrect_count));
        indices.truncate(n);
        indices
    }

    /// Question indices ranked easiest first (most correct answers).
    pub fn easiest(&self, n: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.per_question.len()).collect();
        indices.sort_by_key(|&i| std::cmp::Reverse(self.per_question[i].correct_count));
        indices.truncate(n);
        indices
    }
}
