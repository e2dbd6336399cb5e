use crate::models::domain::{Question, QuizDefinition};

/// Pure scoring over a definition and an index-aligned answer sequence.
/// Comparison is exact string equality: no case folding, no trimming beyond
/// what was applied when the answer was recorded.
pub struct GradingService;

impl GradingService {
    /// Number of answers matching their question's correct answer. A `None`
    /// slot can never match. Slots beyond the question list are ignored.
    pub fn score(quiz: &QuizDefinition, answers: &[Option<String>]) -> u32 {
        quiz.questions
            .iter()
            .enumerate()
            .filter(|(index, question)| {
                let answer = answers.get(*index).and_then(Option::as_deref);
                Self::is_correct(question, answer)
            })
            .count() as u32
    }

    pub fn is_correct(question: &Question, answer: Option<&str>) -> bool {
        answer == Some(question.correct_answer())
    }
}
