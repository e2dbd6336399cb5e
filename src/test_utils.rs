#[cfg(test)]
pub mod fixtures {
    use std::collections::BTreeMap;

    use chrono::Utc;

    use crate::models::domain::{Question, QuestionKind, QuizDefinition, Submission};
    use crate::session::StudentIdentity;

    pub fn student() -> StudentIdentity {
        StudentIdentity {
            id: "student-1".to_string(),
            name: "Ana Torres".to_string(),
        }
    }

    pub fn multiple_choice(text: &str, correct_key: &str) -> Question {
        let mut options = BTreeMap::new();
        for key in ["A", "B", "C", "D"] {
            options.insert(key.to_string(), format!("Option {}", key));
        }

        Question {
            text: text.to_string(),
            feedback_correct: "Correct".to_string(),
            feedback_incorrect: "Incorrect".to_string(),
            kind: QuestionKind::MultipleChoice {
                options,
                correct_key: correct_key.to_string(),
            },
        }
    }

    pub fn short_answer(text: &str, correct_text: &str) -> Question {
        Question {
            text: text.to_string(),
            feedback_correct: "Correct".to_string(),
            feedback_incorrect: "Incorrect".to_string(),
            kind: QuestionKind::ShortAnswer {
                correct_text: correct_text.to_string(),
            },
        }
    }

    /// Two multiple-choice questions expecting answers ["B", "A"].
    pub fn two_question_quiz() -> QuizDefinition {
        QuizDefinition {
            title: "Historia".to_string(),
            questions: vec![
                multiple_choice("First question", "B"),
                multiple_choice("Second question", "A"),
            ],
            time_limit_minutes: None,
        }
    }

    pub fn short_answer_quiz(correct_text: &str) -> QuizDefinition {
        QuizDefinition {
            title: "Geografia".to_string(),
            questions: vec![short_answer("Capital of France?", correct_text)],
            time_limit_minutes: None,
        }
    }

    pub fn submission(
        student_id: &str,
        score: u32,
        total: u32,
        answers: Vec<Option<String>>,
    ) -> Submission {
        Submission {
            id: format!("sub-{}", student_id),
            room_id: "room-1".to_string(),
            student_id: student_id.to_string(),
            student_name: student_id.to_string(),
            score,
            total_questions: total,
            answers,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_two_question_quiz() {
        let quiz = two_question_quiz();
        assert_eq!(quiz.question_count(), 2);
        assert_eq!(quiz.questions[0].correct_answer(), "B");
        assert_eq!(quiz.questions[1].correct_answer(), "A");
    }

    #[test]
    fn test_fixtures_submission_shape() {
        let submission = submission("student-1", 1, 2, vec![Some("B".to_string()), None]);
        assert_eq!(submission.room_id, "room-1");
        assert_eq!(submission.answers.len(), 2);
    }
}
