use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::models::domain::question::{Question, QuestionDocument};

/// A room document as stored in the `salas` collection. The authoring side
/// owns this schema; the engine only reads it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoomDocument {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "materia", default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "docenteId", default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<String>,
    #[serde(rename = "codigoAcceso")]
    pub access_code: String,
    #[serde(rename = "limiteTiempo", default, skip_serializing_if = "Option::is_none")]
    pub time_limit_minutes: Option<i64>,
    #[serde(rename = "preguntas", default)]
    pub questions: Vec<QuestionDocument>,
}

/// The immutable definition a session runs against. Question order is
/// significant: it is both the display order and the answer index order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizDefinition {
    pub title: String,
    pub questions: Vec<Question>,
    pub time_limit_minutes: Option<u32>,
}

impl QuizDefinition {
    pub fn from_document(doc: RoomDocument) -> AppResult<QuizDefinition> {
        let questions = doc
            .questions
            .into_iter()
            .map(Question::from_document)
            .collect::<AppResult<Vec<_>>>()?;

        // Absent or non-positive limits both mean an untimed quiz.
        let time_limit_minutes = doc
            .time_limit_minutes
            .filter(|minutes| *minutes > 0)
            .map(|minutes| minutes as u32);

        Ok(QuizDefinition {
            title: doc.title,
            questions,
            time_limit_minutes,
        })
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn is_timed(&self) -> bool {
        self.time_limit_minutes.is_some()
    }
}
