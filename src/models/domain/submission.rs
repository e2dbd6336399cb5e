use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The durable record of one completed session, written to the `resultados`
/// collection exactly once. `answers` is index-aligned with the room's
/// question list; `None` means the question was left unanswered.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Submission {
    pub id: String,
    #[serde(rename = "salaId")]
    pub room_id: String,
    #[serde(rename = "estudianteId")]
    pub student_id: String,
    #[serde(rename = "nombreEstudiante")]
    pub student_name: String,
    #[serde(rename = "calificacion")]
    pub score: u32,
    #[serde(rename = "totalPreguntas")]
    pub total_questions: u32,
    #[serde(rename = "respuestas")]
    pub answers: Vec<Option<String>>,
    #[serde(rename = "fecha")]
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// `score / total_questions`, or `None` for an empty quiz.
    pub fn score_ratio(&self) -> Option<f64> {
        if self.total_questions == 0 {
            return None;
        }
        Some(self.score as f64 / self.total_questions as f64)
    }
}
