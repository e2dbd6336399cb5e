use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Loosely-typed question shape as stored in the `salas` documents. Older
/// records omit `tipo` entirely; [`Question::from_document`] is the single
/// place where that defaulting happens.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionDocument {
    #[serde(rename = "pregunta")]
    pub text: String,
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "opciones", default, skip_serializing_if = "Option::is_none")]
    pub options: Option<BTreeMap<String, String>>,
    #[serde(rename = "correcta", default, skip_serializing_if = "Option::is_none")]
    pub correct: Option<String>,
    #[serde(rename = "retroCorrecta", default)]
    pub feedback_correct: Option<String>,
    #[serde(rename = "retroIncorrecta", default)]
    pub feedback_incorrect: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub feedback_correct: String,
    pub feedback_incorrect: String,
    pub kind: QuestionKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    /// Choice keys are conventionally "A".."D" but the set is not fixed-size.
    MultipleChoice {
        options: BTreeMap<String, String>,
        correct_key: String,
    },
    /// Two options, conventionally "A" = Verdadero / "B" = Falso.
    TrueFalse {
        options: BTreeMap<String, String>,
        correct_key: String,
    },
    /// Free text, graded by exact string equality.
    ShortAnswer { correct_text: String },
}

impl Question {
    /// Converts a stored document into the typed model, defaulting a missing
    /// `tipo` to multiple choice as the legacy records require.
    pub fn from_document(doc: QuestionDocument) -> AppResult<Question> {
        let kind_tag = doc.kind.as_deref().unwrap_or("multipleChoice");

        let kind = match kind_tag {
            "multipleChoice" | "trueFalse" => {
                let options = doc.options.ok_or_else(|| {
                    AppError::ValidationError(format!(
                        "Question '{}' has no options",
                        doc.text
                    ))
                })?;
                let correct_key = doc.correct.ok_or_else(|| {
                    AppError::ValidationError(format!(
                        "Question '{}' has no correct key",
                        doc.text
                    ))
                })?;
                if kind_tag == "trueFalse" {
                    QuestionKind::TrueFalse {
                        options,
                        correct_key,
                    }
                } else {
                    QuestionKind::MultipleChoice {
                        options,
                        correct_key,
                    }
                }
            }
            "shortAnswer" => QuestionKind::ShortAnswer {
                correct_text: doc.correct.ok_or_else(|| {
                    AppError::ValidationError(format!(
                        "Question '{}' has no correct answer text",
                        doc.text
                    ))
                })?,
            },
            other => {
                return Err(AppError::ValidationError(format!(
                    "Unknown question type '{}'",
                    other
                )))
            }
        };

        Ok(Question {
            text: doc.text,
            feedback_correct: doc.feedback_correct.unwrap_or_default(),
            feedback_incorrect: doc.feedback_incorrect.unwrap_or_default(),
            kind,
        })
    }

    /// The value a stored answer must equal to count as correct.
    pub fn correct_answer(&self) -> &str {
        match &self.kind {
            QuestionKind::MultipleChoice { correct_key, .. } => correct_key,
            QuestionKind::TrueFalse { correct_key, .. } => correct_key,
            QuestionKind::ShortAnswer { correct_text } => correct_text,
        }
    }

    /// Defensive consistency check: every keyed variant must reference a key
    /// that exists in its own option set.
    pub fn validate(&self) -> AppResult<()> {
        match &self.kind {
            QuestionKind::MultipleChoice {
                options,
                correct_key,
            } => {
                if !options.contains_key(correct_key) {
                    return Err(AppError::ValidationError(format!(
                        "Question '{}': correct key '{}' is not one of its options",
                        self.text, correct_key
                    )));
                }
            }
            QuestionKind::TrueFalse {
                options,
                correct_key,
            } => {
                if options.len() != 2 {
                    return Err(AppError::ValidationError(format!(
                        "Question '{}': true/false question must have exactly two options",
                        self.text
                    )));
                }
                if !options.contains_key(correct_key) {
                    return Err(AppError::ValidationError(format!(
                        "Question '{}': correct key '{}' is not one of its options",
                        self.text, correct_key
                    )));
                }
            }
            QuestionKind::ShortAnswer { .. } => {}
        }
        Ok(())
    }
}
