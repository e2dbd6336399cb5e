use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Quiz definition not found: {0}")]
    DefinitionNotFound(String),

    #[error("Quiz has no questions: {0}")]
    EmptyQuiz(String),

    #[error("Submission write failed: {0}")]
    SubmissionWriteFailed(String),

    #[error("Duplicate submission: {0}")]
    DuplicateSubmission(String),

    #[error("Aggregation source missing: {0}")]
    AggregationSourceMissing(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl AppError {
    /// Stable machine-readable code for the presentation collaborator.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::DefinitionNotFound(_) => "DEFINITION_NOT_FOUND",
            AppError::EmptyQuiz(_) => "EMPTY_QUIZ",
            AppError::SubmissionWriteFailed(_) => "SUBMISSION_WRITE_FAILED",
            AppError::DuplicateSubmission(_) => "DUPLICATE_SUBMISSION",
            AppError::AggregationSourceMissing(_) => "AGGREGATION_SOURCE_MISSING",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
        }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}
impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::DatabaseError(format!("BSON serialization error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
