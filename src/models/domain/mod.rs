pub mod question;
pub mod report;
pub mod room;
pub mod submission;

pub use question::{Question, QuestionDocument, QuestionKind};
pub use report::{AggregateReport, QuestionStats, APPROVAL_THRESHOLD};
pub use room::{QuizDefinition, RoomDocument};
pub use submission::Submission;
