use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{AggregateReport, QuizDefinition},
    repositories::{RoomRepository, SubmissionRepository},
};

/// Builds aggregate reports for a room on demand. All-or-nothing: a missing
/// definition produces no partial report.
pub struct ReportService {
    rooms: Arc<dyn RoomRepository>,
    submissions: Arc<dyn SubmissionRepository>,
}

impl ReportService {
    pub fn new(
        rooms: Arc<dyn RoomRepository>,
        submissions: Arc<dyn SubmissionRepository>,
    ) -> Self {
        Self { rooms, submissions }
    }

    pub async fn build_report(&self, room_id: &str) -> AppResult<AggregateReport> {
        let room = self
            .rooms
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::AggregationSourceMissing(room_id.to_string()))?;
        let quiz = QuizDefinition::from_document(room)?;

        let submissions = self.submissions.find_by_room(room_id).await?;
        log::info!(
            "Aggregating {} submissions for room '{}'",
            submissions.len(),
            room_id
        );

        Ok(AggregateReport::from_submissions(&quiz, &submissions))
    }
}
