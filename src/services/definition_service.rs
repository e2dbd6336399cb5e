use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::QuizDefinition,
    repositories::RoomRepository,
};

/// Loads immutable quiz definitions from the rooms collection. Read-only;
/// internal question consistency is trusted to the authoring side.
pub struct DefinitionService {
    rooms: Arc<dyn RoomRepository>,
}

impl DefinitionService {
    pub fn new(rooms: Arc<dyn RoomRepository>) -> Self {
        Self { rooms }
    }

    pub async fn load(&self, room_id: &str) -> AppResult<QuizDefinition> {
        let room = self
            .rooms
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::DefinitionNotFound(room_id.to_string()))?;

        QuizDefinition::from_document(room)
    }

    /// Resolves a human-entered room code to the room's internal id. Codes
    /// are stored uppercase, so the input is trimmed and uppercased before
    /// the lookup.
    pub async fn resolve_access_code(&self, raw_code: &str) -> AppResult<String> {
        let code = raw_code.trim().to_uppercase();
        if code.is_empty() {
            return Err(AppError::ValidationError(
                "Room code must not be empty".to_string(),
            ));
        }

        let room = self
            .rooms
            .find_by_access_code(&code)
            .await?
            .ok_or_else(|| AppError::DefinitionNotFound(format!("no room with code '{}'", code)))?;

        Ok(room.id)
    }
}
