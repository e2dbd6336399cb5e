use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoRoomRepository, MongoSubmissionRepository},
    services::{DefinitionService, ReportService, SessionService},
};

/// Wires config → database → repositories → services. The embedding
/// application builds one of these at startup and hands the services to its
/// presentation layer.
#[derive(Clone)]
pub struct AppState {
    pub definition_service: Arc<DefinitionService>,
    pub session_service: Arc<SessionService>,
    pub report_service: Arc<ReportService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let room_repository = Arc::new(MongoRoomRepository::new(&db, &config));
        room_repository.ensure_indexes().await?;

        let submission_repository = Arc::new(MongoSubmissionRepository::new(&db, &config));
        submission_repository.ensure_indexes().await?;

        let definition_service = Arc::new(DefinitionService::new(room_repository.clone()));
        let session_service = Arc::new(SessionService::new(submission_repository.clone()));
        let report_service = Arc::new(ReportService::new(room_repository, submission_repository));

        Ok(Self {
            definition_service,
            session_service,
            report_service,
            config: Arc::new(config),
        })
    }
}
