pub mod definition_service;
pub mod grading;
pub mod report_service;
pub mod session_service;

pub use definition_service::DefinitionService;
pub use grading::GradingService;
pub use report_service::ReportService;
pub use session_service::SessionService;
