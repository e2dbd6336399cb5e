pub mod room_repository;
pub mod submission_repository;

pub use room_repository::{MongoRoomRepository, RoomRepository};
pub use submission_repository::{MongoSubmissionRepository, SubmissionRepository};
