use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use evalua_engine::{
    errors::AppResult,
    models::domain::{QuestionDocument, RoomDocument, Submission},
    repositories::{RoomRepository, SubmissionRepository},
    session::StudentIdentity,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn student() -> StudentIdentity {
    StudentIdentity {
        id: "student-1".to_string(),
        name: "Ana Torres".to_string(),
    }
}

fn multiple_choice_doc(text: &str, correct_key: &str) -> QuestionDocument {
    let mut options = BTreeMap::new();
    for key in ["A", "B", "C", "D"] {
        options.insert(key.to_string(), format!("Option {}", key));
    }

    QuestionDocument {
        text: text.to_string(),
        kind: Some("multipleChoice".to_string()),
        options: Some(options),
        correct: Some(correct_key.to_string()),
        feedback_correct: None,
        feedback_incorrect: None,
    }
}

/// A room with two multiple-choice questions expecting answers ["B", "A"].
pub fn sample_room(id: &str, access_code: &str, time_limit_minutes: Option<i64>) -> RoomDocument {
    RoomDocument {
        id: id.to_string(),
        title: "Historia".to_string(),
        subject: Some("Historia".to_string()),
        teacher_id: Some("teacher-1".to_string()),
        access_code: access_code.to_string(),
        time_limit_minutes,
        questions: vec![
            multiple_choice_doc("First question", "B"),
            multiple_choice_doc("Second question", "A"),
        ],
    }
}

pub struct InMemoryRoomRepository {
    rooms: RwLock<HashMap<String, RoomDocument>>,
}

impl InMemoryRoomRepository {
    pub fn with_rooms(rooms: Vec<RoomDocument>) -> Arc<Self> {
        let map = rooms
            .into_iter()
            .map(|room| (room.id.clone(), room))
            .collect();
        Arc::new(Self {
            rooms: RwLock::new(map),
        })
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<RoomDocument>> {
        let rooms = self.rooms.read().await;
        Ok(rooms.get(id).cloned())
    }

    async fn find_by_access_code(&self, code: &str) -> AppResult<Option<RoomDocument>> {
        let rooms = self.rooms.read().await;
        Ok(rooms.values().find(|room| room.access_code == code).cloned())
    }
}

#[derive(Default)]
pub struct InMemorySubmissionRepository {
    submissions: RwLock<Vec<Submission>>,
}

impl InMemorySubmissionRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn stored(&self) -> Vec<Submission> {
        self.submissions.read().await.clone()
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn create(&self, submission: Submission) -> AppResult<Submission> {
        let mut submissions = self.submissions.write().await;
        submissions.push(submission.clone());
        Ok(submission)
    }

    async fn find_by_room(&self, room_id: &str) -> AppResult<Vec<Submission>> {
        let submissions = self.submissions.read().await;
        Ok(submissions
            .iter()
            .filter(|s| s.room_id == room_id)
            .cloned()
            .collect())
    }
}
