use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{config::Config, db::Database, errors::AppResult, models::domain::Submission};

#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn create(&self, submission: Submission) -> AppResult<Submission>;
    async fn find_by_room(&self, room_id: &str) -> AppResult<Vec<Submission>>;
}

pub struct MongoSubmissionRepository {
    collection: Collection<Submission>,
}

impl MongoSubmissionRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.submissions_collection);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for submissions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let room_index = IndexModel::builder()
            .keys(doc! { "salaId": 1 })
            .options(IndexOptions::builder().name("room_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(room_index).await?;

        log::info!("Successfully created indexes for submissions collection");
        Ok(())
    }
}

#[async_trait]
impl SubmissionRepository for MongoSubmissionRepository {
    async fn create(&self, submission: Submission) -> AppResult<Submission> {
        self.collection.insert_one(&submission).await?;
        Ok(submission)
    }

    async fn find_by_room(&self, room_id: &str) -> AppResult<Vec<Submission>> {
        let submissions = self
            .collection
            .find(doc! { "salaId": room_id })
            .sort(doc! { "fecha": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(submissions)
    }
}
