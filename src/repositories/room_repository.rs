use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{config::Config, db::Database, errors::AppResult, models::domain::RoomDocument};

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<RoomDocument>>;
    async fn find_by_access_code(&self, code: &str) -> AppResult<Option<RoomDocument>>;
}

pub struct MongoRoomRepository {
    collection: Collection<RoomDocument>,
}

impl MongoRoomRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.rooms_collection);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for rooms collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let access_code_index = IndexModel::builder()
            .keys(doc! { "codigoAcceso": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("access_code_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(access_code_index).await?;

        log::info!("Successfully created indexes for rooms collection");
        Ok(())
    }
}

#[async_trait]
impl RoomRepository for MongoRoomRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<RoomDocument>> {
        let room = self.collection.find_one(doc! { "id": id }).await?;
        Ok(room)
    }

    async fn find_by_access_code(&self, code: &str) -> AppResult<Option<RoomDocument>> {
        let room = self
            .collection
            .find_one(doc! { "codigoAcceso": code })
            .await?;
        Ok(room)
    }
}
