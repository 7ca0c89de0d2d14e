use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;

use crate::contest::application::{
    domain::entities::Contest,
    ports::outgoing::{ContestRepository, ContestRepositoryError, NewContest},
};

use super::sea_orm_entity::{ActiveModel as ContestActiveModel, Model as ContestModel};

#[derive(Debug, Clone)]
pub struct ContestRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContestRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContestRepository for ContestRepositoryPostgres {
    async fn create_contest(&self, data: NewContest) -> Result<Contest, ContestRepositoryError> {
        let active = ContestActiveModel {
            name: Set(data.name),
            slug: Set(data.slug),
            starts_at: Set(data.starts_at_utc.fixed_offset()),
            ends_at: Set(data.ends_at_utc.fixed_offset()),
            is_active: Set(data.is_active),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let inserted: ContestModel = active.insert(&*self.db).await.map_err(map_slug_error)?;

        Ok(inserted.to_domain())
    }
}

fn map_slug_error(e: DbErr) -> ContestRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        ContestRepositoryError::SlugAlreadyExists
    } else {
        ContestRepositoryError::DatabaseError(e.to_string())
    }
}
