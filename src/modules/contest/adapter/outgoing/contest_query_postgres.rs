use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::contest::application::{
    domain::entities::Contest,
    ports::outgoing::{ContestQuery, ContestQueryError},
};

use super::sea_orm_entity::{Column as ContestColumn, Entity as ContestEntity};

#[derive(Debug, Clone)]
pub struct ContestQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContestQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ContestQueryError {
    ContestQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ContestQuery for ContestQueryPostgres {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Contest>, ContestQueryError> {
        let model = ContestEntity::find()
            .filter(ContestColumn::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Contest>, ContestQueryError> {
        let model = ContestEntity::find()
            .filter(ContestColumn::Slug.eq(slug))
            .filter(ContestColumn::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn any_exists(&self) -> Result<bool, ContestQueryError> {
        let first = ContestEntity::find()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(first.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contest::adapter::outgoing::sea_orm_entity::Model as ContestModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(slug: &str, is_active: bool) -> ContestModel {
        let now = Utc::now().fixed_offset();
        ContestModel {
            id: 1,
            name: "Photo Contest".to_string(),
            slug: slug.to_string(),
            starts_at: now,
            ends_at: now,
            is_active,
            created_at: now,
        }
    }

    #[tokio::test]
    async fn test_find_by_slug_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("summer", false)]])
            .into_connection();

        let query = ContestQueryPostgres::new(Arc::new(db));
        let contest = query.find_by_slug("summer").await.unwrap().unwrap();

        assert_eq!(contest.slug, "summer");
        assert!(!contest.is_active);
    }

    #[tokio::test]
    async fn test_find_by_slug_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<ContestModel>::new()])
            .into_connection();

        let query = ContestQueryPostgres::new(Arc::new(db));
        assert!(query.find_by_slug("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_active_by_slug_filters_on_flag() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![model("summer", true)]])
                .into_connection(),
        );

        let query = ContestQueryPostgres::new(db.clone());
        let contest = query.find_active_by_slug("summer").await.unwrap();
        assert!(contest.is_some());

        drop(query);
        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        assert_eq!(log.len(), 1);
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("is_active"));
    }

    #[tokio::test]
    async fn test_any_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("a", true)]])
            .append_query_results(vec![Vec::<ContestModel>::new()])
            .into_connection();

        let query = ContestQueryPostgres::new(Arc::new(db));
        assert!(query.any_exists().await.unwrap());
        assert!(!query.any_exists().await.unwrap());
    }

    #[tokio::test]
    async fn test_query_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let query = ContestQueryPostgres::new(Arc::new(db));
        assert!(matches!(
            query.find_by_slug("x").await,
            Err(ContestQueryError::DatabaseError(_))
        ));
    }
}
