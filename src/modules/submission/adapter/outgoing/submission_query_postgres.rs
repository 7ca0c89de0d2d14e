use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select,
};
use std::sync::Arc;

use crate::contest::adapter::outgoing::sea_orm_entity::Column as ContestColumn;
use crate::submission::application::{
    domain::entities::SubmissionRow,
    ports::outgoing::{PageRequest, PageResult, SubmissionQuery, SubmissionQueryError},
};

use super::sea_orm_entity::{Column, Entity, Relation};

#[derive(Debug, Clone)]
pub struct SubmissionQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubmissionQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> SubmissionQueryError {
    SubmissionQueryError::DatabaseError(e.to_string())
}

fn newest_first_for_contest(contest_slug: &str) -> Select<Entity> {
    Entity::find()
        .join(sea_orm::JoinType::InnerJoin, Relation::Contest.def())
        .filter(ContestColumn::Slug.eq(contest_slug))
        .order_by_desc(Column::CreatedAt)
}

#[async_trait]
impl SubmissionQuery for SubmissionQueryPostgres {
    async fn list_by_contest_slug(
        &self,
        contest_slug: &str,
        page: PageRequest,
    ) -> Result<PageResult<SubmissionRow>, SubmissionQueryError> {
        let query = newest_first_for_contest(contest_slug);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.page_size as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: models.into_iter().map(|m| m.into_row()).collect(),
            page: page.page,
            page_size: page.page_size,
            total,
        })
    }

    async fn all_by_contest_slug(
        &self,
        contest_slug: &str,
    ) -> Result<Vec<SubmissionRow>, SubmissionQueryError> {
        let models = newest_first_for_contest(contest_slug)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(|m| m.into_row()).collect())
    }
}
