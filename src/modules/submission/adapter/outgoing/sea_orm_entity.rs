use sea_orm::entity::prelude::*;

use crate::submission::application::domain::entities::{Submission, SubmissionRow};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub contest_id: i32,

    pub first_name: String,

    pub last_name: String,

    pub email: String,

    pub phone: String,

    pub consent_given: bool,

    pub consent_version: String,

    pub created_at: DateTimeWithTimeZone,

    pub blob_name: Option<String>,

    pub content_type: Option<String>,

    pub size_bytes: Option<i64>,
}

impl Model {
    pub fn to_domain(&self) -> Submission {
        Submission {
            id: self.id,
            contest_id: self.contest_id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            consent_given: self.consent_given,
            consent_version: self.consent_version.clone(),
            created_at_utc: self.created_at.into(),
            blob_name: self.blob_name.clone(),
            content_type: self.content_type.clone(),
            size_bytes: self.size_bytes,
        }
    }

    pub fn into_row(self) -> SubmissionRow {
        SubmissionRow {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            consent_given: self.consent_given,
            consent_version: self.consent_version,
            created_at_utc: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::contest::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::ContestId",
        to = "crate::contest::adapter::outgoing::sea_orm_entity::Column::Id",
        on_delete = "Cascade"
    )]
    Contest,
}

impl Related<crate::contest::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
