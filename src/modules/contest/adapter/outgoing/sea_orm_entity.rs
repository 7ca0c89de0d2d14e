use crate::contest::application::domain::entities::Contest;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    #[sea_orm(unique)]
    pub slug: String,

    pub starts_at: DateTimeWithTimeZone,

    pub ends_at: DateTimeWithTimeZone,

    pub is_active: bool,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Contest {
        Contest {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
            starts_at_utc: self.starts_at.into(),
            ends_at_utc: self.ends_at.into(),
            is_active: self.is_active,
            created_at_utc: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::submission::adapter::outgoing::sea_orm_entity::Entity")]
    Submissions,
}

impl Related<crate::submission::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
