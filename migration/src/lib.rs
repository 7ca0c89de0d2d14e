pub use sea_orm_migration::prelude::*;

mod m20251020_091500_create_contests_table;
mod m20251020_092000_create_submissions_table;
mod m20251026_213541_add_submission_phone_and_photo;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_091500_create_contests_table::Migration),
            Box::new(m20251020_092000_create_submissions_table::Migration),
            Box::new(m20251026_213541_add_submission_phone_and_photo::Migration),
        ]
    }
}
