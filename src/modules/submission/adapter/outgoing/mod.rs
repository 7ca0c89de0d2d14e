pub mod sea_orm_entity;
mod submission_query_postgres;
mod submission_repository_postgres;

pub use submission_query_postgres::SubmissionQueryPostgres;
pub use submission_repository_postgres::SubmissionRepositoryPostgres;
