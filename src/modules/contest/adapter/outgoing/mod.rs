mod contest_query_postgres;
mod contest_repository_postgres;
pub mod sea_orm_entity;

pub use contest_query_postgres::ContestQueryPostgres;
pub use contest_repository_postgres::ContestRepositoryPostgres;
