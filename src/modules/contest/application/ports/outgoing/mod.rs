mod contest_query;
mod contest_repository;

pub use contest_query::{ContestQuery, ContestQueryError};
pub use contest_repository::{ContestRepository, ContestRepositoryError, NewContest};
