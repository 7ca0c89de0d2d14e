mod create_contest_service;
mod get_contest_service;
mod seed_contests_service;

pub use create_contest_service::CreateContestService;
pub use get_contest_service::GetContestService;
pub use seed_contests_service::SeedContestsService;

#[cfg(test)]
pub(crate) mod test_doubles;
