mod create_contest;
mod get_contest;
mod seed_contests;

pub use create_contest::*;
pub use get_contest::*;
pub use seed_contests::*;
