pub mod contest_use_cases;
pub mod domain;
pub mod ports;
pub mod services;

pub use contest_use_cases::ContestUseCases;
