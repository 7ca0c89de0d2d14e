pub mod object_storage;

pub use object_storage::*;
