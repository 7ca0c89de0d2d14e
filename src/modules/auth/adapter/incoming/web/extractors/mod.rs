pub mod admin;

pub use admin::{AdminAccess, AdminExportAccess, ADMIN_KEY_HEADER, ADMIN_KEY_QUERY};
