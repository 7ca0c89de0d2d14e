pub mod notification;

pub use notification::{EmailMessage, NotificationJob};
