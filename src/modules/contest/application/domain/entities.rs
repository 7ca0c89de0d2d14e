use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    #[serde(rename = "contestId")]
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub starts_at_utc: DateTime<Utc>,
    pub ends_at_utc: DateTime<Utc>,
    pub is_active: bool,
    pub created_at_utc: DateTime<Utc>,
}
