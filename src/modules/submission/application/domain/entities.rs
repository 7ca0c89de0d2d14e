use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const DEFAULT_CONSENT_VERSION: &str = "v1";

/// Photo previously uploaded with an upload grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoAttachment {
    pub blob_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub contest_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub consent_given: bool,
    pub consent_version: String,
    pub created_at_utc: DateTime<Utc>,
    pub blob_name: Option<String>,
    pub content_type: Option<String>,
    pub size_bytes: Option<i64>,
}

/// Admin-facing row, shared by the listing and the CSV export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRow {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub consent_given: bool,
    pub consent_version: String,
    pub created_at_utc: DateTime<Utc>,
}
