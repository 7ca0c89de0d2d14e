use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    auth::adapter::incoming::web::extractors::AdminAccess,
    shared::api::ApiResponse,
    submission::application::{domain::entities::SubmissionRow, ports::outgoing::PageRequest},
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListSubmissionsQuery {
    pub contest_slug: String,
    /// Values below 1 are treated as 1.
    pub page: Option<i64>,
    /// 1..=500; anything else falls back to 50.
    pub page_size: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionItem {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub consent_given: bool,
    pub consent_version: String,
    pub created_at_utc: chrono::DateTime<chrono::Utc>,
}

impl From<SubmissionRow> for SubmissionItem {
    fn from(r: SubmissionRow) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            phone: r.phone,
            consent_given: r.consent_given,
            consent_version: r.consent_version,
            created_at_utc: r.created_at_utc,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPageResponse {
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub items: Vec<SubmissionItem>,
}

#[utoipa::path(
    get,
    path = "/api/submissions",
    tag = "submissions",
    params(ListSubmissionsQuery),
    security(("AdminKey" = [])),
    responses(
        (status = 200, description = "Page of submissions, newest first", body = inline(crate::api::schemas::SuccessResponse<SubmissionPageResponse>)),
        (status = 401, description = "Missing or invalid admin key", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/submissions")]
pub async fn list_submissions_handler(
    _admin: AdminAccess,
    data: web::Data<AppState>,
    query: web::Query<ListSubmissionsQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::normalized(query.page, query.page_size);

    match data.submission.list.execute(&query.contest_slug, page).await {
        Ok(result) => ApiResponse::success(SubmissionPageResponse {
            total: result.total,
            page: result.page,
            page_size: result.page_size,
            items: result.items.into_iter().map(SubmissionItem::from).collect(),
        }),
        Err(e) => {
            tracing::error!("Failed to list submissions: {}", e);
            ApiResponse::internal_error()
        }
    }
}
