use actix_web::{post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    contest::application::{
        domain::entities::Contest,
        ports::incoming::use_cases::{
            CreateContestCommand, CreateContestCommandError, CreateContestError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request / Response DTO
// ──────────────────────────────────────────────────────────
//

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContestRequest {
    #[schema(example = "Photo Contest 2025")]
    pub name: String,
    #[schema(example = "photo-contest-2025")]
    pub slug: String,
    pub starts_at_utc: DateTime<Utc>,
    pub ends_at_utc: DateTime<Utc>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContestResponse {
    pub contest_id: i32,
    pub name: String,
    pub slug: String,
    pub starts_at_utc: DateTime<Utc>,
    pub ends_at_utc: DateTime<Utc>,
    pub is_active: bool,
    pub created_at_utc: DateTime<Utc>,
}

impl From<Contest> for ContestResponse {
    fn from(c: Contest) -> Self {
        Self {
            contest_id: c.id,
            name: c.name,
            slug: c.slug,
            starts_at_utc: c.starts_at_utc,
            ends_at_utc: c.ends_at_utc,
            is_active: c.is_active,
            created_at_utc: c.created_at_utc,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/contests",
    tag = "contests",
    request_body = CreateContestRequest,
    responses(
        (status = 201, description = "Contest created", body = inline(crate::api::schemas::SuccessResponse<ContestResponse>)),
        (status = 400, description = "Invalid contest", body = crate::api::schemas::ErrorResponse),
        (status = 409, description = "Slug already taken", body = crate::api::schemas::ErrorResponse),
    )
)]
#[post("/api/contests")]
pub async fn create_contest_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateContestRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateContestCommand::new(
        payload.name,
        payload.slug,
        payload.starts_at_utc,
        payload.ends_at_utc,
        payload.is_active,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.contest.create.execute(command).await {
        Ok(contest) => ApiResponse::created(ContestResponse::from(contest)),
        Err(err) => map_create_contest_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateContestCommandError) -> HttpResponse {
    match err {
        CreateContestCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }
        CreateContestCommandError::NameTooLong => {
            ApiResponse::bad_request("NAME_TOO_LONG", "Name must not exceed 200 characters")
        }
        CreateContestCommandError::EmptySlug => {
            ApiResponse::bad_request("EMPTY_SLUG", "Slug cannot be empty")
        }
        CreateContestCommandError::SlugTooLong => {
            ApiResponse::bad_request("SLUG_TOO_LONG", "Slug must not exceed 120 characters")
        }
    }
}

fn map_create_contest_error(err: CreateContestError) -> HttpResponse {
    match err {
        CreateContestError::SlugAlreadyExists => {
            ApiResponse::conflict("CONTEST_SLUG_EXISTS", "Contest slug already exists")
        }
        CreateContestError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
