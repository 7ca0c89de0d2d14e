use actix_web::{post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    shared::api::ApiResponse,
    submission::application::ports::incoming::use_cases::{
        CreateSubmissionCommand, CreateSubmissionCommandError, CreateSubmissionError, PhotoInput,
    },
    upload::adapter::incoming::web::routes::map_policy_violation,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request / Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionRequest {
    #[schema(example = "photo-contest-2025")]
    pub contest_slug: String,
    pub first_name: String,
    pub last_name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub consent_given: bool,
    #[schema(example = "v1")]
    pub consent_version: Option<String>,
    /// `blobName` returned by `/api/uploads/presign`.
    pub blob_name: Option<String>,
    pub content_type: Option<String>,
    pub size_bytes: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionCreatedResponse {
    pub submission_id: Uuid,
    pub created_at_utc: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/submissions",
    tag = "submissions",
    request_body = CreateSubmissionRequest,
    responses(
        (status = 201, description = "Submission stored", body = inline(crate::api::schemas::SuccessResponse<SubmissionCreatedResponse>)),
        (status = 400, description = "Invalid entry, photo outside upload policy, or contest not found/inactive", body = crate::api::schemas::ErrorResponse),
        (status = 409, description = "Email already entered this contest", body = crate::api::schemas::ErrorResponse),
    )
)]
#[post("/api/submissions")]
pub async fn create_submission_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateSubmissionRequest>,
) -> impl Responder {
    let p = payload.into_inner();

    // 1️⃣ Build command (validation happens here)
    let command = match CreateSubmissionCommand::new(
        p.contest_slug,
        p.first_name,
        p.last_name,
        p.email,
        p.phone,
        p.consent_given,
        p.consent_version,
        PhotoInput {
            blob_name: p.blob_name,
            content_type: p.content_type,
            size_bytes: p.size_bytes,
        },
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    // 2️⃣ Execute use case
    match data.submission.create.execute(command).await {
        Ok(submission) => ApiResponse::created(SubmissionCreatedResponse {
            submission_id: submission.id,
            created_at_utc: submission.created_at_utc,
        }),
        Err(err) => map_create_submission_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateSubmissionCommandError) -> HttpResponse {
    use CreateSubmissionCommandError as E;

    let code = match err {
        E::EmptyContestSlug => "EMPTY_CONTEST_SLUG",
        E::EmptyFirstName => "EMPTY_FIRST_NAME",
        E::FirstNameTooLong => "FIRST_NAME_TOO_LONG",
        E::EmptyLastName => "EMPTY_LAST_NAME",
        E::LastNameTooLong => "LAST_NAME_TOO_LONG",
        E::InvalidEmail => "INVALID_EMAIL",
        E::EmailTooLong => "EMAIL_TOO_LONG",
        E::PhoneTooLong => "PHONE_TOO_LONG",
        E::ConsentVersionTooLong => "CONSENT_VERSION_TOO_LONG",
        E::IncompletePhoto => "INCOMPLETE_PHOTO",
        E::InvalidBlobName => "INVALID_BLOB_NAME",
        E::NegativePhotoSize => "INVALID_PHOTO_SIZE",
    };

    ApiResponse::bad_request(code, &err.to_string())
}

fn map_create_submission_error(err: CreateSubmissionError) -> HttpResponse {
    match err {
        CreateSubmissionError::ContestNotFound => {
            ApiResponse::bad_request("CONTEST_NOT_FOUND", "Contest not found or inactive")
        }
        CreateSubmissionError::DuplicateSubmission => {
            ApiResponse::conflict("DUPLICATE_SUBMISSION", "This email already submitted")
        }
        CreateSubmissionError::PhotoRejected(v) => map_policy_violation(v),
        CreateSubmissionError::RepositoryError(msg) => {
            tracing::error!("Failed to store submission: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
