use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::shared::api::ApiResponse;
use crate::upload::application::domain::{
    entities::{UploadGrant, UploadRequest, UploadRequestError},
    policies::upload_policy::PolicyViolation,
};
use crate::upload::application::ports::incoming::use_cases::AuthorizationError;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresignUploadRequest {
    #[schema(example = "my photo.jpg")]
    pub file_name: String,

    #[schema(example = "image/jpeg")]
    pub content_type: String,

    /// Declared size of the file in bytes.
    #[schema(example = 500000)]
    pub bytes: i64,
}

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresignUploadResponse {
    #[schema(example = "2025/03/9f2c1e7a4b3d4c5e8f9a0b1c2d3e4f50-my_photo.jpg")]
    pub blob_name: String,
    pub upload_url: String,
    pub expires_at_utc: DateTime<Utc>,
}

impl From<UploadGrant> for PresignUploadResponse {
    fn from(grant: UploadGrant) -> Self {
        Self {
            blob_name: grant.storage_key.into_inner(),
            upload_url: grant.write_url,
            expires_at_utc: grant.expires_at,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/uploads/presign",
    tag = "uploads",
    request_body = PresignUploadRequest,
    responses(
        (status = 200, description = "Upload grant issued", body = inline(crate::api::schemas::SuccessResponse<PresignUploadResponse>)),
        (status = 400, description = "Invalid request or rejected by upload policy", body = crate::api::schemas::ErrorResponse),
        (status = 500, description = "Storage backend cannot sign upload grants", body = crate::api::schemas::ErrorResponse),
        (status = 503, description = "Object storage unavailable, retry later", body = crate::api::schemas::ErrorResponse),
    )
)]
#[post("/api/uploads/presign")]
pub async fn presign_upload_handler(
    req: web::Json<PresignUploadRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let request = match UploadRequest::try_new(req.file_name, req.content_type, req.bytes) {
        Ok(request) => request,
        Err(e) => return map_request_error(e),
    };

    match data.upload.authorize.execute(request).await {
        Ok(grant) => ApiResponse::success(PresignUploadResponse::from(grant)),
        Err(e) => map_authorization_error(e),
    }
}

fn map_request_error(e: UploadRequestError) -> HttpResponse {
    ApiResponse::bad_request("INVALID_UPLOAD_REQUEST", &e.to_string())
}

pub(crate) fn map_policy_violation(v: PolicyViolation) -> HttpResponse {
    match v {
        PolicyViolation::UnsupportedContentType(_) => {
            ApiResponse::bad_request("UNSUPPORTED_CONTENT_TYPE", &v.to_string())
        }
        PolicyViolation::FileTooLarge { .. } => {
            ApiResponse::bad_request("FILE_TOO_LARGE", &v.to_string())
        }
    }
}

fn map_authorization_error(e: AuthorizationError) -> HttpResponse {
    match e {
        AuthorizationError::Rejected(v) => map_policy_violation(v),
        AuthorizationError::StorageUnavailable => ApiResponse::service_unavailable(
            "STORAGE_UNAVAILABLE",
            "Upload storage is temporarily unavailable, please retry",
        ),
        AuthorizationError::CredentialGenerationUnsupported => {
            error!("Upload grant requested but storage backend cannot sign credentials");
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_MISCONFIGURED",
                "Uploads are not available right now",
            )
        }
    }
}
