use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::contest::adapter::incoming::web::routes::{
    ContestResponse, ContestSummaryResponse, CreateContestRequest, SeedResponse,
};
use crate::submission::adapter::incoming::web::routes::{
    CreateSubmissionRequest, SubmissionCreatedResponse, SubmissionItem, SubmissionPageResponse,
};
use crate::upload::adapter::incoming::web::routes::{PresignUploadRequest, PresignUploadResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contest Entry API",
        version = "1.0.0",
        description = "Contest registration, participant submissions and direct-to-storage photo uploads"
    ),
    paths(
        // Upload endpoints
        crate::upload::adapter::incoming::web::routes::presign_upload_handler,

        // Contest endpoints
        crate::contest::adapter::incoming::web::routes::create_contest_handler,
        crate::contest::adapter::incoming::web::routes::get_contest_handler,
        crate::contest::adapter::incoming::web::routes::seed_contests_handler,

        // Submission endpoints
        crate::submission::adapter::incoming::web::routes::create_submission_handler,
        crate::submission::adapter::incoming::web::routes::list_submissions_handler,
        crate::submission::adapter::incoming::web::routes::export_submissions_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            PresignUploadRequest,
            PresignUploadResponse,

            CreateContestRequest,
            ContestResponse,
            ContestSummaryResponse,
            SeedResponse,

            CreateSubmissionRequest,
            SubmissionCreatedResponse,
            SubmissionItem,
            SubmissionPageResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "uploads", description = "Pre-signed upload grants"),
        (name = "contests", description = "Contest registration and lookup"),
        (name = "submissions", description = "Participant entries and admin exports"),
        (name = "dev", description = "Development helpers, absent in production"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "AdminKey",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "x-admin-key",
                    "Admin shared secret",
                ))),
            )
        }
    }
}
