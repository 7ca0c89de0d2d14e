use actix_web::{post, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    contest::application::ports::incoming::use_cases::SeedOutcome, shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct SeedResponse {
    pub seeded: bool,
    pub message: String,
}

/// Registered only outside production.
#[utoipa::path(
    post,
    path = "/dev/seed",
    tag = "dev",
    responses(
        (status = 200, description = "Demo data ensured", body = inline(crate::api::schemas::SuccessResponse<SeedResponse>)),
    )
)]
#[post("/dev/seed")]
pub async fn seed_contests_handler(data: web::Data<AppState>) -> impl Responder {
    match data.contest.seed.execute().await {
        Ok(SeedOutcome::Seeded) => ApiResponse::success(SeedResponse {
            seeded: true,
            message: "Seeded.".to_string(),
        }),
        Ok(SeedOutcome::AlreadySeeded) => ApiResponse::success(SeedResponse {
            seeded: false,
            message: "Already seeded.".to_string(),
        }),
        Err(_) => ApiResponse::internal_error(),
    }
}
