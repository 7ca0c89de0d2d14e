//! OpenAPI shapes of the `ApiResponse` envelope. Handlers never build these
//! directly; they only describe what `ApiResponse` serializes.
use serde::Serialize;
use utoipa::ToSchema;

/// `{ "success": true, "data": ... }`
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// `{ "success": false, "error": { "code": ..., "message": ... } }`
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine code, e.g. `DUPLICATE_SUBMISSION` or `FILE_TOO_LARGE`.
    #[schema(example = "UNSUPPORTED_CONTENT_TYPE")]
    pub code: String,

    /// Human-readable; wording may change between releases.
    #[schema(example = "Content type 'application/pdf' is not allowed")]
    pub message: String,
}
