use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use serde::Deserialize;
use std::future::{ready, Ready};
use tracing::{error, warn};

use crate::{auth::application::domain::AdminKey, shared::api::ApiResponse};

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";
pub const ADMIN_KEY_QUERY: &str = "adminKey";

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn unauthorized() -> ActixError {
    create_api_error(ApiResponse::unauthorized(
        "UNAUTHORIZED",
        "Missing or invalid admin key",
    ))
}

fn key_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(ADMIN_KEY_HEADER)?
        .to_str()
        .ok()
        .map(|s| s.to_string())
        .filter(|s| !s.trim().is_empty())
}

#[derive(Deserialize)]
struct AdminKeyQuery {
    #[serde(rename = "adminKey")]
    admin_key: Option<String>,
}

fn key_from_query(req: &HttpRequest) -> Option<String> {
    web::Query::<AdminKeyQuery>::from_query(req.query_string())
        .ok()?
        .into_inner()
        .admin_key
        .filter(|s| !s.trim().is_empty())
}

fn authorize(req: &HttpRequest, provided: Option<String>) -> Result<(), ActixError> {
    let admin_key = match req.app_data::<web::Data<AdminKey>>() {
        Some(key) => key,
        None => {
            error!("AdminKey missing from app data");
            return Err(create_api_error(ApiResponse::internal_error()));
        }
    };

    match provided {
        Some(key) if admin_key.verify(&key) => Ok(()),
        _ => {
            warn!(path = %req.path(), "Rejected admin request");
            Err(unauthorized())
        }
    }
}

/// Admin caller authenticated through the `x-admin-key` header.
#[derive(Debug, Clone)]
pub struct AdminAccess;

impl FromRequest for AdminAccess {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authorize(req, key_from_header(req)).map(|_| AdminAccess))
    }
}

/// Admin caller for download links: header first, then the `adminKey` query parameter.
#[derive(Debug, Clone)]
pub struct AdminExportAccess;

impl FromRequest for AdminExportAccess {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let provided = key_from_header(req).or_else(|| key_from_query(req));
        ready(authorize(req, provided).map(|_| AdminExportAccess))
    }
}
