use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    contest::application::{
        domain::entities::Contest, ports::incoming::use_cases::GetContestError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContestSummaryResponse {
    pub contest_id: i32,
    pub name: String,
    pub slug: String,
    pub starts_at_utc: DateTime<Utc>,
    pub ends_at_utc: DateTime<Utc>,
    pub is_active: bool,
}

impl From<Contest> for ContestSummaryResponse {
    fn from(c: Contest) -> Self {
        Self {
            contest_id: c.id,
            name: c.name,
            slug: c.slug,
            starts_at_utc: c.starts_at_utc,
            ends_at_utc: c.ends_at_utc,
            is_active: c.is_active,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/contests/{slug}",
    tag = "contests",
    params(("slug" = String, Path, description = "Contest slug")),
    responses(
        (status = 200, description = "Contest found", body = inline(crate::api::schemas::SuccessResponse<ContestSummaryResponse>)),
        (status = 404, description = "No contest with that slug", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/contests/{slug}")]
pub async fn get_contest_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.contest.get_by_slug.execute(&slug).await {
        Ok(contest) => ApiResponse::success(ContestSummaryResponse::from(contest)),
        Err(GetContestError::NotFound) => {
            ApiResponse::not_found("CONTEST_NOT_FOUND", "Contest not found")
        }
        Err(GetContestError::QueryError(_)) => ApiResponse::internal_error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::{
        contest::application::{
            ports::incoming::use_cases::GetContestUseCase,
            services::test_doubles::sample_contest,
        },
        tests::support::app_state_builder::TestAppStateBuilder,
    };

    struct MockGetContestUseCase {
        result: Result<Contest, GetContestError>,
    }

    #[async_trait]
    impl GetContestUseCase for MockGetContestUseCase {
        async fn execute(&self, _slug: &str) -> Result<Contest, GetContestError> {
            self.result.clone()
        }
    }

    async fn get(result: Result<Contest, GetContestError>) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_get_contest(MockGetContestUseCase { result })
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_contest_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/contests/summer")
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn get_contest_found_omits_created_at() {
        let (status, json) = get(Ok(sample_contest("summer", true))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["contestId"], 7);
        assert_eq!(json["data"]["isActive"], true);
        assert!(json["data"].get("createdAtUtc").is_none());
    }

    #[actix_web::test]
    async fn get_contest_not_found() {
        let (status, json) = get(Err(GetContestError::NotFound)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "CONTEST_NOT_FOUND");
    }

    #[actix_web::test]
    async fn get_contest_query_error() {
        let (status, _) = get(Err(GetContestError::QueryError("boom".to_string()))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
