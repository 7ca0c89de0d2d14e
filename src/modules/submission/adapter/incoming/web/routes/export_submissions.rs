use actix_web::{
    get,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    web, HttpResponse, Responder,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    auth::adapter::incoming::web::extractors::AdminExportAccess, shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ExportSubmissionsQuery {
    pub contest_slug: String,
    /// Alternative to the `x-admin-key` header, for plain download links.
    pub admin_key: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/submissions/export",
    tag = "submissions",
    params(ExportSubmissionsQuery),
    security(("AdminKey" = [])),
    responses(
        (status = 200, description = "CSV download", content_type = "text/csv", body = String),
        (status = 401, description = "Missing or invalid admin key", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/submissions/export")]
pub async fn export_submissions_handler(
    _admin: AdminExportAccess,
    data: web::Data<AppState>,
    query: web::Query<ExportSubmissionsQuery>,
) -> impl Responder {
    match data.submission.export.execute(&query.contest_slug).await {
        Ok(export) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(export.file_name)],
            })
            .body(export.content),
        Err(e) => {
            tracing::error!("Failed to export submissions: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::{
        auth::application::domain::AdminKey,
        submission::application::services::{
            test_doubles::{sample_row, MockSubmissionQuery},
            ExportSubmissionsService,
        },
        tests::support::app_state_builder::TestAppStateBuilder,
    };

    async fn call(
        query: MockSubmissionQuery,
        req: test::TestRequest,
    ) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_export_submissions(ExportSubmissionsService::new(query))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(AdminKey::new(Some("s3cret".to_string()))))
                .service(export_submissions_handler),
        )
        .await;

        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn export_with_query_key_returns_csv_attachment() {
        let resp = call(
            MockSubmissionQuery::with(vec![sample_row("Ana", 0)]),
            test::TestRequest::get()
                .uri("/api/submissions/export?contestSlug=summer&adminKey=s3cret"),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);

        let headers = resp.headers().clone();
        assert_eq!(
            headers.get("content-type").unwrap(),
            "text/csv; charset=utf-8"
        );
        let disposition = headers
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment"));
        assert!(disposition.contains("submissions_summer_"));

        let body = test::read_body(resp).await;
        let csv = String::from_utf8(body.to_vec()).unwrap();
        assert!(csv.starts_with(
            "FirstName,LastName,Email,Phone,ConsentGiven,ConsentVersion,CreatedAtUtc\n"
        ));
        assert!(csv.contains("\"Ana\",\"Lopez\""));
    }

    #[actix_web::test]
    async fn export_with_header_key() {
        let resp = call(
            MockSubmissionQuery::default(),
            test::TestRequest::get()
                .uri("/api/submissions/export?contestSlug=summer")
                .insert_header(("x-admin-key", "s3cret")),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn export_without_key_is_unauthorized() {
        let resp = call(
            MockSubmissionQuery::default(),
            test::TestRequest::get().uri("/api/submissions/export?contestSlug=summer"),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn export_failure_is_500() {
        let resp = call(
            MockSubmissionQuery::failing("down"),
            test::TestRequest::get()
                .uri("/api/submissions/export?contestSlug=summer&adminKey=s3cret"),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
