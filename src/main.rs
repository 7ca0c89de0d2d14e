pub mod modules;
pub use modules::{auth, contest, email, submission, upload};
pub mod api;
pub mod config;
pub mod health;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::config::{AppConfig, SmtpConfig};
use crate::contest::adapter::outgoing::{ContestQueryPostgres, ContestRepositoryPostgres};
use crate::contest::application::services::{
    CreateContestService, GetContestService, SeedContestsService,
};
use crate::contest::application::ContestUseCases;
use crate::email::adapter::outgoing::{LoggingEmailSender, SmtpEmailSender};
use crate::email::application::ports::outgoing::EmailSender;
use crate::email::application::services::notification_worker::DEFAULT_QUEUE_CAPACITY;
use crate::email::application::services::NotificationWorker;
use crate::submission::adapter::outgoing::{SubmissionQueryPostgres, SubmissionRepositoryPostgres};
use crate::submission::application::ports::outgoing::SubmissionNotifier;
use crate::submission::application::services::{
    CreateSubmissionService, ExportSubmissionsService, ListSubmissionsService,
};
use crate::submission::application::SubmissionUseCases;
use crate::upload::adapter::outgoing::azure_blob::AzureBlobStorage;
use crate::upload::application::services::UploadAuthorizer;
use crate::upload::application::UploadUseCases;

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub upload: UploadUseCases,
    pub contest: ContestUseCases,
    pub submission: SubmissionUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let is_production = config.environment.is_production();

    info!(environment = config.environment.name(), "Configuration loaded");
    if !config.admin_key.is_configured() {
        warn!("ADMIN_KEY is not set, admin endpoints will reject every request");
    }

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string()))?;

    Migrator::up(&conn, None)
        .await
        .map_err(|e| std::io::Error::other(format!("Migration failed: {e}")))?;
    info!("Database migrations applied");

    let db_arc = Arc::new(conn);

    // Email
    let email_sender: Arc<dyn EmailSender> = match &config.smtp {
        SmtpConfig::Relay {
            server,
            username,
            password,
            from,
        } => Arc::new(
            SmtpEmailSender::new(server, username, password, from)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?,
        ),
        SmtpConfig::Local { host, port, from } => {
            Arc::new(SmtpEmailSender::new_local(host, *port, from))
        }
        SmtpConfig::Disabled => {
            warn!("SMTP is not configured, confirmation emails will only be logged");
            Arc::new(LoggingEmailSender)
        }
    };
    let (worker, dispatcher) = NotificationWorker::new(email_sender, DEFAULT_QUEUE_CAPACITY);
    worker.spawn();
    let notifier: Arc<dyn SubmissionNotifier> = Arc::new(dispatcher);

    // Uploads
    let upload_policy = Arc::new(config.upload_policy.clone());
    let storage = AzureBlobStorage::new(
        config.storage_account.clone(),
        config.grant.storage_timeout,
    );
    let upload_authorizer = UploadAuthorizer::new(storage, Arc::clone(&upload_policy), config.grant);

    // Contests
    let contest_repo = ContestRepositoryPostgres::new(Arc::clone(&db_arc));
    let contest_query = ContestQueryPostgres::new(Arc::clone(&db_arc));

    // Submissions
    let submission_repo = SubmissionRepositoryPostgres::new(Arc::clone(&db_arc));
    let submission_query = SubmissionQueryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        upload: UploadUseCases {
            authorize: Arc::new(upload_authorizer),
        },
        contest: ContestUseCases {
            create: Arc::new(CreateContestService::new(contest_repo.clone())),
            get_by_slug: Arc::new(GetContestService::new(contest_query.clone())),
            seed: Arc::new(SeedContestsService::new(
                contest_query.clone(),
                contest_repo,
            )),
        },
        submission: SubmissionUseCases {
            create: Arc::new(CreateSubmissionService::new(
                submission_repo,
                contest_query,
                upload_policy,
                notifier,
            )),
            list: Arc::new(ListSubmissionsService::new(submission_query.clone())),
            export: Arc::new(ExportSubmissionsService::new(submission_query)),
        },
    };

    let admin_key = config.admin_key.clone();
    let server_url = config.bind_address();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(admin_key.clone()))
            .app_data(crate::shared::api::custom_json_config())
            .app_data(crate::shared::api::custom_query_config())
            .configure(init_routes);

        if !is_production {
            app = app.configure(init_dev_routes);
        }

        app
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Uploads
    cfg.service(crate::upload::adapter::incoming::web::routes::presign_upload_handler);
    // Contests
    cfg.service(crate::contest::adapter::incoming::web::routes::create_contest_handler);
    cfg.service(crate::contest::adapter::incoming::web::routes::get_contest_handler);
    // Submissions
    cfg.service(crate::submission::adapter::incoming::web::routes::export_submissions_handler);
    cfg.service(crate::submission::adapter::incoming::web::routes::create_submission_handler);
    cfg.service(crate::submission::adapter::incoming::web::routes::list_submissions_handler);
}

#[cfg(not(tarpaulin_include))]
fn init_dev_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(crate::contest::adapter::incoming::web::routes::seed_contests_handler);
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
