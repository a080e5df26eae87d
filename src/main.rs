pub mod modules;
pub use modules::{about, auth, contact, experience, mail, media, profile, project, revalidation};
pub mod api;
pub mod health;
pub mod shared;

use crate::about::adapter::outgoing::AboutRepositoryPostgres;
use crate::about::application::about_use_cases::AboutUseCases;
use crate::about::application::service::{GetAboutService, SaveAboutService};
use crate::api::openapi::ApiDoc;
use crate::auth::adapter::incoming::web::SessionCookieConfig;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::domain::AdminCredentials;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::login_admin::LoginAdminService;
use crate::contact::adapter::outgoing::ContactRepositoryPostgres;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::service::{GetContactService, SaveContactService};
use crate::experience::adapter::outgoing::ExperienceRepositoryPostgres;
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::experience::application::service::{GetExperienceService, SaveExperienceService};
use crate::mail::adapter::outgoing::{
    ResendConfig, ResendEmailSender, SmtpConfig, SmtpEmailSender,
};
use crate::mail::application::domain::ContactMailConfig;
use crate::mail::application::mail_use_cases::MailUseCases;
use crate::mail::application::ports::outgoing::EmailSender;
use crate::mail::application::service::SendContactMessageService;
use crate::media::adapter::outgoing::{SupabaseStorage, SupabaseStorageConfig};
use crate::media::application::domain::UploadPolicy;
use crate::media::application::media_use_cases::MediaUseCases;
use crate::media::application::service::UploadFileService;
use crate::profile::adapter::outgoing::ProfileRepositoryPostgres;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::service::{GetProfileService, SaveProfileService};
use crate::project::adapter::outgoing::ProjectRepositoryPostgres;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    GetProjectsService, GetSingleProjectService, SaveProjectsService,
};
use crate::revalidation::adapter::outgoing::{InMemoryPageCache, RedisPageCache};
use crate::revalidation::application::ports::incoming::use_cases::RevalidatePagesUseCase;
use crate::revalidation::application::ports::outgoing::PageCache;
use crate::revalidation::application::revalidation_use_cases::RevalidationUseCases;
use crate::revalidation::application::service::RevalidatePagesService;
use crate::shared::api::custom_json_config;
use crate::shared::config::{is_production, load_dotenv, ServerConfig};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub session_cookie: SessionCookieConfig,
    pub profile: ProfileUseCases,
    pub about: AboutUseCases,
    pub experience: ExperienceUseCases,
    pub project: ProjectUseCases,
    pub contact: ContactUseCases,
    pub revalidation: RevalidationUseCases,
    pub media: MediaUseCases,
    pub mail: MailUseCases,
}

/// Resend wins when both providers are configured. `None` leaves the
/// contact form answering 500 until one is set up.
#[cfg(not(tarpaulin_include))]
fn select_email_sender() -> anyhow::Result<Option<Arc<dyn EmailSender + Send + Sync>>> {
    if let Some(resend) = ResendConfig::from_env() {
        info!("Contact mail via Resend");
        let sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(ResendEmailSender::new(resend)?);
        return Ok(Some(sender));
    }

    if let Some(smtp) = SmtpConfig::from_env()? {
        info!(server = %smtp.server, port = smtp.port, "Contact mail via SMTP");
        let sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(SmtpEmailSender::new(&smtp)?);
        return Ok(Some(sender));
    }

    warn!("No mail provider configured; POST /api/send will fail");
    Ok(None)
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_dotenv();

    let server_config = ServerConfig::from_env()?;
    let server_url = server_config.bind_address();

    // Database connection
    let mut opt = ConnectOptions::new(server_config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    let db_arc = Arc::new(conn);

    // Page cache: Redis when configured, process memory otherwise
    let page_cache: Arc<dyn PageCache + Send + Sync> = match &server_config.redis_url {
        Some(redis_url) => {
            let redis_pool = Config::from_url(redis_url)
                .create_pool(Some(Runtime::Tokio1))
                .context("Failed to create Redis pool")?;
            info!("Page cache backed by Redis");
            Arc::new(RedisPageCache::new(Arc::new(redis_pool)))
        }
        None => {
            warn!("REDIS_URL not set; stale markers are kept in memory");
            Arc::new(InMemoryPageCache::new())
        }
    };

    let revalidator: Arc<dyn RevalidatePagesUseCase + Send + Sync> =
        Arc::new(RevalidatePagesService::new(Arc::clone(&page_cache)));

    // Auth
    let jwt_config = JwtConfig::from_env()?;
    let session_cookie = SessionCookieConfig::new(is_production(), jwt_config.session_expiry);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let login_admin_service =
        LoginAdminService::new(AdminCredentials::from_env()?, Arc::clone(&token_provider_arc));

    // Content repositories
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let about_repo = AboutRepositoryPostgres::new(Arc::clone(&db_arc));
    let experience_repo = ExperienceRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db_arc));

    // Uploads
    let upload_policy = UploadPolicy::from_env()?;
    let storage = SupabaseStorage::new(SupabaseStorageConfig::from_env()?)?;
    let upload_service = UploadFileService::new(Arc::new(storage), upload_policy.clone());

    // Contact mail
    let send_contact_message_service =
        SendContactMessageService::new(select_email_sender()?, ContactMailConfig::from_env());

    let state = AppState {
        auth: AuthUseCases {
            login: Arc::new(login_admin_service),
        },
        session_cookie,
        profile: ProfileUseCases {
            get: Arc::new(GetProfileService::new(profile_repo.clone())),
            save: Arc::new(SaveProfileService::new(profile_repo, Arc::clone(&revalidator))),
        },
        about: AboutUseCases {
            get: Arc::new(GetAboutService::new(about_repo.clone())),
            save: Arc::new(SaveAboutService::new(about_repo, Arc::clone(&revalidator))),
        },
        experience: ExperienceUseCases {
            get: Arc::new(GetExperienceService::new(experience_repo.clone())),
            save: Arc::new(SaveExperienceService::new(
                experience_repo,
                Arc::clone(&revalidator),
            )),
        },
        project: ProjectUseCases {
            get_list: Arc::new(GetProjectsService::new(project_repo.clone())),
            get_single: Arc::new(GetSingleProjectService::new(project_repo.clone())),
            save: Arc::new(SaveProjectsService::new(project_repo, Arc::clone(&revalidator))),
        },
        contact: ContactUseCases {
            get: Arc::new(GetContactService::new(contact_repo.clone())),
            save: Arc::new(SaveContactService::new(contact_repo, Arc::clone(&revalidator))),
        },
        revalidation: RevalidationUseCases {
            revalidate: Arc::clone(&revalidator),
        },
        media: MediaUseCases {
            upload: Arc::new(upload_service),
            policy: upload_policy,
        },
        mail: MailUseCases {
            send_contact_message: Arc::new(send_contact_message_service),
        },
    };

    let openapi = ApiDoc::openapi();
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&page_cache)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_public_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_admin_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::save_profile_handler);
    // About
    cfg.service(crate::about::adapter::incoming::web::routes::get_public_about_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::get_admin_about_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::save_about_handler);
    // Experience
    cfg.service(crate::experience::adapter::incoming::web::routes::get_public_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::get_admin_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::save_experience_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_public_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_admin_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::save_projects_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::get_public_contact_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::get_admin_contact_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::save_contact_handler);
    // Revalidation
    cfg.service(crate::revalidation::adapter::incoming::web::routes::revalidate_handler);
    // Media
    cfg.service(crate::media::adapter::incoming::web::routes::upload_file_handler);
    // Mail
    cfg.service(crate::mail::adapter::incoming::web::routes::send_contact_message_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    exit_status(start())
}

/// Startup failures must leave a non-zero status for the supervisor.
fn exit_status(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error starting app: {e:#}");
            ExitCode::FAILURE
        }
    }
}
