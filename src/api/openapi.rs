use crate::api::schemas::{AckResponse, ErrorResponse, MessageResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::about::application::domain::{About, Education, PersonalInfo, Skills};
use crate::auth::adapter::incoming::web::routes::LoginRequestDto;
use crate::contact::application::domain::Contact;
use crate::experience::application::domain::{ExperienceItem, ExperienceSection};
use crate::mail::application::domain::ContactMessage;
use crate::mail::application::ports::outgoing::DeliveryReceipt;
use crate::media::adapter::incoming::web::routes::upload_file::{UploadForm, UploadResponse};
use crate::media::application::domain::UploadKind;
use crate::profile::application::domain::Profile;
use crate::project::application::domain::{Project, ProjectList};
use crate::revalidation::adapter::incoming::web::routes::{
    RevalidateRequestDto, RevalidateResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public content and admin editing endpoints for the portfolio site",
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::login_admin_handler,

        // Profile
        crate::profile::adapter::incoming::web::routes::get_public_profile_handler,
        crate::profile::adapter::incoming::web::routes::get_admin_profile_handler,
        crate::profile::adapter::incoming::web::routes::save_profile_handler,

        // About
        crate::about::adapter::incoming::web::routes::get_public_about_handler,
        crate::about::adapter::incoming::web::routes::get_admin_about_handler,
        crate::about::adapter::incoming::web::routes::save_about_handler,

        // Experience
        crate::experience::adapter::incoming::web::routes::get_public_experience_handler,
        crate::experience::adapter::incoming::web::routes::get_admin_experience_handler,
        crate::experience::adapter::incoming::web::routes::save_experience_handler,

        // Projects
        crate::project::adapter::incoming::web::routes::get_public_projects_handler,
        crate::project::adapter::incoming::web::routes::get_admin_projects_handler,
        crate::project::adapter::incoming::web::routes::get_single_project_handler,
        crate::project::adapter::incoming::web::routes::save_projects_handler,

        // Contact
        crate::contact::adapter::incoming::web::routes::get_public_contact_handler,
        crate::contact::adapter::incoming::web::routes::get_admin_contact_handler,
        crate::contact::adapter::incoming::web::routes::save_contact_handler,

        // Revalidation
        crate::revalidation::adapter::incoming::web::routes::revalidate_handler,

        // Media
        crate::media::adapter::incoming::web::routes::upload_file_handler,

        // Mail
        crate::mail::adapter::incoming::web::routes::send_contact_message_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            MessageResponse,
            AckResponse,

            // Auth
            LoginRequestDto,

            // Content
            Profile,
            About,
            PersonalInfo,
            Skills,
            Education,
            ExperienceSection,
            ExperienceItem,
            Project,
            ProjectList,
            Contact,

            // Revalidation
            RevalidateRequestDto,
            RevalidateResponse,

            // Media
            UploadKind,
            UploadForm,
            UploadResponse,

            // Mail
            ContactMessage,
            DeliveryReceipt
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin session endpoints"),
        (name = "profile", description = "Landing page profile"),
        (name = "about", description = "About page content"),
        (name = "experience", description = "Experience page content"),
        (name = "projects", description = "Portfolio projects"),
        (name = "contact", description = "Contact information"),
        (name = "cache", description = "Public page cache invalidation"),
        (name = "media", description = "File uploads"),
        (name = "mail", description = "Contact form delivery"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "admin-token",
                    "Session token set by POST /api/admin/login",
                ))),
            )
        }
    }
}
