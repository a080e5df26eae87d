use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::project::application::domain::ProjectList;
use crate::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::shared::api::ApiResponse;
use crate::shared::audience::Audience;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

async fn list_projects(data: &AppState, audience: Audience) -> HttpResponse {
    match data.project.get_list.execute(audience).await {
        Ok(projects) => ApiResponse::success(ProjectList { projects }),
        Err(GetProjectsError::RepositoryError(ref msg)) => {
            error!(error = %msg, "Failed to load projects");
            ApiResponse::internal_error_with_details("Failed to load projects", msg)
        }
    }
}

/// Public project list
///
/// Projects without a gallery get one built from their cover image.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Projects ordered by id", body = inline(SuccessResponse<ProjectList>)),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn get_public_projects_handler(data: web::Data<AppState>) -> impl Responder {
    list_projects(&data, Audience::Public).await
}

#[utoipa::path(
    get,
    path = "/api/admin/projects",
    tag = "projects",
    security(("admin_cookie" = [])),
    responses(
        (status = 200, description = "Projects as stored", body = inline(SuccessResponse<ProjectList>)),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    )
)]
#[get("/api/admin/projects")]
pub async fn get_admin_projects_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    list_projects(&data, Audience::Admin).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::application::domain::Project;
    use crate::project::application::service::GetProjectsService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_cookie, token_provider_data};
    use crate::tests::support::in_memory::InMemoryProjectRepository;
    use actix_web::{test, App};

    fn repo() -> InMemoryProjectRepository {
        InMemoryProjectRepository::with(vec![
            Project {
                id: "b".into(),
                title: "Second".into(),
                image: "/b.png".into(),
                ..Default::default()
            },
            Project {
                id: "a".into(),
                title: "First".into(),
                image: "/a.png".into(),
                image_gallery: Some(vec!["/a1.png".into()]),
                ..Default::default()
            },
        ])
    }

    #[actix_web::test]
    async fn test_public_list_wrapped_and_sorted() {
        let app_state = TestAppStateBuilder::default()
            .with_get_projects(GetProjectsService::new(repo()))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_public_projects_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        let projects = body["data"]["projects"].as_array().unwrap();
        assert_eq!(projects[0]["id"], "a");
        assert_eq!(projects[0]["imageGallery"][0], "/a1.png");
        assert_eq!(projects[1]["imageGallery"][0], "/b.png");
    }

    #[actix_web::test]
    async fn test_admin_list_keeps_missing_gallery() {
        let app_state = TestAppStateBuilder::default()
            .with_get_projects(GetProjectsService::new(repo()))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(get_admin_projects_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/projects")
            .cookie(admin_cookie())
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert!(body["data"]["projects"][1]["imageGallery"].is_null());
    }

    #[actix_web::test]
    async fn test_empty_table_is_empty_list() {
        let app_state = TestAppStateBuilder::default()
            .with_get_projects(GetProjectsService::new(InMemoryProjectRepository::default()))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_public_projects_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["projects"], serde_json::json!([]));
    }
}
