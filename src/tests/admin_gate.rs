//! Every admin route behind the full route table refuses callers without a session.

use actix_web::cookie::Cookie;
use actix_web::{test, App};

use crate::auth::application::services::SESSION_COOKIE;
use crate::init_routes;
use crate::tests::support::app_state_builder::TestAppStateBuilder;
use crate::tests::support::auth_helper::token_provider_data;

const ADMIN_ROUTES: [(&str, &str); 11] = [
    ("GET", "/api/admin/profile"),
    ("POST", "/api/admin/profile"),
    ("GET", "/api/admin/about"),
    ("POST", "/api/admin/about"),
    ("GET", "/api/admin/experience"),
    ("POST", "/api/admin/experience"),
    ("GET", "/api/admin/projects"),
    ("POST", "/api/admin/projects"),
    ("GET", "/api/admin/contact"),
    ("POST", "/api/admin/contact"),
    ("POST", "/api/admin/upload"),
];

fn request(method: &str, uri: &str) -> test::TestRequest {
    match method {
        "POST" => test::TestRequest::post()
            .uri(uri)
            .set_json(serde_json::json!({})),
        _ => test::TestRequest::get().uri(uri),
    }
}

#[actix_web::test]
async fn test_admin_routes_without_cookie_are_401() {
    let app = test::init_service(
        App::new()
            .app_data(TestAppStateBuilder::default().build())
            .app_data(token_provider_data())
            .configure(init_routes),
    )
    .await;

    for (method, uri) in ADMIN_ROUTES {
        let resp = test::call_service(&app, request(method, uri).to_request()).await;
        assert_eq!(resp.status(), 401, "{method} {uri}");

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false, "{method} {uri}");
    }
}

#[actix_web::test]
async fn test_admin_routes_with_forged_cookie_are_401() {
    let app = test::init_service(
        App::new()
            .app_data(TestAppStateBuilder::default().build())
            .app_data(token_provider_data())
            .configure(init_routes),
    )
    .await;

    for (method, uri) in ADMIN_ROUTES {
        let req = request(method, uri)
            .cookie(Cookie::new(SESSION_COOKIE, "not.a.jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401, "{method} {uri}");
    }
}
