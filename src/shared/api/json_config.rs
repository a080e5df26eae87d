// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::error_with_details(
                actix_web::http::StatusCode::BAD_REQUEST,
                "Invalid request body",
                &message,
            ),
        )
        .into()
    })
}
