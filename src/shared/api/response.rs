// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// The `{success, data|error}` envelope every endpoint answers with.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn body(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
            message: None,
            details: None,
        }
    }

    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::body(data))
    }
}

impl ApiResponse<()> {
    /// Envelope with only the `success` flag set.
    pub fn bare(success: bool) -> Self {
        ApiResponse {
            success,
            data: None,
            error: None,
            message: None,
            details: None,
        }
    }

    /// Bare `{success: true}`.
    pub fn ok() -> HttpResponse {
        HttpResponse::Ok().json(Self::bare(true))
    }

    /// `{success: true, message}` for completed writes.
    pub fn done(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            message: Some(message.to_string()),
            ..Self::bare(true)
        })
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            error: Some(message.to_string()),
            ..Self::bare(false)
        })
    }

    pub fn error_with_details(status: StatusCode, message: &str, details: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            error: Some(message.to_string()),
            details: Some(details.to_string()),
            ..Self::bare(false)
        })
    }

    /// `{success: false, message}`; the login and revalidate endpoints report this way.
    pub fn rejected(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            message: Some(message.to_string()),
            ..Self::bare(false)
        })
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An unexpected error occurred",
        )
    }

    pub fn internal_error_with_details(message: &str, details: &str) -> HttpResponse {
        Self::error_with_details(StatusCode::INTERNAL_SERVER_ERROR, message, details)
    }
}
