// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,

    /// Human-readable error message
    #[schema(example = "Unauthorized access")]
    pub error: String,

    /// Backend failure text, present on some 400 and 500 answers
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "connection refused")]
    pub details: Option<String>,
}

/// `{success, message}` returned by writes and by the login and revalidate endpoints
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,

    #[schema(example = "Profile updated and published")]
    pub message: String,
}

/// Bare acknowledgement
#[derive(Serialize, ToSchema)]
pub struct AckResponse {
    #[schema(example = true)]
    pub success: bool,
}
