use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::http::StatusCode;
use actix_web::{post, web, HttpResponse, Responder};
use futures::StreamExt;
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::media::application::ports::incoming::use_cases::{UploadFileCommand, UploadFileError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    /// Public URL of the stored object.
    pub path: String,
}

/// Form shape for the docs; the handler reads the stream directly.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
    #[schema(example = "image")]
    r#type: String,
}

/// Longest `type` value worth reading; every valid kind is far shorter.
const MAX_KIND_LEN: u64 = 64;

enum ReadError {
    Multipart(MultipartError),
    TooLarge(u64),
    KindTooLong,
}

impl From<MultipartError> for ReadError {
    fn from(e: MultipartError) -> Self {
        ReadError::Multipart(e)
    }
}

async fn read_bytes(field: &mut Field, limit: u64) -> Result<Vec<u8>, ReadError> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        if (buf.len() + chunk.len()) as u64 > limit {
            return Err(ReadError::TooLarge(limit));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

async fn collect_form(
    mut payload: Multipart,
    limit: u64,
) -> Result<UploadFileCommand, ReadError> {
    let mut command = UploadFileCommand::default();

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field.name().map(str::to_owned);

        match name.as_deref() {
            Some("file") => {
                command.file_name = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .map(str::to_owned);
                command.content_type = field.content_type().map(|m| m.essence_str().to_owned());
                command.bytes = Some(read_bytes(&mut field, limit).await?);
            }
            Some("type") => {
                let raw = match read_bytes(&mut field, MAX_KIND_LEN).await {
                    Err(ReadError::TooLarge(_)) => return Err(ReadError::KindTooLong),
                    other => other?,
                };
                command.kind = Some(String::from_utf8_lossy(&raw).into_owned());
            }
            _ => {
                // drain unknown parts so the stream can advance
                while let Some(chunk) = field.next().await {
                    chunk?;
                }
            }
        }
    }

    Ok(command)
}

/// Upload a file to object storage
///
/// `type` selects the bucket and the accepted MIME types: `image` and
/// `profile` take JPEG, PNG or WebP; `document` takes PDF.
#[utoipa::path(
    post,
    path = "/api/admin/upload",
    tag = "media",
    security(("admin_cookie" = [])),
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Stored", body = UploadResponse),
        (status = 400, description = "Missing file, unknown type, wrong MIME type or too large", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[post("/api/admin/upload")]
pub async fn upload_file_handler(
    session: AdminSession,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let limit = data.media.policy.max_file_size_bytes;

    let command = match collect_form(payload, limit).await {
        Ok(command) => command,
        Err(ReadError::TooLarge(max)) => {
            return ApiResponse::bad_request(&format!("File exceeds the {max} byte limit"));
        }
        Err(ReadError::KindTooLong) => {
            return ApiResponse::bad_request("Invalid upload type");
        }
        Err(ReadError::Multipart(e)) => {
            warn!(error = %e, "Malformed multipart upload");
            return ApiResponse::error_with_details(
                StatusCode::BAD_REQUEST,
                "Invalid multipart body",
                &e.to_string(),
            );
        }
    };

    match data.media.upload.execute(command).await {
        Ok(uploaded) => {
            info!(admin = %session.username, bucket = %uploaded.bucket, object = %uploaded.object_name, "Upload complete");
            HttpResponse::Ok().json(UploadResponse {
                success: true,
                path: uploaded.public_url,
            })
        }
        Err(UploadFileError::MissingFile) => ApiResponse::bad_request("No file provided"),
        Err(e @ UploadFileError::UnknownKind(_)) => ApiResponse::bad_request(&e.to_string()),
        Err(e @ UploadFileError::InvalidFileType { .. }) => {
            ApiResponse::bad_request(&format!("Invalid file type: {e}"))
        }
        Err(e @ UploadFileError::TooLarge { .. }) => ApiResponse::bad_request(&e.to_string()),
        Err(UploadFileError::StorageFailed(ref msg)) => {
            error!(error = %msg, "Upload failed");
            ApiResponse::internal_error_with_details("File could not be uploaded", msg)
        }
    }
}
