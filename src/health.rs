use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::revalidation::application::ports::outgoing::PageCache;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    page_cache: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Database answers `SELECT 1`
/// - Page cache answers a ping
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    page_cache: web::Data<Arc<dyn PageCache + Send + Sync>>,
) -> impl Responder {
    let db_status = match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => "ok",
        Err(e) => {
            warn!(error = %e, "Readiness: database check failed");
            "unhealthy"
        }
    };

    let cache_status = match page_cache.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            warn!(error = %e, "Readiness: page cache check failed");
            "unhealthy"
        }
    };

    if db_status == "ok" && cache_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database: db_status,
            page_cache: cache_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            database: db_status,
            page_cache: cache_status,
        })
    }
}
