use async_trait::async_trait;
use thiserror::Error;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RevalidateError {
    #[error("Path is required")]
    EmptyPath,
    #[error("page cache failure: {0}")]
    CacheFailure(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevalidationOutcome {
    pub paths: Vec<String>,
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RevalidatePagesUseCase: Send + Sync {
    async fn execute(&self, path: &str) -> Result<RevalidationOutcome, RevalidateError>;
}
