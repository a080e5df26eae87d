use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::revalidation::application::domain::{reported_paths, revalidation_targets};
use crate::revalidation::application::ports::incoming::use_cases::{
    RevalidateError, RevalidatePagesUseCase, RevalidationOutcome,
};
use crate::revalidation::application::ports::outgoing::PageCache;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct RevalidatePagesService {
    page_cache: Arc<dyn PageCache + Send + Sync>,
}

impl RevalidatePagesService {
    pub fn new(page_cache: Arc<dyn PageCache + Send + Sync>) -> Self {
        Self { page_cache }
    }
}

#[async_trait]
impl RevalidatePagesUseCase for RevalidatePagesService {
    async fn execute(&self, path: &str) -> Result<RevalidationOutcome, RevalidateError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(RevalidateError::EmptyPath);
        }

        // Sequential; the first failure aborts the rest.
        for marker in revalidation_targets(path) {
            self.page_cache.mark_stale(&marker).await.map_err(|e| {
                error!(marker = %marker, error = %e, "Failed to mark page stale");
                RevalidateError::CacheFailure(e.to_string())
            })?;
            debug!(marker = %marker, "Marked stale");
        }

        info!(path = %path, "Pages revalidated");

        Ok(RevalidationOutcome {
            paths: reported_paths(path),
        })
    }
}
