use async_trait::async_trait;
use thiserror::Error;

use crate::revalidation::application::domain::StaleMarker;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageCacheError {
    #[error("page cache unavailable: {0}")]
    Unavailable(String),
}

/// Stale markers consulted by whatever renders the public pages.
#[async_trait]
pub trait PageCache: Send + Sync {
    async fn mark_stale(&self, marker: &StaleMarker) -> Result<(), PageCacheError>;


    async fn ping(&self) -> Result<(), PageCacheError>;
}
