use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::revalidation::application::domain::StaleMarker;
use crate::revalidation::application::ports::outgoing::{PageCache, PageCacheError};

/// Process-local stale markers. Used when no Redis is configured.
#[derive(Default)]
pub struct InMemoryPageCache {
    stale: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl InMemoryPageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marker keys currently stale, sorted.
    pub async fn snapshot(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.stale.read().await.keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl PageCache for InMemoryPageCache {
    async fn mark_stale(&self, marker: &StaleMarker) -> Result<(), PageCacheError> {
        self.stale.write().await.insert(marker.key(), Utc::now());
        Ok(())
    }

    async fn ping(&self) -> Result<(), PageCacheError> {
        Ok(())
    }
}
