use async_trait::async_trait;
use chrono::Utc;
use deadpool_redis::{redis::AsyncCommands, Pool};

use std::sync::Arc;

use crate::revalidation::application::domain::StaleMarker;
use crate::revalidation::application::ports::outgoing::{PageCache, PageCacheError};

/// Redis-backed stale markers.
///
/// ## Redis data model
/// ```text
/// pages:stale -> HASH { "<scope>:<path>" => "<RFC 3339 timestamp>" }
/// ```
/// A field's presence means the page must be rebuilt. Fields are limited to
/// the site's known pages, so the hash never outgrows them.
#[derive(Clone)]
pub struct RedisPageCache {
    pool: Arc<Pool>,
}

impl RedisPageCache {
    pub const STALE_HASH: &'static str = "pages:stale";

    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, PageCacheError> {
        self.pool
            .get()
            .await
            .map_err(|e| PageCacheError::Unavailable(format!("Pool error: {}", e)))
    }
}

fn map_redis_err(e: deadpool_redis::redis::RedisError) -> PageCacheError {
    PageCacheError::Unavailable(e.to_string())
}

#[async_trait]
impl PageCache for RedisPageCache {
    async fn mark_stale(&self, marker: &StaleMarker) -> Result<(), PageCacheError> {
        let mut conn = self.get_conn().await?;

        conn.hset::<_, _, _, ()>(Self::STALE_HASH, marker.key(), Utc::now().to_rfc3339())
            .await
            .map_err(map_redis_err)
    }

    async fn ping(&self) -> Result<(), PageCacheError> {
        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await
            .map(|_| ())
            .map_err(map_redis_err)
    }
}
