pub mod in_memory_page_cache;
pub mod page_cache_redis;

pub use in_memory_page_cache::InMemoryPageCache;
pub use page_cache_redis::RedisPageCache;
