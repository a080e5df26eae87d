pub mod page_cache;

pub use page_cache::{PageCache, PageCacheError};
