use crate::shared::config::{parse_or, ConfigError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    /// Sent to storage as the object's `cache-control` max-age.
    pub cache_control_secs: u32,
}

impl UploadPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
    pub const DEFAULT_CACHE_CONTROL_SECS: u32 = 3600;

    /// `UPLOAD_MAX_BYTES` overrides the 10 MiB default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            max_file_size_bytes: parse_or("UPLOAD_MAX_BYTES", Self::DEFAULT_MAX_FILE_SIZE_BYTES)?,
            cache_control_secs: Self::DEFAULT_CACHE_CONTROL_SECS,
        })
    }

    pub fn allows_size(&self, size: u64) -> bool {
        size <= self.max_file_size_bytes
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            cache_control_secs: Self::DEFAULT_CACHE_CONTROL_SECS,
        }
    }
}
