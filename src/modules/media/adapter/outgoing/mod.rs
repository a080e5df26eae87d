pub mod supabase_storage;

pub use supabase_storage::{SupabaseStorage, SupabaseStorageConfig};
