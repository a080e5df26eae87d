pub mod file_name;
pub mod upload_kind;
pub mod upload_policy;

pub use file_name::stored_file_name;
pub use upload_kind::UploadKind;
pub use upload_policy::UploadPolicy;
