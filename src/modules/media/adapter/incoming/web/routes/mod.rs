pub mod upload_file;

pub use upload_file::{upload_file_handler, __path_upload_file_handler};
