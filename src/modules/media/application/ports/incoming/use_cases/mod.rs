pub mod upload_file;

pub use upload_file::{UploadFileCommand, UploadFileError, UploadFileUseCase, UploadedFile};
