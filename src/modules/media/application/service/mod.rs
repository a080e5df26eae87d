pub mod upload_file_service;

pub use upload_file_service::UploadFileService;
