pub mod revalidate_pages_service;

pub use revalidate_pages_service::RevalidatePagesService;
