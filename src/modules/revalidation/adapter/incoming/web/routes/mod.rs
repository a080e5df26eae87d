pub mod revalidate;

pub use revalidate::{revalidate_handler, RevalidateRequestDto, RevalidateResponse, __path_revalidate_handler};
