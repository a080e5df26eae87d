pub mod revalidate_pages;

pub use revalidate_pages::{RevalidateError, RevalidatePagesUseCase, RevalidationOutcome};
