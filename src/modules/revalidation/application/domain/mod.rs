pub mod entities;

pub use entities::{revalidation_targets, reported_paths, PageScope, StaleMarker, SECTION_PAGES};
