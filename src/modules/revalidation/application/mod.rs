pub mod domain;
pub mod ports;
pub mod revalidation_use_cases;
pub mod service;
