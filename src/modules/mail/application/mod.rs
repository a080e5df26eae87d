pub mod domain;
pub mod mail_use_cases;
pub mod ports;
pub mod service;
