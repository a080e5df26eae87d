pub mod entities;

pub use entities::AdminCredentials;
