pub mod session_verifier;

pub use session_verifier::{verify_session, SessionError, SESSION_COOKIE};
