pub mod session;

pub use session::{require_session, require_session_api};
