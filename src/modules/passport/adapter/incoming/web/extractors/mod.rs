pub mod session;

pub use session::{extract_token_from_header, AdminUser, SessionGuard, SessionUser};
