pub mod captcha_generator;
pub mod password_hasher;
pub mod session_blacklist;
pub mod session_token_provider;
pub mod user_query;
pub mod user_repository;
pub mod verification_store;

pub use captcha_generator::{CaptchaError, CaptchaGenerator, GeneratedCaptcha};
pub use password_hasher::{HashError, PasswordHasher};
pub use session_blacklist::{SessionBlacklist, SessionBlacklistError};
pub use session_token_provider::{SessionClaims, SessionTokenProvider, TokenError};
pub use user_query::UserQuery;
pub use user_repository::{CreateUserData, UserRepository, UserRepositoryError};
pub use verification_store::{VerificationStore, VerificationStoreError};
