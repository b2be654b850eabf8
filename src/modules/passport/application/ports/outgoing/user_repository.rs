use async_trait::async_trait;

use crate::modules::passport::application::domain::entities::{Gender, UserProfile};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub mobile: String,
    pub nick_name: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Mobile number is already registered")]
    MobileAlreadyRegistered,

    #[error("Nickname is already taken")]
    NicknameTaken,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: CreateUserData) -> Result<UserProfile, UserRepositoryError>;

    async fn update_last_login(&self, user_id: i32) -> Result<(), UserRepositoryError>;

    async fn update_base_info(
        &self,
        user_id: i32,
        nick_name: &str,
        signature: &str,
        gender: Gender,
    ) -> Result<(), UserRepositoryError>;
}
