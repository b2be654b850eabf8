use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::modules::news::application::ports::outgoing::FollowQuery;
use crate::modules::passport::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProfileError {
    #[error("User not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// The profile dict the clients consume.
#[derive(Debug, Clone, Serialize)]
pub struct UserInfoView {
    pub id: i32,
    pub nick_name: String,
    pub mobile: String,
    pub avatar_url: Option<String>,
    pub signature: String,
    pub gender: String,
    pub followers_count: u64,
    pub news_count: u64,
}

#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: i32) -> Result<UserInfoView, FetchProfileError>;
}

pub struct FetchProfileUseCase {
    users: Arc<dyn UserQuery>,
    follows: Arc<dyn FollowQuery>,
}

impl FetchProfileUseCase {
    pub fn new(users: Arc<dyn UserQuery>, follows: Arc<dyn FollowQuery>) -> Self {
        Self { users, follows }
    }
}

#[async_trait]
impl IFetchProfileUseCase for FetchProfileUseCase {
    async fn execute(&self, user_id: i32) -> Result<UserInfoView, FetchProfileError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(FetchProfileError::QueryFailed)?
            .ok_or(FetchProfileError::NotFound)?;

        let followers_count = self
            .follows
            .follower_count(user_id)
            .await
            .map_err(FetchProfileError::QueryFailed)?;

        let news_count = self
            .follows
            .authored_news_count(user_id)
            .await
            .map_err(FetchProfileError::QueryFailed)?;

        Ok(UserInfoView {
            id: user.id,
            nick_name: user.nick_name,
            mobile: user.mobile,
            avatar_url: user.avatar_url,
            signature: user.signature.unwrap_or_default(),
            gender: user.gender.as_str().to_string(),
            followers_count,
            news_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::passport::application::domain::entities::{Gender, UserProfile};
    use chrono::Utc;

    struct StubUsers {
        user: Option<UserProfile>,
    }

    #[async_trait]
    impl UserQuery for StubUsers {
        async fn find_by_id(&self, _: i32) -> Result<Option<UserProfile>, String> {
            Ok(self.user.clone())
        }

        async fn find_by_mobile(&self, _: &str) -> Result<Option<UserProfile>, String> {
            Ok(None)
        }

        async fn find_admin_by_mobile(&self, _: &str) -> Result<Option<UserProfile>, String> {
            Ok(None)
        }
    }

    struct StubFollows;

    #[async_trait]
    impl FollowQuery for StubFollows {
        async fn is_following(&self, _: i32, _: i32) -> Result<bool, String> {
            Ok(false)
        }

        async fn follower_count(&self, _: i32) -> Result<u64, String> {
            Ok(12)
        }

        async fn authored_news_count(&self, _: i32) -> Result<u64, String> {
            Ok(2)
        }
    }

    #[tokio::test]
    async fn profile_assembles_counts() {
        let uc = FetchProfileUseCase::new(
            Arc::new(StubUsers {
                user: Some(UserProfile {
                    id: 3,
                    nick_name: "reader".into(),
                    mobile: "13800000000".into(),
                    password_hash: "h".into(),
                    avatar_url: None,
                    signature: Some("个性签名".into()),
                    gender: Gender::Woman,
                    is_admin: false,
                    last_login: Utc::now(),
                    create_time: Utc::now(),
                }),
            }),
            Arc::new(StubFollows),
        );

        let view = uc.execute(3).await.unwrap();
        assert_eq!(view.nick_name, "reader");
        assert_eq!(view.gender, "WOMAN");
        assert_eq!(view.signature, "个性签名");
        assert_eq!(view.followers_count, 12);
        assert_eq!(view.news_count, 2);
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let uc = FetchProfileUseCase::new(Arc::new(StubUsers { user: None }), Arc::new(StubFollows));

        let result = uc.execute(3).await;
        assert!(matches!(result, Err(FetchProfileError::NotFound)));
    }
}
