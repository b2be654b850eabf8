use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::modules::passport::application::domain::entities::Gender;
use crate::modules::passport::application::ports::outgoing::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct UpdateBaseInfoRequest {
    pub nick_name: String,
    pub signature: String,
    pub gender: Gender,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("参数错误")]
pub struct UpdateBaseInfoRequestError;

impl UpdateBaseInfoRequest {
    pub fn new(
        nick_name: Option<String>,
        signature: Option<String>,
        gender: Option<String>,
    ) -> Result<Self, UpdateBaseInfoRequestError> {
        let (nick_name, signature, gender) = match (nick_name, signature, gender) {
            (Some(n), Some(s), Some(g)) if !n.is_empty() && !s.is_empty() && !g.is_empty() => {
                (n, s, g)
            }
            _ => return Err(UpdateBaseInfoRequestError),
        };

        let gender = Gender::parse(&gender).ok_or(UpdateBaseInfoRequestError)?;

        Ok(Self {
            nick_name,
            signature,
            gender,
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateBaseInfoError {
    #[error("Nickname already taken")]
    NicknameTaken,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateBaseInfoUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: i32,
        request: UpdateBaseInfoRequest,
    ) -> Result<(), UpdateBaseInfoError>;
}

pub struct UpdateBaseInfoUseCase {
    repository: Arc<dyn UserRepository>,
}

impl UpdateBaseInfoUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl IUpdateBaseInfoUseCase for UpdateBaseInfoUseCase {
    async fn execute(
        &self,
        user_id: i32,
        request: UpdateBaseInfoRequest,
    ) -> Result<(), UpdateBaseInfoError> {
        self.repository
            .update_base_info(
                user_id,
                &request.nick_name,
                &request.signature,
                request.gender,
            )
            .await
            .map_err(|e| match e {
                UserRepositoryError::NicknameTaken => UpdateBaseInfoError::NicknameTaken,
                UserRepositoryError::UserNotFound => UpdateBaseInfoError::UserNotFound,
                other => UpdateBaseInfoError::RepositoryError(other.to_string()),
            })?;

        info!(user_id, "Profile base info updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::passport::application::domain::entities::UserProfile;
    use crate::modules::passport::application::ports::outgoing::CreateUserData;
    use std::sync::Mutex;

    #[test]
    fn request_requires_all_fields_and_a_known_gender() {
        assert!(UpdateBaseInfoRequest::new(
            Some("nick".into()),
            Some("sig".into()),
            Some("MAN".into())
        )
        .is_ok());

        assert!(UpdateBaseInfoRequest::new(None, Some("sig".into()), Some("MAN".into())).is_err());
        assert!(UpdateBaseInfoRequest::new(
            Some("nick".into()),
            Some("sig".into()),
            Some("OTHER".into())
        )
        .is_err());
    }

    #[derive(Default)]
    struct StubRepository {
        taken: bool,
        updates: Mutex<Vec<(i32, String, String, Gender)>>,
    }

    #[async_trait]
    impl UserRepository for StubRepository {
        async fn create_user(
            &self,
            _: CreateUserData,
        ) -> Result<UserProfile, UserRepositoryError> {
            unimplemented!("Not used in base-info tests")
        }

        async fn update_last_login(&self, _: i32) -> Result<(), UserRepositoryError> {
            Ok(())
        }

        async fn update_base_info(
            &self,
            user_id: i32,
            nick_name: &str,
            signature: &str,
            gender: Gender,
        ) -> Result<(), UserRepositoryError> {
            if self.taken {
                return Err(UserRepositoryError::NicknameTaken);
            }
            self.updates.lock().unwrap().push((
                user_id,
                nick_name.to_string(),
                signature.to_string(),
                gender,
            ));
            Ok(())
        }
    }

    #[tokio::test]
    async fn base_info_is_persisted() {
        let repo = Arc::new(StubRepository::default());
        let uc = UpdateBaseInfoUseCase::new(repo.clone());

        let request = UpdateBaseInfoRequest::new(
            Some("新昵称".into()),
            Some("新签名".into()),
            Some("WOMAN".into()),
        )
        .unwrap();

        uc.execute(3, request).await.unwrap();

        let updates = repo.updates.lock().unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].1, "新昵称");
        assert_eq!(updates[0].3, Gender::Woman);
    }

    #[tokio::test]
    async fn taken_nickname_is_rejected() {
        let uc = UpdateBaseInfoUseCase::new(Arc::new(StubRepository {
            taken: true,
            ..Default::default()
        }));

        let request = UpdateBaseInfoRequest::new(
            Some("nick".into()),
            Some("sig".into()),
            Some("MAN".into()),
        )
        .unwrap();

        let result = uc.execute(3, request).await;
        assert!(matches!(result, Err(UpdateBaseInfoError::NicknameTaken)));
    }
}
