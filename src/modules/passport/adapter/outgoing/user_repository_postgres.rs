use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

use crate::modules::passport::application::domain::entities::{Gender, UserProfile};
use crate::modules::passport::application::ports::outgoing::{
    CreateUserData, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: CreateUserData) -> Result<UserProfile, UserRepositoryError> {
        let now = Utc::now();
        let active_user = UserActiveModel {
            id: NotSet,
            nick_name: Set(user.nick_name),
            password_hash: Set(user.password_hash),
            mobile: Set(user.mobile),
            avatar_url: Set(None),
            signature: Set(None),
            gender: Set(Gender::Man.as_str().to_string()),
            is_admin: Set(false),
            last_login: Set(now.into()),
            create_time: Set(now.into()),
            update_time: Set(now.into()),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return UserRepositoryError::MobileAlreadyRegistered;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(inserted.into())
    }

    async fn update_last_login(&self, user_id: i32) -> Result<(), UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.last_login = Set(Utc::now().into());

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn update_base_info(
        &self,
        user_id: i32,
        nick_name: &str,
        signature: &str,
        gender: Gender,
    ) -> Result<(), UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.nick_name = Set(nick_name.to_string());
        active_user.signature = Set(Some(signature.to_string()));
        active_user.gender = Set(gender.as_str().to_string());

        active_user.update(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return UserRepositoryError::NicknameTaken;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}
