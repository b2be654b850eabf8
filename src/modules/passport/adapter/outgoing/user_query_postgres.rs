use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::passport::application::domain::entities::UserProfile;
use crate::modules::passport::application::ports::outgoing::UserQuery;

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<UserProfile>, String> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map(|opt| opt.map(Into::into))
            .map_err(|e| e.to_string())
    }

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<UserProfile>, String> {
        UserEntity::find()
            .filter(UserColumn::Mobile.eq(mobile))
            .one(&*self.db)
            .await
            .map(|opt| opt.map(Into::into))
            .map_err(|e| e.to_string())
    }

    async fn find_admin_by_mobile(&self, mobile: &str) -> Result<Option<UserProfile>, String> {
        UserEntity::find()
            .filter(UserColumn::Mobile.eq(mobile))
            .filter(UserColumn::IsAdmin.eq(true))
            .one(&*self.db)
            .await
            .map(|opt| opt.map(Into::into))
            .map_err(|e| e.to_string())
    }
}
