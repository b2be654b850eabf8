use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::news::application::ports::outgoing::FollowQuery;

use super::sea_orm_entity::news::{Column as NewsColumn, Entity as NewsEntity};
use super::sea_orm_entity::user_follows::{
    Column as FollowColumn, Entity as FollowEntity,
};

#[derive(Clone, Debug)]
pub struct FollowQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FollowQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FollowQuery for FollowQueryPostgres {
    async fn is_following(&self, follower_id: i32, followed_id: i32) -> Result<bool, String> {
        FollowEntity::find_by_id((follower_id, followed_id))
            .one(&*self.db)
            .await
            .map(|opt| opt.is_some())
            .map_err(|e| e.to_string())
    }

    async fn follower_count(&self, user_id: i32) -> Result<u64, String> {
        FollowEntity::find()
            .filter(FollowColumn::FollowedId.eq(user_id))
            .count(&*self.db)
            .await
            .map_err(|e| e.to_string())
    }

    async fn authored_news_count(&self, user_id: i32) -> Result<u64, String> {
        NewsEntity::find()
            .filter(NewsColumn::UserId.eq(user_id))
            .count(&*self.db)
            .await
            .map_err(|e| e.to_string())
    }
}
