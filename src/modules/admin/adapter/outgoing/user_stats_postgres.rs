use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

use crate::modules::admin::application::ports::outgoing::{
    AdminUserPage, AdminUserRow, UserStatsQuery,
};
use crate::modules::passport::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};

/// Admin analytics over the `users` table. Admin accounts are excluded from
/// every number here.
#[derive(Clone, Debug)]
pub struct UserStatsPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserStatsPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStatsQuery for UserStatsPostgres {
    async fn total_user_count(&self) -> Result<u64, String> {
        UserEntity::find()
            .filter(UserColumn::IsAdmin.eq(false))
            .count(&*self.db)
            .await
            .map_err(|e| e.to_string())
    }

    async fn count_registered_since(&self, since: DateTime<Utc>) -> Result<u64, String> {
        UserEntity::find()
            .filter(UserColumn::IsAdmin.eq(false))
            .filter(UserColumn::CreateTime.gte(since))
            .count(&*self.db)
            .await
            .map_err(|e| e.to_string())
    }

    async fn active_count_between(
        &self,
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64, String> {
        UserEntity::find()
            .filter(UserColumn::IsAdmin.eq(false))
            .filter(UserColumn::LastLogin.gte(begin))
            .filter(UserColumn::LastLogin.lt(end))
            .count(&*self.db)
            .await
            .map_err(|e| e.to_string())
    }

    async fn page_users(&self, page: u64, per_page: u64) -> Result<AdminUserPage, String> {
        let paginator = UserEntity::find()
            .filter(UserColumn::IsAdmin.eq(false))
            .order_by_desc(UserColumn::CreateTime)
            .paginate(&*self.db, per_page);

        let total_pages = paginator.num_pages().await.map_err(|e| e.to_string())?;
        let items = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(|e| e.to_string())?;

        Ok(AdminUserPage {
            items: items
                .into_iter()
                .map(|u| AdminUserRow {
                    id: u.id,
                    nick_name: u.nick_name,
                    mobile: u.mobile,
                    register: u.create_time.into(),
                    last_login: u.last_login.into(),
                })
                .collect(),
            total_pages,
            current_page: page,
        })
    }
}
