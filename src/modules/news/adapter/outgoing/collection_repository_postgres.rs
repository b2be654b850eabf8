use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::news::application::domain::entities::News;
use crate::modules::news::application::ports::outgoing::{
    CollectionRepository, CollectionRepositoryError, NewsPage,
};

use super::sea_orm_entity::news::{Column as NewsColumn, Entity as NewsEntity};
use super::sea_orm_entity::user_collections::{
    ActiveModel as CollectionActiveModel, Column as CollectionColumn, Entity as CollectionEntity,
};

#[derive(Clone, Debug)]
pub struct CollectionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CollectionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db_err(e: impl std::fmt::Display) -> CollectionRepositoryError {
        CollectionRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl CollectionRepository for CollectionRepositoryPostgres {
    async fn collect(&self, user_id: i32, news_id: i32) -> Result<(), CollectionRepositoryError> {
        let existing = CollectionEntity::find_by_id((user_id, news_id))
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?;

        if existing.is_some() {
            return Ok(());
        }

        let edge = CollectionActiveModel {
            user_id: Set(user_id),
            news_id: Set(news_id),
            create_time: Set(Utc::now().into()),
        };

        edge.insert(&*self.db).await.map_err(Self::db_err)?;
        Ok(())
    }

    async fn cancel_collect(
        &self,
        user_id: i32,
        news_id: i32,
    ) -> Result<(), CollectionRepositoryError> {
        CollectionEntity::delete_by_id((user_id, news_id))
            .exec(&*self.db)
            .await
            .map_err(Self::db_err)?;
        Ok(())
    }

    async fn is_collected(
        &self,
        user_id: i32,
        news_id: i32,
    ) -> Result<bool, CollectionRepositoryError> {
        CollectionEntity::find_by_id((user_id, news_id))
            .one(&*self.db)
            .await
            .map(|opt| opt.is_some())
            .map_err(Self::db_err)
    }

    async fn list_collected(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<NewsPage, CollectionRepositoryError> {
        let paginator = CollectionEntity::find()
            .filter(CollectionColumn::UserId.eq(user_id))
            .order_by_desc(CollectionColumn::CreateTime)
            .paginate(&*self.db, per_page);

        let total_pages = paginator.num_pages().await.map_err(Self::db_err)?;
        let edges = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(Self::db_err)?;

        let news_ids: Vec<i32> = edges.iter().map(|e| e.news_id).collect();

        let news_by_id: HashMap<i32, News> = NewsEntity::find()
            .filter(NewsColumn::Id.is_in(news_ids.clone()))
            .all(&*self.db)
            .await
            .map_err(Self::db_err)?
            .into_iter()
            .map(|n| (n.id, n.into()))
            .collect();

        // Preserve collection order (most recently collected first).
        let items = news_ids
            .into_iter()
            .filter_map(|id| news_by_id.get(&id).cloned())
            .collect();

        Ok(NewsPage {
            items,
            total_pages,
            current_page: page,
        })
    }
}
