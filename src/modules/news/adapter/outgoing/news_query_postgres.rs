use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;

use crate::constants::HOME_CATEGORY_ID;
use crate::modules::news::application::domain::entities::{News, NewsStatus};
use crate::modules::news::application::ports::outgoing::{NewsPage, NewsQuery};

use super::sea_orm_entity::comments::{
    Column as CommentColumn, Entity as CommentEntity,
};
use super::sea_orm_entity::news::{Column as NewsColumn, Entity as NewsEntity};

#[derive(Clone, Debug)]
pub struct NewsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NewsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NewsQuery for NewsQueryPostgres {
    async fn find_by_id(&self, news_id: i32) -> Result<Option<News>, String> {
        NewsEntity::find_by_id(news_id)
            .one(&*self.db)
            .await
            .map(|opt| opt.map(Into::into))
            .map_err(|e| e.to_string())
    }

    async fn list_approved(
        &self,
        category_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<NewsPage, String> {
        let mut query = NewsEntity::find()
            .filter(NewsColumn::Status.eq(NewsStatus::Approved.as_i32()))
            .order_by_desc(NewsColumn::CreateTime);

        if category_id != HOME_CATEGORY_ID {
            query = query.filter(NewsColumn::CategoryId.eq(category_id));
        }

        let paginator = query.paginate(&*self.db, per_page);
        let total_pages = paginator.num_pages().await.map_err(|e| e.to_string())?;
        let items = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(|e| e.to_string())?;

        Ok(NewsPage {
            items: items.into_iter().map(Into::into).collect(),
            total_pages,
            current_page: page,
        })
    }

    async fn click_rank(&self, limit: u64) -> Result<Vec<News>, String> {
        NewsEntity::find()
            .filter(NewsColumn::Status.eq(NewsStatus::Approved.as_i32()))
            .order_by_desc(NewsColumn::Clicks)
            .limit(limit)
            .all(&*self.db)
            .await
            .map(|rows| rows.into_iter().map(Into::into).collect())
            .map_err(|e| e.to_string())
    }

    async fn comments_count(&self, news_id: i32) -> Result<u64, String> {
        CommentEntity::find()
            .filter(CommentColumn::NewsId.eq(news_id))
            .count(&*self.db)
            .await
            .map_err(|e| e.to_string())
    }

    async fn list_review(
        &self,
        keywords: Option<String>,
        page: u64,
        per_page: u64,
    ) -> Result<NewsPage, String> {
        let mut query = NewsEntity::find()
            .filter(NewsColumn::Status.ne(NewsStatus::Approved.as_i32()))
            .order_by_desc(NewsColumn::CreateTime);

        if let Some(kw) = keywords.filter(|kw| !kw.is_empty()) {
            query = query.filter(NewsColumn::Title.contains(&kw));
        }

        let paginator = query.paginate(&*self.db, per_page);
        let total_pages = paginator.num_pages().await.map_err(|e| e.to_string())?;
        let items = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(|e| e.to_string())?;

        Ok(NewsPage {
            items: items.into_iter().map(Into::into).collect(),
            total_pages,
            current_page: page,
        })
    }
}
