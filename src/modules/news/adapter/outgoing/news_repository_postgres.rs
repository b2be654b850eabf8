use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use crate::modules::news::application::domain::entities::NewsStatus;
use crate::modules::news::application::ports::outgoing::{NewsRepository, NewsRepositoryError};

use super::sea_orm_entity::news::{
    ActiveModel as NewsActiveModel, Column as NewsColumn, Entity as NewsEntity,
};

#[derive(Clone, Debug)]
pub struct NewsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NewsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NewsRepository for NewsRepositoryPostgres {
    async fn increment_clicks(&self, news_id: i32) -> Result<(), NewsRepositoryError> {
        // Single SQL increment; concurrent views never lose a click.
        let result = NewsEntity::update_many()
            .col_expr(NewsColumn::Clicks, Expr::col(NewsColumn::Clicks).add(1))
            .filter(NewsColumn::Id.eq(news_id))
            .exec(&*self.db)
            .await
            .map_err(|e| NewsRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(NewsRepositoryError::NewsNotFound);
        }

        Ok(())
    }

    async fn set_status(
        &self,
        news_id: i32,
        status: NewsStatus,
        reason: Option<String>,
    ) -> Result<(), NewsRepositoryError> {
        let news = NewsEntity::find_by_id(news_id)
            .one(&*self.db)
            .await
            .map_err(|e| NewsRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(NewsRepositoryError::NewsNotFound)?;

        let mut active: NewsActiveModel = news.into();
        active.status = Set(status.as_i32());
        active.reason = Set(reason);

        active
            .update(&*self.db)
            .await
            .map_err(|e| NewsRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
