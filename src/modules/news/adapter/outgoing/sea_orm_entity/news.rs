use sea_orm::entity::prelude::*;

use crate::modules::news::application::domain::entities::{News, NewsStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "news")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub source: String,
    pub digest: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub clicks: i32,
    pub index_image_url: Option<String>,
    pub category_id: i32,
    pub user_id: Option<i32>,
    /// 0 approved, 1 pending, -1 rejected
    pub status: i32,
    pub reason: Option<String>,
    pub create_time: DateTimeWithTimeZone,
    pub update_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.update_time = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl From<Model> for News {
    fn from(model: Model) -> Self {
        News {
            id: model.id,
            title: model.title,
            source: model.source,
            digest: model.digest,
            content: model.content,
            clicks: model.clicks,
            index_image_url: model.index_image_url,
            category_id: model.category_id,
            user_id: model.user_id,
            status: NewsStatus::parse(model.status).unwrap_or(NewsStatus::Pending),
            reason: model.reason,
            create_time: model.create_time.into(),
        }
    }
}
