use sea_orm::entity::prelude::*;

use crate::modules::news::application::domain::entities::Comment;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub news_id: i32,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// Self-referential reply parent; storage allows any depth, display
    /// flattens to one level.
    pub parent_id: Option<i32>,
    pub like_count: i32,
    pub create_time: DateTimeWithTimeZone,
    pub update_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Comment {
    fn from(model: Model) -> Self {
        Comment {
            id: model.id,
            user_id: model.user_id,
            news_id: model.news_id,
            content: model.content,
            parent_id: model.parent_id,
            like_count: model.like_count,
            create_time: model.create_time.into(),
        }
    }
}
