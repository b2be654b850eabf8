use sea_orm::entity::prelude::*;

use crate::modules::passport::application::domain::entities::{Gender, UserProfile};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub nick_name: String,
    pub password_hash: String,
    #[sea_orm(unique)]
    pub mobile: String,
    pub avatar_url: Option<String>,
    pub signature: Option<String>,
    pub gender: String,
    pub is_admin: bool,
    pub last_login: DateTimeWithTimeZone,
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

impl From<Model> for UserProfile {
    fn from(model: Model) -> Self {
        UserProfile {
            id: model.id,
            nick_name: model.nick_name,
            mobile: model.mobile,
            password_hash: model.password_hash,
            avatar_url: model.avatar_url,
            signature: model.signature,
            gender: Gender::parse(&model.gender).unwrap_or_default(),
            is_admin: model.is_admin,
            last_login: model.last_login.into(),
            create_time: model.create_time.into(),
        }
    }
}
