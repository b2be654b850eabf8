use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

use crate::modules::news::application::domain::entities::Category;
use crate::modules::news::application::ports::outgoing::{
    CategoryRepository, CategoryRepositoryError,
};

use super::sea_orm_entity::categories::{
    ActiveModel as CategoryActiveModel, Column as CategoryColumn, Entity as CategoryEntity,
};

#[derive(Clone, Debug)]
pub struct CategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db_err(e: impl std::fmt::Display) -> CategoryRepositoryError {
        CategoryRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        CategoryEntity::find()
            .order_by_asc(CategoryColumn::Id)
            .all(&*self.db)
            .await
            .map(|rows| rows.into_iter().map(Into::into).collect())
            .map_err(Self::db_err)
    }

    async fn create(&self, name: &str) -> Result<Category, CategoryRepositoryError> {
        let existing = CategoryEntity::find()
            .filter(CategoryColumn::Name.eq(name))
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?;

        if existing.is_some() {
            return Err(CategoryRepositoryError::NameExists);
        }

        let now = Utc::now();
        let active = CategoryActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            create_time: Set(now.into()),
            update_time: Set(now.into()),
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("duplicate key") || err_str.contains("unique constraint") {
                return CategoryRepositoryError::NameExists;
            }
            Self::db_err(e)
        })?;

        Ok(inserted.into())
    }

    async fn rename(&self, category_id: i32, name: &str) -> Result<(), CategoryRepositoryError> {
        let category = CategoryEntity::find_by_id(category_id)
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?
            .ok_or(CategoryRepositoryError::CategoryNotFound)?;

        let mut active: CategoryActiveModel = category.into();
        active.name = Set(name.to_string());
        active.update_time = Set(Utc::now().into());

        active.update(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("duplicate key") || err_str.contains("unique constraint") {
                return CategoryRepositoryError::NameExists;
            }
            Self::db_err(e)
        })?;

        Ok(())
    }
}
