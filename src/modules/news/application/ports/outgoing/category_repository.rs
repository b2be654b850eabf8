use async_trait::async_trait;

use crate::modules::news::application::domain::entities::Category;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryRepositoryError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Category name already exists")]
    NameExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category including the synthetic home category; callers decide
    /// whether to filter it out.
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError>;

    async fn create(&self, name: &str) -> Result<Category, CategoryRepositoryError>;

    async fn rename(&self, category_id: i32, name: &str) -> Result<(), CategoryRepositoryError>;
}
