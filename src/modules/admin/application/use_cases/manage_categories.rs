use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::constants::HOME_CATEGORY_ID;
use crate::modules::news::application::domain::views::CategoryView;
use crate::modules::news::application::ports::outgoing::{
    CategoryRepository, CategoryRepositoryError,
};

// ========================= Category list =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryListError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryView>,
}

#[async_trait]
pub trait ListCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<CategoryListResponse, CategoryListError>;
}

pub struct ListCategoriesService {
    categories: Arc<dyn CategoryRepository>,
}

impl ListCategoriesService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl ListCategoriesUseCase for ListCategoriesService {
    async fn execute(&self) -> Result<CategoryListResponse, CategoryListError> {
        let categories = self
            .categories
            .list()
            .await
            .map_err(|e| CategoryListError::QueryFailed(e.to_string()))?;

        // The synthetic home category is not editable and never listed.
        Ok(CategoryListResponse {
            categories: categories
                .iter()
                .filter(|c| c.id != HOME_CATEGORY_ID)
                .map(CategoryView::from)
                .collect(),
        })
    }
}

// ========================= Add / rename =========================

#[derive(Debug, Clone)]
pub struct SaveCategoryRequest {
    /// With an id this is a rename; without, a creation.
    pub id: Option<i32>,
    pub name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("参数错误")]
pub struct SaveCategoryRequestError;

impl SaveCategoryRequest {
    pub fn new(
        id: Option<i32>,
        name: Option<String>,
    ) -> Result<Self, SaveCategoryRequestError> {
        let name = match name {
            Some(n) if !n.trim().is_empty() => n.trim().to_string(),
            _ => return Err(SaveCategoryRequestError),
        };

        if id == Some(HOME_CATEGORY_ID) {
            return Err(SaveCategoryRequestError);
        }

        Ok(Self { id, name })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveCategoryError {
    #[error("Category not found")]
    NotFound,

    #[error("Category name already exists")]
    NameExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SaveCategoryUseCase: Send + Sync {
    async fn execute(&self, request: SaveCategoryRequest) -> Result<(), SaveCategoryError>;
}

pub struct SaveCategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl SaveCategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl SaveCategoryUseCase for SaveCategoryService {
    async fn execute(&self, request: SaveCategoryRequest) -> Result<(), SaveCategoryError> {
        let map_err = |e: CategoryRepositoryError| match e {
            CategoryRepositoryError::CategoryNotFound => SaveCategoryError::NotFound,
            CategoryRepositoryError::NameExists => SaveCategoryError::NameExists,
            other => SaveCategoryError::RepositoryError(other.to_string()),
        };

        match request.id {
            Some(id) => {
                self.categories
                    .rename(id, &request.name)
                    .await
                    .map_err(map_err)?;
                info!(category_id = id, "Category renamed");
            }
            None => {
                let created = self.categories.create(&request.name).await.map_err(map_err)?;
                info!(category_id = created.id, "Category created");
            }
        }

        Ok(())
    }
}
