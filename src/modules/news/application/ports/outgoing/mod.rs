pub mod category_repository;
pub mod collection_repository;
pub mod comment_repository;
pub mod follow_query;
pub mod news_query;
pub mod news_repository;

pub use category_repository::{CategoryRepository, CategoryRepositoryError};
pub use collection_repository::{CollectionRepository, CollectionRepositoryError};
pub use comment_repository::{
    CommentRepository, CommentRepositoryError, CommentWithUser, CreateCommentData,
};
pub use follow_query::FollowQuery;
pub use news_query::{NewsPage, NewsQuery};
pub use news_repository::{NewsRepository, NewsRepositoryError};
