pub mod category_repository_postgres;
pub mod collection_repository_postgres;
pub mod comment_repository_postgres;
pub mod follow_query_postgres;
pub mod news_query_postgres;
pub mod news_repository_postgres;
pub mod sea_orm_entity;
