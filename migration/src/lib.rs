pub use sea_orm_migration::prelude::*;

mod m20250310_101500_create_users_table;
mod m20250310_102000_create_categories_table;
mod m20250310_102500_create_news_table;
mod m20250310_103000_create_comments_table;
mod m20250310_103500_create_comment_likes_table;
mod m20250310_104000_create_user_collections_table;
mod m20250310_104500_create_user_follows_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250310_101500_create_users_table::Migration),
            Box::new(m20250310_102000_create_categories_table::Migration),
            Box::new(m20250310_102500_create_news_table::Migration),
            Box::new(m20250310_103000_create_comments_table::Migration),
            Box::new(m20250310_103500_create_comment_likes_table::Migration),
            Box::new(m20250310_104000_create_user_collections_table::Migration),
            Box::new(m20250310_104500_create_user_follows_table::Migration),
        ]
    }
}
