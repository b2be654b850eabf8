use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserCollections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserCollections::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserCollections::NewsId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserCollections::CreateTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserCollections::UserId)
                            .col(UserCollections::NewsId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_collections_user")
                            .from(UserCollections::Table, UserCollections::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_collections_news")
                            .from(UserCollections::Table, UserCollections::NewsId)
                            .to(News::Table, News::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserCollections::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserCollections {
    Table,
    UserId,
    NewsId,
    CreateTime,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum News {
    Table,
    Id,
}
