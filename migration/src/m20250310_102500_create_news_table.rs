use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(News::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(News::Title).string_len(256).not_null())
                    .col(ColumnDef::new(News::Source).string_len(64).not_null())
                    .col(ColumnDef::new(News::Digest).string_len(512).not_null())
                    .col(ColumnDef::new(News::Content).text().not_null())
                    .col(
                        ColumnDef::new(News::Clicks)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(News::IndexImageUrl).string_len(256))
                    .col(ColumnDef::new(News::CategoryId).integer().not_null())
                    .col(ColumnDef::new(News::UserId).integer())
                    // 0 approved, 1 pending, -1 rejected
                    .col(
                        ColumnDef::new(News::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(News::Reason).string_len(256))
                    .col(
                        ColumnDef::new(News::CreateTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(News::UpdateTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_category")
                            .from(News::Table, News::CategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_author")
                            .from(News::Table, News::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // The public list filters on status and orders by create_time; the
        // click rank orders by clicks.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_news_status_create_time
                ON news (status, create_time DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_news_clicks
                ON news (clicks DESC)
                WHERE status = 0;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_news_status_create_time;
                DROP INDEX IF EXISTS idx_news_clicks;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(News::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum News {
    Table,
    Id,
    Title,
    Source,
    Digest,
    Content,
    Clicks,
    IndexImageUrl,
    CategoryId,
    UserId,
    Status,
    Reason,
    CreateTime,
    UpdateTime,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
