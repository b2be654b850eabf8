use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Self-referential many-to-many: follower -> followed.
        manager
            .create_table(
                Table::create()
                    .table(UserFollows::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserFollows::FollowerId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserFollows::FollowedId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserFollows::FollowerId)
                            .col(UserFollows::FollowedId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_follows_follower")
                            .from(UserFollows::Table, UserFollows::FollowerId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_follows_followed")
                            .from(UserFollows::Table, UserFollows::FollowedId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Follower counts group by the followed side.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_user_follows_followed
                ON user_follows (followed_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_user_follows_followed")
            .await?;

        manager
            .drop_table(Table::drop().table(UserFollows::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserFollows {
    Table,
    FollowerId,
    FollowedId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
