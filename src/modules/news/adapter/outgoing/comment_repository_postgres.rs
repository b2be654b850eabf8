use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::modules::news::application::domain::entities::Comment;
use crate::modules::news::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError, CommentWithUser, CreateCommentData,
};
use crate::modules::passport::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};

use super::sea_orm_entity::comment_likes::{
    ActiveModel as LikeActiveModel, Column as LikeColumn, Entity as LikeEntity,
};
use super::sea_orm_entity::comments::{
    ActiveModel as CommentActiveModel, Column as CommentColumn, Entity as CommentEntity,
};

#[derive(Clone, Debug)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db_err(e: impl std::fmt::Display) -> CommentRepositoryError {
        CommentRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create(&self, data: CreateCommentData) -> Result<Comment, CommentRepositoryError> {
        let now = Utc::now();
        let active = CommentActiveModel {
            id: NotSet,
            user_id: Set(data.user_id),
            news_id: Set(data.news_id),
            content: Set(data.content),
            parent_id: Set(data.parent_id),
            like_count: Set(0),
            create_time: Set(now.into()),
            update_time: Set(now.into()),
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::db_err)?;
        Ok(inserted.into())
    }

    async fn find_by_id(
        &self,
        comment_id: i32,
    ) -> Result<Option<Comment>, CommentRepositoryError> {
        CommentEntity::find_by_id(comment_id)
            .one(&*self.db)
            .await
            .map(|opt| opt.map(Into::into))
            .map_err(Self::db_err)
    }

    /// The edge insert and the counter bump share one transaction: either
    /// both land or neither does.
    async fn add_like(&self, comment_id: i32, user_id: i32) -> Result<(), CommentRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::db_err)?;

        let existing = LikeEntity::find_by_id((comment_id, user_id))
            .one(&txn)
            .await
            .map_err(Self::db_err)?;

        if existing.is_some() {
            txn.rollback().await.map_err(Self::db_err)?;
            return Ok(());
        }

        let edge = LikeActiveModel {
            comment_id: Set(comment_id),
            user_id: Set(user_id),
            create_time: Set(Utc::now().into()),
        };
        edge.insert(&txn).await.map_err(Self::db_err)?;

        CommentEntity::update_many()
            .col_expr(
                CommentColumn::LikeCount,
                Expr::col(CommentColumn::LikeCount).add(1),
            )
            .filter(CommentColumn::Id.eq(comment_id))
            .exec(&txn)
            .await
            .map_err(Self::db_err)?;

        txn.commit().await.map_err(Self::db_err)?;
        Ok(())
    }

    async fn remove_like(
        &self,
        comment_id: i32,
        user_id: i32,
    ) -> Result<(), CommentRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::db_err)?;

        let deleted = LikeEntity::delete_by_id((comment_id, user_id))
            .exec(&txn)
            .await
            .map_err(Self::db_err)?;

        if deleted.rows_affected == 0 {
            txn.rollback().await.map_err(Self::db_err)?;
            return Ok(());
        }

        CommentEntity::update_many()
            .col_expr(
                CommentColumn::LikeCount,
                Expr::col(CommentColumn::LikeCount).sub(1),
            )
            .filter(CommentColumn::Id.eq(comment_id))
            .exec(&txn)
            .await
            .map_err(Self::db_err)?;

        txn.commit().await.map_err(Self::db_err)?;
        Ok(())
    }

    async fn list_for_news(
        &self,
        news_id: i32,
        viewer: Option<i32>,
    ) -> Result<Vec<CommentWithUser>, CommentRepositoryError> {
        let rows = CommentEntity::find()
            .filter(CommentColumn::NewsId.eq(news_id))
            .order_by_desc(CommentColumn::CreateTime)
            .all(&*self.db)
            .await
            .map_err(Self::db_err)?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let comment_ids: Vec<i32> = rows.iter().map(|c| c.id).collect();
        let user_ids: Vec<i32> = rows
            .iter()
            .map(|c| c.user_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let users: HashMap<i32, _> = UserEntity::find()
            .filter(UserColumn::Id.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(Self::db_err)?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let liked: HashSet<i32> = match viewer {
            Some(viewer_id) => LikeEntity::find()
                .filter(LikeColumn::UserId.eq(viewer_id))
                .filter(LikeColumn::CommentId.is_in(comment_ids))
                .all(&*self.db)
                .await
                .map_err(Self::db_err)?
                .into_iter()
                .map(|l| l.comment_id)
                .collect(),
            None => HashSet::new(),
        };

        // Parents referenced by replies in this list; usually already present
        // in `rows`, fetched separately only when missing.
        let by_id: HashMap<i32, _> = rows.iter().map(|c| (c.id, c.clone())).collect();
        let missing_parents: Vec<i32> = rows
            .iter()
            .filter_map(|c| c.parent_id)
            .filter(|pid| !by_id.contains_key(pid))
            .collect();

        let mut parents: HashMap<i32, _> = by_id.clone();
        if !missing_parents.is_empty() {
            for parent in CommentEntity::find()
                .filter(CommentColumn::Id.is_in(missing_parents))
                .all(&*self.db)
                .await
                .map_err(Self::db_err)?
            {
                parents.insert(parent.id, parent);
            }
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let user = users.get(&row.user_id);
                let parent = row.parent_id.and_then(|pid| parents.get(&pid)).cloned();
                CommentWithUser {
                    user_id: row.user_id,
                    user_nick: user.map(|u| u.nick_name.clone()).unwrap_or_default(),
                    user_avatar: user.and_then(|u| u.avatar_url.clone()),
                    is_like: liked.contains(&row.id),
                    parent: parent.map(Into::into),
                    comment: row.into(),
                }
            })
            .collect())
    }
}
