// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    comment_id: i64,
    article_id: i64,
    author: String,
    body: String,
    votes: i32,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            comment_id: CommentId(row.comment_id),
            article_id: ArticleId(row.article_id),
            author: row.author,
            body: row.body,
            votes: row.votes,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT comment_id, article_id, author, body, votes, created_at \
             FROM comments WHERE article_id = $1",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        // Author and body are bound as-is; a None hits the column's NOT NULL
        // constraint and comes back as 23502 through map_sqlx.
        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (article_id, author, body) \
             VALUES ($1, $2, $3) \
             RETURNING comment_id, article_id, author, body, votes, created_at",
        )
        .bind(i64::from(comment.article_id))
        .bind(comment.author)
        .bind(comment.body)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn exists(&self, id: CommentId) -> DomainResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM comments WHERE comment_id = $1)")
                .bind(i64::from(id))
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;

        Ok(exists)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "DELETE FROM comments WHERE comment_id = $1 \
             RETURNING comment_id, article_id, author, body, votes, created_at",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Comment::from))
    }
}
