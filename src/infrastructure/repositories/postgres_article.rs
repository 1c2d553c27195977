// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{Article, ArticleId, ArticleListing, ArticleRepository};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "articles.article_id, articles.title, articles.topic, \
     articles.author, articles.body, articles.created_at, articles.votes";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    article_id: i64,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
    comment_count: i64,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Article {
            article_id: ArticleId(row.article_id),
            title: row.title,
            topic: row.topic,
            author: row.author,
            body: row.body,
            created_at: row.created_at,
            votes: row.votes,
            comment_count: row.comment_count,
        }
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn list(&self, listing: &ArticleListing) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {ARTICLE_COLUMNS}, COUNT(comments.comment_id) AS comment_count \
             FROM articles \
             LEFT JOIN comments ON comments.article_id = articles.article_id"
        ));

        // The topic filter is always bound, never spliced into the text.
        if let Some(topic) = &listing.topic {
            builder.push(" WHERE articles.topic = ");
            builder.push_bind(topic);
        }

        // Sort column and direction come from closed enumerations.
        builder.push(" GROUP BY articles.article_id ORDER BY ");
        builder.push(listing.sort.as_sql());
        builder.push(" ");
        builder.push(listing.order.as_sql());

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS}, COUNT(comments.comment_id) AS comment_count \
             FROM articles \
             LEFT JOIN comments ON comments.article_id = articles.article_id \
             WHERE articles.article_id = $1 \
             GROUP BY articles.article_id"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(row.map(Article::from))
    }

    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM articles WHERE article_id = $1)")
                .bind(i64::from(id))
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;

        Ok(exists)
    }

    async fn increment_votes(&self, id: ArticleId, delta: i32) -> DomainResult<Option<Article>> {
        // Single atomic update; the CTE re-joins comments so the returned
        // article still carries its derived comment_count.
        let row = sqlx::query_as::<_, ArticleRow>(
            "WITH updated AS (
                 UPDATE articles SET votes = votes + $1
                 WHERE article_id = $2
                 RETURNING article_id, title, topic, author, body, created_at, votes
             )
             SELECT updated.article_id, updated.title, updated.topic, updated.author, \
                    updated.body, updated.created_at, updated.votes, \
                    COUNT(comments.comment_id) AS comment_count \
             FROM updated \
             LEFT JOIN comments ON comments.article_id = updated.article_id \
             GROUP BY updated.article_id, updated.title, updated.topic, updated.author, \
                      updated.body, updated.created_at, updated.votes",
        )
        .bind(delta)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Article::from))
    }
}
