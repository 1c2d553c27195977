// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleId;
use chrono::{DateTime, Utc};

/// An article as read back from storage. `comment_count` is a derived
/// aggregate (LEFT JOIN + COUNT), never persisted and never null.
#[derive(Debug, Clone)]
pub struct Article {
    pub article_id: ArticleId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}
