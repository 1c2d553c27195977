// src/domain/article/listing.rs
//
// Listing parameters arrive as untrusted query-string text. Sort column and
// direction are drawn from closed enumerations and are the only values ever
// spliced into query text; the topic filter is always bound as a parameter.
use crate::domain::errors::{DomainError, DomainResult};

/// Columns an article listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    ArticleId,
    Title,
    Topic,
    Author,
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortKey {
    /// Parse a raw `sort_by` value, defaulting to `created_at` when absent.
    pub fn parse(raw: Option<&str>) -> DomainResult<Self> {
        match raw {
            None => Ok(Self::CreatedAt),
            Some("article_id") => Ok(Self::ArticleId),
            Some("title") => Ok(Self::Title),
            Some("topic") => Ok(Self::Topic),
            Some("author") => Ok(Self::Author),
            Some("created_at") => Ok(Self::CreatedAt),
            Some("votes") => Ok(Self::Votes),
            Some("comment_count") => Ok(Self::CommentCount),
            Some(_) => Err(DomainError::Validation("Invalid sort query".into())),
        }
    }

    /// The column expression for ORDER BY. Values come only from this closed
    /// enumeration, never from request text.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::ArticleId => "articles.article_id",
            Self::Title => "articles.title",
            Self::Topic => "articles.topic",
            Self::Author => "articles.author",
            Self::CreatedAt => "articles.created_at",
            Self::Votes => "articles.votes",
            Self::CommentCount => "comment_count",
        }
    }
}

/// Sort direction. Matching is case-sensitive: `ASC` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: Option<&str>) -> DomainResult<Self> {
        match raw {
            None => Ok(Self::Desc),
            Some("asc") => Ok(Self::Asc),
            Some("desc") => Ok(Self::Desc),
            Some(_) => Err(DomainError::Validation("Invalid order query".into())),
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A fully validated listing, safe to hand to the executor.
#[derive(Debug, Clone)]
pub struct ArticleListing {
    pub sort: SortKey,
    pub order: SortOrder,
    pub topic: Option<String>,
}

impl ArticleListing {
    /// Validate sort and order in that fixed order; the first failure wins.
    /// The topic filter is attached separately once its slug has been checked
    /// against the live topics table.
    pub fn build(sort_by: Option<&str>, order: Option<&str>) -> DomainResult<Self> {
        let sort = SortKey::parse(sort_by)?;
        let order = SortOrder::parse(order)?;
        Ok(Self {
            sort,
            order,
            topic: None,
        })
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }
}
