use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>>;

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    async fn exists(&self, id: CommentId) -> DomainResult<bool>;

    /// Hard delete; returns the removed row when one matched.
    async fn delete(&self, id: CommentId) -> DomainResult<Option<Comment>>;
}
