use crate::domain::article::entity::Article;
use crate::domain::article::listing::ArticleListing;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Execute a validated listing: LEFT JOIN to comments, grouped per
    /// article, ordered by the listing's column and direction.
    async fn list(&self, listing: &ArticleListing) -> DomainResult<Vec<Article>>;

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Existence probe used by the comment endpoints before touching rows.
    async fn exists(&self, id: ArticleId) -> DomainResult<bool>;

    /// Single atomic `votes = votes + delta` update; `None` when no row
    /// matched. No floor is enforced, votes may go negative.
    async fn increment_votes(&self, id: ArticleId, delta: i32) -> DomainResult<Option<Article>>;
}
