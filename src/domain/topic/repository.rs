use crate::domain::errors::DomainResult;
use crate::domain::topic::entity::Topic;
use async_trait::async_trait;

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Topic>>;

    /// Live probe backing topic-filter validation, so the accepted set can
    /// never drift from the table the filter runs against.
    async fn slug_exists(&self, slug: &str) -> DomainResult<bool>;
}
