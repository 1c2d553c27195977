use crate::domain::errors::DomainResult;
use crate::domain::user::entity::User;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<User>>;
}
