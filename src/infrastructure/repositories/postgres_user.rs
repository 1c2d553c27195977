use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::user::{User, UserRepository};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list(&self) -> DomainResult<Vec<User>> {
        let usernames: Vec<String> = sqlx::query_scalar("SELECT username FROM users")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(usernames
            .into_iter()
            .map(|username| User { username })
            .collect())
    }
}
