use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct IncrementVotesCommand {
    pub id: ArticleId,
    pub inc_votes: Option<i32>,
}

impl ArticleCommandService {
    /// Apply a vote delta as a single atomic update. An absent or zero delta
    /// is rejected before any storage access. Votes have no floor.
    pub async fn increment_votes(
        &self,
        command: IncrementVotesCommand,
    ) -> ApplicationResult<ArticleDto> {
        let delta = match command.inc_votes {
            Some(delta) if delta != 0 => delta,
            _ => return Err(ApplicationError::validation("Please include missing fields")),
        };

        let article = self
            .article_repo
            .increment_votes(command.id, delta)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found("Article id not found. Please check and try again :)")
            })?;

        Ok(article.into())
    }
}
