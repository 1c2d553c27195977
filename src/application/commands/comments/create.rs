use super::CommentCommandService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::{article::ArticleId, comment::NewComment},
};

pub struct CreateCommentCommand {
    pub article_id: ArticleId,
    pub username: Option<String>,
    pub body: Option<String>,
}

impl CommentCommandService {
    /// Insert a comment. No pre-validation here: a missing username or body
    /// surfaces as the storage layer's not-null violation, an unknown author
    /// or article as a foreign-key violation, both classified at the
    /// HTTP boundary.
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let comment = self
            .comment_repo
            .insert(NewComment {
                article_id: command.article_id,
                author: command.username,
                body: command.body,
            })
            .await?;

        Ok(comment.into())
    }
}
