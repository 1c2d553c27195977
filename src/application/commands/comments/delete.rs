use super::CommentCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::comment::CommentId,
};

pub struct DeleteCommentCommand {
    pub id: CommentId,
}

impl CommentCommandService {
    /// Existence probe first, then hard delete. The removed row is discarded;
    /// the boundary reports success with no content.
    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        if !self.comment_repo.exists(command.id).await? {
            return Err(ApplicationError::not_found("Comment not found"));
        }

        self.comment_repo.delete(command.id).await?;
        Ok(())
    }
}
