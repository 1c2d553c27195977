use super::CommentQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct ListCommentsQuery {
    pub article_id: ArticleId,
}

impl CommentQueryService {
    /// List an article's comments. The article is probed first so a missing
    /// article is a 404 while an article with no comments is an empty list.
    pub async fn list_for_article(
        &self,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        if !self.article_repo.exists(query.article_id).await? {
            return Err(ApplicationError::not_found("Article not found"));
        }

        let comments = self.comment_repo.list_by_article(query.article_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
