use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: ArticleId,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let article = self
            .article_repo
            .find_by_id(query.id)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found("Article id not found. Please check and try again :)")
            })?;
        Ok(article.into())
    }
}
