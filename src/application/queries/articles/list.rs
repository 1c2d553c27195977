use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleListing,
};

pub struct ListArticlesQuery {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub topic: Option<String>,
}

impl ArticleQueryService {
    /// Validate listing parameters and execute the aggregate query.
    /// Validation runs in the fixed order sort, then order, then topic;
    /// the first failure is the one reported.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let listing = ArticleListing::build(query.sort_by.as_deref(), query.order.as_deref())?;

        let listing = match query.topic {
            Some(topic) => {
                if !self.topic_repo.slug_exists(&topic).await? {
                    return Err(ApplicationError::validation("Invalid topic query"));
                }
                listing.with_topic(topic)
            }
            None => listing,
        };

        let articles = self.article_repo.list(&listing).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
