use std::sync::Arc;

use crate::domain::article::ArticleRepository;

pub struct ArticleCommandService {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
}

impl ArticleCommandService {
    pub fn new(article_repo: Arc<dyn ArticleRepository>) -> Self {
        Self { article_repo }
    }
}
