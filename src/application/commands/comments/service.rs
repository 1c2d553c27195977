use std::sync::Arc;

use crate::domain::comment::CommentRepository;

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
}

impl CommentCommandService {
    pub fn new(comment_repo: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repo }
    }
}
