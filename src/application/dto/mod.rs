mod articles;
mod comments;
mod topics;
mod users;

pub use articles::ArticleDto;
pub use comments::CommentDto;
pub use topics::TopicDto;
pub use users::UserDto;
