pub mod entity;
pub mod listing;
pub mod repository;
pub mod value_objects;

pub use entity::Article;
pub use listing::{ArticleListing, SortKey, SortOrder};
pub use repository::ArticleRepository;
pub use value_objects::ArticleId;
