// tests/support/helpers.rs
use super::mocks;
use axum::body;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;

pub fn make_test_router() -> axum::Router {
    let store = mocks::InMemoryStore::seeded();

    let article_repo: Arc<dyn newsdesk::domain::article::ArticleRepository> =
        Arc::new(mocks::MockArticleRepo::new(Arc::clone(&store)));
    let comment_repo: Arc<dyn newsdesk::domain::comment::CommentRepository> =
        Arc::new(mocks::MockCommentRepo {
            store: Arc::clone(&store),
        });
    let topic_repo: Arc<dyn newsdesk::domain::topic::TopicRepository> =
        Arc::new(mocks::MockTopicRepo {
            store: Arc::clone(&store),
        });
    let user_repo: Arc<dyn newsdesk::domain::user::UserRepository> = Arc::new(mocks::MockUserRepo {
        store: Arc::clone(&store),
    });

    let services = Arc::new(newsdesk::application::services::ApplicationServices::new(
        article_repo,
        comment_repo,
        topic_repo,
        user_repo,
    ));

    let state = newsdesk::presentation::http::state::HttpState { services };
    newsdesk::presentation::http::routes::build_router(state)
}

pub async fn read_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("body is json")
}

pub async fn assert_error_response(response: Response, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    let json = read_json(response).await;
    assert_eq!(
        json.get("message").and_then(Value::as_str),
        Some(message),
        "unexpected error body: {json}"
    );
}
