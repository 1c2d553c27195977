// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, comments, topics, users};
use crate::presentation::http::openapi;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{Method, StatusCode},
    routing::{delete, get},
};
use serde_json::{Value, json};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api", get(openapi::serve_openapi))
        .route("/api/topics", get(topics::list_topics))
        .route(
            "/api/articles",
            get(articles::list_articles),
        )
        .route(
            "/api/articles/{id}",
            get(articles::get_article).patch(articles::patch_article),
        )
        .route(
            "/api/articles/{id}/comments",
            get(comments::list_article_comments).post(comments::post_article_comment),
        )
        .route("/api/comments/{id}", delete(comments::delete_comment))
        .route("/api/users", get(users::list_users))
        .fallback(path_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Catch-all for unmatched paths, regardless of method.
async fn path_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Path not found." })),
    )
}
