// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, CommentDto, TopicDto, UserDto};
use crate::presentation::http::controllers::{articles, comments, topics, users};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "newsdesk",
        description = "Read/write API over articles, comments, users, and topics."
    ),
    paths(
        topics::list_topics,
        articles::list_articles,
        articles::get_article,
        articles::patch_article,
        comments::list_article_comments,
        comments::post_article_comment,
        comments::delete_comment,
        users::list_users,
    ),
    components(schemas(
        ArticleDto,
        CommentDto,
        TopicDto,
        UserDto,
        articles::ArticlesBody,
        articles::ArticleBody,
        comments::CommentsBody,
        comments::CommentBody,
        topics::TopicsBody,
        users::UsersBody,
    ))
)]
pub struct ApiDoc;

/// `GET /api` — the endpoint index, served as the OpenAPI document.
pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
