// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand},
    dto::CommentDto,
    queries::comments::ListCommentsQuery,
};
use crate::domain::comment::CommentId;
use crate::presentation::http::controllers::articles::parse_article_id;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentsBody {
    pub comments: Vec<CommentDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentBody {
    pub comment: CommentDto,
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article identifier.")),
    responses(
        (status = 200, description = "Comments for the article; empty when it has none.", body = CommentsBody),
        (status = 400, description = "Non-numeric identifier."),
        (status = 404, description = "No article with that identifier.")
    ),
    tag = "Comments"
)]
pub async fn list_article_comments(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<CommentsBody>> {
    let article_id = parse_article_id(&id)?;

    let comments = state
        .services
        .comment_queries
        .list_for_article(ListCommentsQuery { article_id })
        .await
        .into_http()?;

    Ok(Json(CommentsBody { comments }))
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article identifier.")),
    responses(
        (status = 201, description = "The created comment.", body = CommentBody),
        (status = 400, description = "Missing username or body."),
        (status = 404, description = "Unknown article or author.")
    ),
    tag = "Comments"
)]
pub async fn post_article_comment(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentBody>)> {
    let article_id = parse_article_id(&id)?;

    let comment = state
        .services
        .comment_commands
        .create_comment(CreateCommentCommand {
            article_id,
            username: payload.username,
            body: payload.body,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(CommentBody { comment })))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    params(("id" = i64, Path, description = "Comment identifier.")),
    responses(
        (status = 204, description = "Comment deleted."),
        (status = 400, description = "Non-numeric identifier."),
        (status = 404, description = "No comment with that identifier.")
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    let id = CommentId::parse(&id).into_http()?;

    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
