// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::IncrementVotesCommand,
    dto::ArticleDto,
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::domain::article::ArticleId;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PatchArticleRequest {
    pub inc_votes: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArticlesBody {
    pub articles: Vec<ArticleDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleBody {
    pub article: ArticleDto,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(
        ("sort_by" = Option<String>, Query, description = "Column to sort by."),
        ("order" = Option<String>, Query, description = "asc or desc."),
        ("topic" = Option<String>, Query, description = "Filter by topic slug.")
    ),
    responses(
        (status = 200, description = "Articles with derived comment counts.", body = ArticlesBody),
        (status = 400, description = "Invalid sort, order, or topic query.")
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticlesBody>> {
    let articles = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            sort_by: params.sort_by,
            order: params.order,
            topic: params.topic,
        })
        .await
        .into_http()?;

    Ok(Json(ArticlesBody { articles }))
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier.")),
    responses(
        (status = 200, description = "A single article with comment count.", body = ArticleBody),
        (status = 400, description = "Non-numeric identifier."),
        (status = 404, description = "No article with that identifier.")
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleBody>> {
    let id = parse_article_id(&id)?;

    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    Ok(Json(ArticleBody { article }))
}

#[utoipa::path(
    patch,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier.")),
    responses(
        (status = 200, description = "Article with the vote delta applied.", body = ArticleBody),
        (status = 400, description = "Missing inc_votes or non-numeric identifier."),
        (status = 404, description = "No article with that identifier.")
    ),
    tag = "Articles"
)]
pub async fn patch_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<PatchArticleRequest>,
) -> HttpResult<Json<ArticleBody>> {
    let id = parse_article_id(&id)?;

    let article = state
        .services
        .article_commands
        .increment_votes(IncrementVotesCommand {
            id,
            inc_votes: payload.inc_votes,
        })
        .await
        .into_http()?;

    Ok(Json(ArticleBody { article }))
}

/// Path identifiers arrive as raw text so a non-numeric value is classified
/// like any other malformed identifier instead of being rejected by the
/// extractor with a different shape.
pub(super) fn parse_article_id(raw: &str) -> HttpResult<ArticleId> {
    ArticleId::parse(raw).into_http()
}
