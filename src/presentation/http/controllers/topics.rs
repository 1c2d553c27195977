use crate::application::dto::TopicDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct TopicsBody {
    pub topics: Vec<TopicDto>,
}

#[utoipa::path(
    get,
    path = "/api/topics",
    responses(
        (status = 200, description = "All topic slugs and descriptions.", body = TopicsBody)
    ),
    tag = "Topics"
)]
pub async fn list_topics(Extension(state): Extension<HttpState>) -> HttpResult<Json<TopicsBody>> {
    let topics = state
        .services
        .topic_queries
        .list_topics()
        .await
        .into_http()?;

    Ok(Json(TopicsBody { topics }))
}
