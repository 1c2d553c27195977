use crate::application::dto::UserDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct UsersBody {
    pub users: Vec<UserDto>,
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses((status = 200, description = "All registered usernames.", body = UsersBody)),
    tag = "Users"
)]
pub async fn list_users(Extension(state): Extension<HttpState>) -> HttpResult<Json<UsersBody>> {
    let users = state.services.user_queries.list_users().await.into_http()?;

    Ok(Json(UsersBody { users }))
}
