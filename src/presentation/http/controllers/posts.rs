// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand, policy},
    dto::PostDto,
};
use crate::presentation::http::error::{ErrorBody, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, MaybeAuthenticated, lenient};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// One of `photography`, `video`, `branding`, `design`.
    pub category: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::double_option")]
    #[schema(value_type = Option<String>)]
    pub subtitle: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::double_option")]
    #[schema(value_type = Option<String>)]
    pub category: Option<Option<String>>,
    pub body: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/posts/",
    responses(
        (status = 200, description = "The caller's posts, newest first.", body = [PostDto]),
        (status = 401, description = "Not authenticated.", body = ErrorBody)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
) -> HttpResult<Json<Vec<PostDto>>> {
    state
        .services
        .post_queries
        .list_posts(actor.user())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/posts/",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created for the caller.", body = PostDto),
        (status = 400, description = "Invalid fields.", body = ErrorBody),
        (status = 401, description = "Not authenticated.", body = ErrorBody)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    body: Result<ApiJson<CreatePostRequest>, HttpError>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let ApiJson(request) = actor.admit(&policy::AUTHOR, body)?;
    let command = CreatePostCommand {
        title: request.title,
        subtitle: request.subtitle,
        category: request.category,
        body: request.body,
    };
    let post = state
        .services
        .post_commands
        .create_post(actor.user(), command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    get,
    path = "/api/posts/{id}/",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post.", body = PostDto),
        (status = 403, description = "Another user's post.", body = ErrorBody),
        (status = 404, description = "No such post.", body = ErrorBody)
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post(actor.user(), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/posts/{id}/",
    params(("id" = i64, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated.", body = PostDto),
        (status = 400, description = "Invalid fields.", body = ErrorBody),
        (status = 403, description = "Another user's post.", body = ErrorBody),
        (status = 404, description = "No such post.", body = ErrorBody)
    ),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
    body: Result<ApiJson<UpdatePostRequest>, HttpError>,
) -> HttpResult<Json<PostDto>> {
    let ApiJson(request) = actor.admit(&policy::OWNER, body)?;
    let command = UpdatePostCommand {
        id,
        title: request.title,
        subtitle: request.subtitle,
        category: request.category,
        body: request.body,
    };
    state
        .services
        .post_commands
        .update_post(actor.user(), command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/posts/{id}/",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted."),
        (status = 403, description = "Another user's post.", body = ErrorBody),
        (status = 404, description = "No such post.", body = ErrorBody)
    ),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .post_commands
        .delete_post(actor.user(), DeletePostCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
