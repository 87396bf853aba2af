// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{
        CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand, policy,
    },
    dto::CategoryDto,
};
use crate::presentation::http::error::{ErrorBody, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, MaybeAuthenticated, lenient};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

/// A `slug` sent by the client is ignored; it is derived from `name` once.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub name_ar: Option<String>,
    #[serde(default, deserialize_with = "lenient::double_option")]
    #[schema(value_type = Option<String>)]
    pub icon: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::double_option")]
    #[schema(value_type = Option<String>)]
    pub description_ar: Option<Option<String>>,
    pub features: Option<Vec<String>>,
    pub order: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/portfolio/categories/",
    responses(
        (status = 200, description = "All categories ordered by (order, name).", body = [CategoryDto])
    ),
    security(()),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories(actor.user())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/portfolio/categories/{id}/",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category.", body = CategoryDto),
        (status = 404, description = "No such category.", body = ErrorBody)
    ),
    security(()),
    tag = "Categories"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category(actor.user(), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/portfolio/categories/",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 400, description = "Invalid names or duplicate category.", body = ErrorBody),
        (status = 401, description = "Not authenticated.", body = ErrorBody),
        (status = 403, description = "Not a superuser.", body = ErrorBody)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    body: Result<ApiJson<CreateCategoryRequest>, HttpError>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let ApiJson(payload) = actor.admit(&policy::CREATE, body)?;
    let command = CreateCategoryCommand {
        name: payload.name,
        name_ar: payload.name_ar,
        icon: payload.icon,
        description: payload.description,
        description_ar: payload.description_ar,
        features: payload.features,
        order: payload.order,
    };

    let category = state
        .services
        .category_commands
        .create_category(actor.user(), command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    put,
    path = "/api/portfolio/categories/{id}/",
    params(("id" = i64, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated; the slug never changes.", body = CategoryDto),
        (status = 400, description = "Invalid field values.", body = ErrorBody),
        (status = 403, description = "Not the owning superuser.", body = ErrorBody),
        (status = 404, description = "No such category.", body = ErrorBody)
    ),
    tag = "Categories"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
    body: Result<ApiJson<UpdateCategoryRequest>, HttpError>,
) -> HttpResult<Json<CategoryDto>> {
    let ApiJson(payload) = actor.admit(&policy::MODIFY, body)?;
    let command = UpdateCategoryCommand {
        id,
        name: payload.name,
        name_ar: payload.name_ar,
        icon: payload.icon,
        description: payload.description,
        description_ar: payload.description_ar,
        features: payload.features,
        order: payload.order,
    };

    state
        .services
        .category_commands
        .update_category(actor.user(), command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/portfolio/categories/{id}/",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted."),
        (status = 400, description = "Portfolios still reference the category.", body = ErrorBody),
        (status = 403, description = "Not the owning superuser.", body = ErrorBody),
        (status = 404, description = "No such category.", body = ErrorBody)
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .category_commands
        .delete_category(actor.user(), DeleteCategoryCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
