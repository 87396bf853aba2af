// src/presentation/http/controllers/images.rs
use crate::application::{
    commands::portfolios::{AddPortfolioImageCommand, DeletePortfolioImageCommand, policy},
    dto::PortfolioImageDto,
};
use crate::presentation::http::error::{ErrorBody, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{MaybeAuthenticated, Payload};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddImageRequest {
    #[schema(value_type = String, format = Binary)]
    #[serde(skip)]
    pub image: (),
    pub caption: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/portfolio/{id}/images/",
    params(("id" = i64, Path, description = "Portfolio id")),
    responses(
        (status = 200, description = "Gallery images in upload order.", body = [PortfolioImageDto]),
        (status = 404, description = "No such portfolio.", body = ErrorBody)
    ),
    security(()),
    tag = "Portfolio images"
)]
pub async fn list_images(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(portfolio_id): Path<i64>,
) -> HttpResult<Json<Vec<PortfolioImageDto>>> {
    state
        .services
        .portfolio_queries
        .list_images(actor.user(), portfolio_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/portfolio/{id}/images/",
    params(("id" = i64, Path, description = "Portfolio id")),
    request_body(content = AddImageRequest, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image attached.", body = PortfolioImageDto),
        (status = 400, description = "Missing, invalid or oversized image.", body = ErrorBody),
        (status = 403, description = "Not a superuser.", body = ErrorBody),
        (status = 404, description = "No such portfolio.", body = ErrorBody)
    ),
    tag = "Portfolio images"
)]
pub async fn add_image(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(portfolio_id): Path<i64>,
    body: Result<Payload, HttpError>,
) -> HttpResult<(StatusCode, Json<PortfolioImageDto>)> {
    let mut payload = actor.admit(&policy::MANAGE, body)?;
    let request: AddImageRequest = payload.parse()?;
    let command = AddPortfolioImageCommand {
        portfolio_id,
        image: payload.take_file("image"),
        caption: request.caption,
    };

    let image = state
        .services
        .portfolio_commands
        .add_image(actor.user(), command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(image)))
}

#[utoipa::path(
    get,
    path = "/api/portfolio/{id}/images/{image_id}/",
    params(
        ("id" = i64, Path, description = "Portfolio id"),
        ("image_id" = i64, Path, description = "Image id")
    ),
    responses(
        (status = 200, description = "The image.", body = PortfolioImageDto),
        (status = 404, description = "No such image on this portfolio.", body = ErrorBody)
    ),
    security(()),
    tag = "Portfolio images"
)]
pub async fn get_image(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path((portfolio_id, image_id)): Path<(i64, i64)>,
) -> HttpResult<Json<PortfolioImageDto>> {
    state
        .services
        .portfolio_queries
        .get_image(actor.user(), portfolio_id, image_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/portfolio/{id}/images/{image_id}/",
    params(
        ("id" = i64, Path, description = "Portfolio id"),
        ("image_id" = i64, Path, description = "Image id")
    ),
    responses(
        (status = 204, description = "Image deleted."),
        (status = 403, description = "Not a superuser.", body = ErrorBody),
        (status = 404, description = "No such image on this portfolio.", body = ErrorBody)
    ),
    tag = "Portfolio images"
)]
pub async fn delete_image(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path((portfolio_id, image_id)): Path<(i64, i64)>,
) -> HttpResult<StatusCode> {
    state
        .services
        .portfolio_commands
        .delete_image(
            actor.user(),
            DeletePortfolioImageCommand {
                portfolio_id,
                image_id,
            },
        )
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
