// src/presentation/http/controllers/users.rs
use crate::application::{commands::users::UpdateProfileCommand, dto::ProfileDto};
use crate::presentation::http::error::{ErrorBody, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, Payload};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

/// Every field is optional; an empty string clears an optional profile
/// field. `portfolio_title*` and `background_image` land on the caller's
/// site metadata record.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub job_title: Option<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub about_me: Option<String>,
    pub about_me_ar: Option<String>,
    pub portfolio_title: Option<String>,
    pub portfolio_title_ar: Option<String>,
    /// Multipart only.
    #[serde(skip)]
    #[schema(value_type = Option<String>, format = Binary)]
    pub background_image: Option<()>,
}

#[utoipa::path(
    get,
    path = "/api/users/profile/",
    responses(
        (status = 200, description = "The caller's profile and site metadata.", body = ProfileDto),
        (status = 401, description = "Not authenticated.", body = ErrorBody)
    ),
    tag = "Users"
)]
pub async fn get_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ProfileDto>> {
    state
        .services
        .user_queries
        .get_profile(Some(&user))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/users/profile/",
    request_body(
        content(
            (UpdateProfileRequest = "application/json"),
            (UpdateProfileRequest = "multipart/form-data")
        )
    ),
    responses(
        (status = 200, description = "Profile updated.", body = ProfileDto),
        (status = 400, description = "Invalid fields or background image.", body = ErrorBody),
        (status = 401, description = "Not authenticated.", body = ErrorBody)
    ),
    tag = "Users"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    mut payload: Payload,
) -> HttpResult<Json<ProfileDto>> {
    let request: UpdateProfileRequest = payload.parse()?;
    let command = UpdateProfileCommand {
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
        job_title: request.job_title,
        phone_number: request.phone_number,
        location: request.location,
        about_me: request.about_me,
        about_me_ar: request.about_me_ar,
        portfolio_title: request.portfolio_title,
        portfolio_title_ar: request.portfolio_title_ar,
        background_image: payload.take_file("background_image"),
    };

    state
        .services
        .user_commands
        .update_profile(Some(&user), command)
        .await
        .into_http()
        .map(Json)
}
