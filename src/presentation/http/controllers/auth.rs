// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{
        ChangePasswordCommand, LoginUserCommand, RefreshTokenCommand, VerifyTokenCommand,
    },
    dto::{DetailDto, LoginResponseDto, RefreshResponseDto, UserDto},
};
use crate::domain::message::MessageKey;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, Authenticated, RequestLocale};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RefreshTokenRequest {
    #[serde(default)]
    pub refresh: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyTokenRequest {
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub old_password: String,
    #[serde(default)]
    pub new_password: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/login/",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted.", body = LoginResponseDto),
        (status = 400, description = "Invalid credentials.", body = crate::presentation::http::error::ErrorBody)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> HttpResult<Json<LoginResponseDto>> {
    let command = LoginUserCommand {
        username: payload.username,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/auth/logout/",
    responses(
        (status = 204, description = "Logged out; tokens simply expire."),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<StatusCode> {
    state
        .services
        .user_commands
        .logout(Some(&user))
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/auth/me/",
    responses(
        (status = 200, description = "The authenticated user.", body = UserDto),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn me(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .me(Some(&user))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/auth/password-change/",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed.", body = DetailDto),
        (status = 400, description = "Wrong old password or weak new password.", body = crate::presentation::http::error::ErrorBody),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn change_password(
    Extension(state): Extension<HttpState>,
    RequestLocale(locale): RequestLocale,
    Authenticated(user): Authenticated,
    ApiJson(payload): ApiJson<ChangePasswordRequest>,
) -> HttpResult<Json<DetailDto>> {
    let command = ChangePasswordCommand {
        old_password: payload.old_password,
        new_password: payload.new_password,
    };

    state
        .services
        .user_commands
        .change_password(Some(&user), command)
        .await
        .into_http()?;

    let detail = state
        .services
        .translator()
        .translate(&MessageKey::PasswordChanged.into(), locale);
    Ok(Json(DetailDto { detail }))
}

#[utoipa::path(
    post,
    path = "/api/auth/token/refresh/",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "A new access token.", body = RefreshResponseDto),
        (status = 401, description = "Invalid refresh token.", body = crate::presentation::http::error::ErrorBody)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn refresh_token(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<RefreshTokenRequest>,
) -> HttpResult<Json<RefreshResponseDto>> {
    state
        .services
        .user_commands
        .refresh_token(RefreshTokenCommand {
            refresh: payload.refresh,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/auth/token/verify/",
    request_body = VerifyTokenRequest,
    responses(
        (status = 200, description = "The token is valid."),
        (status = 401, description = "The token is invalid or expired.", body = crate::presentation::http::error::ErrorBody)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn verify_token(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<VerifyTokenRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .user_commands
        .verify_token(VerifyTokenCommand {
            token: payload.token,
        })
        .await
        .into_http()?;
    Ok(Json(serde_json::json!({})))
}
