use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, user::UserItemDto},
    server::{error::AppError, middleware::auth::AuthGuard, state::AppState},
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Get the authenticated user.
///
/// Resolves the bearer token to the account it belongs to. Any valid token
/// works here, no role or ability is required.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - The authenticated user
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Successfully retrieved authenticated user", body = UserItemDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_authenticated_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let dto = UserItemDto {
        success: true,
        message: "User found".to_string(),
        user: principal.user.into_dto(),
    };

    Ok(Json(dto))
}
