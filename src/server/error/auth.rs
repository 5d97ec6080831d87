use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The bearer token did not match any stored access token.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token did not match any access token")]
    InvalidToken,

    /// The user's role is not permitted to perform the action.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} does not have a role permitted for this action")]
    RoleDenied(i32),

    /// The access token does not carry the ability the action requires.
    ///
    /// The `message` is the client-facing denial text for the attempted
    /// action. Results in a 403 Forbidden response.
    #[error("User {user_id} token is missing the '{scope}' ability")]
    AbilityDenied {
        user_id: i32,
        scope: String,
        message: &'static str,
    },

    /// The user does not hold the named permission.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {user_id} does not have the '{permission}' permission")]
    PermissionDenied { user_id: i32, permission: String },
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing
/// error messages:
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized
/// - `RoleDenied` / `AbilityDenied` / `PermissionDenied` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping
/// client-facing messages generic enough to avoid leaking which check failed
/// beyond what the caller needs to correct the request.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match &self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Authentication required".to_string(),
            ),
            Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Invalid authentication token".to_string(),
            ),
            Self::RoleDenied(_) => (
                StatusCode::FORBIDDEN,
                "You do not have the required role for this action".to_string(),
            ),
            Self::AbilityDenied { message, .. } => (StatusCode::FORBIDDEN, (*message).to_string()),
            Self::PermissionDenied { .. } => (
                StatusCode::FORBIDDEN,
                "You do not have the required permission for this action".to_string(),
            ),
        };

        (
            status,
            Json(ErrorDto {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}
