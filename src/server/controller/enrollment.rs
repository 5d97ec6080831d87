use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        enrollment::{
            CreateEnrollmentDto, EnrollmentItemDto, EnrollmentListDto, UpdateEnrollmentDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::enrollment::{
            CreateEnrollmentParams, Enrollment, EnrollmentStatus, UpdateEnrollmentParams,
        },
        service::enrollment::EnrollmentService,
        state::AppState,
    },
};

/// Tag for grouping enrollment endpoints in OpenAPI documentation
pub static ENROLLMENT_TAG: &str = "enrollment";

/// Get all enrollments.
///
/// Returns every enrollment regardless of status, for review.
///
/// # Access Control
/// - `Admin` - Only admins can list enrollments
///
/// # Returns
/// - `200 OK` - List of enrollments
/// - `204 No Content` - No enrollments submitted yet
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/enrollments",
    tag = ENROLLMENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved enrollments", body = EnrollmentListDto),
        (status = 204, description = "No enrollments submitted yet"),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_enrollments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = EnrollmentService::new(&state.db);

    let enrollments = service.get_all_enrollments().await?;

    if enrollments.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let dto = EnrollmentListDto {
        success: true,
        message: "Enrollments available".to_string(),
        enrollments: enrollments.into_iter().map(Enrollment::into_dto).collect(),
    };

    Ok(Json(dto).into_response())
}

/// Get a single enrollment by id.
///
/// # Access Control
/// - `Admin` - Only admins can view enrollments
///
/// # Returns
/// - `200 OK` - The requested enrollment
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No enrollment with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/enrollments/{id}",
    tag = ENROLLMENT_TAG,
    params(
        ("id" = i32, Path, description = "Enrollment id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved enrollment", body = EnrollmentItemDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_enrollment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = EnrollmentService::new(&state.db);

    let enrollment = service.get_enrollment(id).await?;

    let dto = EnrollmentItemDto {
        success: true,
        message: "Enrollment found".to_string(),
        enrollment: enrollment.into_dto(),
    };

    Ok(Json(dto))
}

/// Enroll a team into the league.
///
/// New enrollments start out pending until an admin reviews them. Each team
/// may hold at most one enrollment.
///
/// # Access Control
/// - `Coach` - Only coaches can enroll their teams
///
/// # Returns
/// - `201 Created` - Successfully created enrollment
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller is not a coach
/// - `404 Not Found` - No team with that id
/// - `409 Conflict` - The team already has an enrollment
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/enrollments",
    tag = ENROLLMENT_TAG,
    request_body = CreateEnrollmentDto,
    responses(
        (status = 201, description = "Successfully created enrollment", body = EnrollmentItemDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a coach", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "The team already has an enrollment", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_enrollment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateEnrollmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Coach])
        .await?;

    let service = EnrollmentService::new(&state.db);

    let enrollment = service
        .create_enrollment(CreateEnrollmentParams {
            team_id: payload.team_id,
        })
        .await?;

    let dto = EnrollmentItemDto {
        success: true,
        message: "Enrollment created successfully".to_string(),
        enrollment: enrollment.into_dto(),
    };

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Review an enrollment.
///
/// Moves the enrollment to a new status, approving or rejecting the team's
/// participation.
///
/// # Access Control
/// - `Admin` - Only admins can review enrollments
///
/// # Returns
/// - `200 OK` - Successfully updated enrollment
/// - `400 Bad Request` - Unknown enrollment status
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No enrollment with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/enrollments/{id}",
    tag = ENROLLMENT_TAG,
    params(
        ("id" = i32, Path, description = "Enrollment id")
    ),
    request_body = UpdateEnrollmentDto,
    responses(
        (status = 200, description = "Successfully updated enrollment", body = EnrollmentItemDto),
        (status = 400, description = "Unknown enrollment status", body = ErrorDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_enrollment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEnrollmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let status = EnrollmentStatus::parse(&payload.status).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown enrollment status '{}'", payload.status))
    })?;

    let service = EnrollmentService::new(&state.db);

    let enrollment = service
        .update_enrollment(id, UpdateEnrollmentParams { status })
        .await?;

    let dto = EnrollmentItemDto {
        success: true,
        message: "Enrollment updated successfully".to_string(),
        enrollment: enrollment.into_dto(),
    };

    Ok(Json(dto))
}

/// Delete an enrollment.
///
/// # Access Control
/// - `Admin` - Only admins can delete enrollments
///
/// # Returns
/// - `200 OK` - Successfully deleted enrollment
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No enrollment with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/enrollments/{id}",
    tag = ENROLLMENT_TAG,
    params(
        ("id" = i32, Path, description = "Enrollment id")
    ),
    responses(
        (status = 200, description = "Successfully deleted enrollment", body = MessageDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_enrollment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = EnrollmentService::new(&state.db);

    service.delete_enrollment(id).await?;

    let dto = MessageDto {
        success: true,
        message: "Enrollment deleted successfully".to_string(),
    };

    Ok(Json(dto))
}
