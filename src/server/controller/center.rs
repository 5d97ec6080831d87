use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        center::{CenterItemDto, CenterListDto, CreateCenterDto, UpdateCenterDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::center::{Center, CreateCenterParams, UpdateCenterParams},
        service::center::CenterService,
        state::AppState,
    },
};

/// Tag for grouping center endpoints in OpenAPI documentation
pub static CENTER_TAG: &str = "center";

/// Get all centers.
///
/// Returns every registered center. Public endpoint, no authentication
/// required.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of centers
/// - `204 No Content` - No centers registered yet
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/centers",
    tag = CENTER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved centers", body = CenterListDto),
        (status = 204, description = "No centers registered yet"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_centers(State(state): State<AppState>) -> Result<Response, AppError> {
    let service = CenterService::new(&state.db);

    let centers = service.get_all_centers().await?;

    if centers.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let dto = CenterListDto {
        success: true,
        message: "Centers available".to_string(),
        centers: centers.into_iter().map(Center::into_dto).collect(),
    };

    Ok(Json(dto).into_response())
}

/// Get a single center by id.
///
/// Public endpoint, no authentication required.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Id of the center to fetch
///
/// # Returns
/// - `200 OK` - The requested center
/// - `404 Not Found` - No center with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/centers/{id}",
    tag = CENTER_TAG,
    params(
        ("id" = i32, Path, description = "Center id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved center", body = CenterItemDto),
        (status = 404, description = "Center not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_center(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CenterService::new(&state.db);

    let center = service.get_center(id).await?;

    let dto = CenterItemDto {
        success: true,
        message: "Center found".to_string(),
        center: center.into_dto(),
    };

    Ok(Json(dto))
}

/// Create a new center.
///
/// Registers a new training center. Center names are unique.
///
/// # Access Control
/// - `Admin` - Only admins can create centers
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Center creation data (name and optional address)
///
/// # Returns
/// - `201 Created` - Successfully created center
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `409 Conflict` - A center with that name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/centers",
    tag = CENTER_TAG,
    request_body = CreateCenterDto,
    responses(
        (status = 201, description = "Successfully created center", body = CenterItemDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "A center with that name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_center(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCenterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = CenterService::new(&state.db);

    let center = service
        .create_center(CreateCenterParams {
            name: payload.name,
            address: payload.address,
        })
        .await?;

    let dto = CenterItemDto {
        success: true,
        message: "Center created successfully".to_string(),
        center: center.into_dto(),
    };

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Update an existing center.
///
/// # Access Control
/// - `Admin` - Only admins can update centers
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Id of the center to update
/// - `payload` - New name and optional address
///
/// # Returns
/// - `200 OK` - Successfully updated center
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No center with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/centers/{id}",
    tag = CENTER_TAG,
    params(
        ("id" = i32, Path, description = "Center id")
    ),
    request_body = UpdateCenterDto,
    responses(
        (status = 200, description = "Successfully updated center", body = CenterItemDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Center not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_center(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCenterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = CenterService::new(&state.db);

    let center = service
        .update_center(
            id,
            UpdateCenterParams {
                name: Some(payload.name),
                address: payload.address,
            },
        )
        .await?;

    let dto = CenterItemDto {
        success: true,
        message: "Center updated successfully".to_string(),
        center: center.into_dto(),
    };

    Ok(Json(dto))
}

/// Delete a center.
///
/// # Access Control
/// - `Admin` - Only admins can delete centers
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Id of the center to delete
///
/// # Returns
/// - `200 OK` - Successfully deleted center
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No center with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/centers/{id}",
    tag = CENTER_TAG,
    params(
        ("id" = i32, Path, description = "Center id")
    ),
    responses(
        (status = 200, description = "Successfully deleted center", body = MessageDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Center not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_center(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = CenterService::new(&state.db);

    service.delete_center(id).await?;

    let dto = MessageDto {
        success: true,
        message: "Center deleted successfully".to_string(),
    };

    Ok(Json(dto))
}
