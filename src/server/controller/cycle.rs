use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        cycle::{CreateCycleDto, CycleItemDto, CycleListDto, UpdateCycleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::cycle::{CreateCycleParams, Cycle, UpdateCycleParams},
        service::cycle::CycleService,
        state::AppState,
    },
};

/// Tag for grouping cycle endpoints in OpenAPI documentation
pub static CYCLE_TAG: &str = "cycle";

/// Get all academic cycles.
///
/// Public endpoint, no authentication required.
///
/// # Returns
/// - `200 OK` - List of cycles
/// - `204 No Content` - No cycles registered yet
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cycles",
    tag = CYCLE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved cycles", body = CycleListDto),
        (status = 204, description = "No cycles registered yet"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cycles(State(state): State<AppState>) -> Result<Response, AppError> {
    let service = CycleService::new(&state.db);

    let cycles = service.get_all_cycles().await?;

    if cycles.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let dto = CycleListDto {
        success: true,
        message: "Cycles available".to_string(),
        cycles: cycles.into_iter().map(Cycle::into_dto).collect(),
    };

    Ok(Json(dto).into_response())
}

/// Get a single cycle by id.
///
/// Public endpoint, no authentication required.
///
/// # Returns
/// - `200 OK` - The requested cycle
/// - `404 Not Found` - No cycle with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cycles/{id}",
    tag = CYCLE_TAG,
    params(
        ("id" = i32, Path, description = "Cycle id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved cycle", body = CycleItemDto),
        (status = 404, description = "Cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cycle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CycleService::new(&state.db);

    let cycle = service.get_cycle(id).await?;

    let dto = CycleItemDto {
        success: true,
        message: "Cycle found".to_string(),
        cycle: cycle.into_dto(),
    };

    Ok(Json(dto))
}

/// Create a new academic cycle.
///
/// Cycle names are unique.
///
/// # Access Control
/// - `Admin` - Only admins can create cycles
///
/// # Returns
/// - `201 Created` - Successfully created cycle
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `409 Conflict` - A cycle with that name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cycles",
    tag = CYCLE_TAG,
    request_body = CreateCycleDto,
    responses(
        (status = 201, description = "Successfully created cycle", body = CycleItemDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "A cycle with that name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_cycle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCycleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = CycleService::new(&state.db);

    let cycle = service
        .create_cycle(CreateCycleParams { name: payload.name })
        .await?;

    let dto = CycleItemDto {
        success: true,
        message: "Cycle created successfully".to_string(),
        cycle: cycle.into_dto(),
    };

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Update an existing cycle.
///
/// # Access Control
/// - `Admin` - Only admins can update cycles
///
/// # Returns
/// - `200 OK` - Successfully updated cycle
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No cycle with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/cycles/{id}",
    tag = CYCLE_TAG,
    params(
        ("id" = i32, Path, description = "Cycle id")
    ),
    request_body = UpdateCycleDto,
    responses(
        (status = 200, description = "Successfully updated cycle", body = CycleItemDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_cycle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCycleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = CycleService::new(&state.db);

    let cycle = service
        .update_cycle(
            id,
            UpdateCycleParams {
                name: Some(payload.name),
            },
        )
        .await?;

    let dto = CycleItemDto {
        success: true,
        message: "Cycle updated successfully".to_string(),
        cycle: cycle.into_dto(),
    };

    Ok(Json(dto))
}

/// Delete a cycle.
///
/// # Access Control
/// - `Admin` - Only admins can delete cycles
///
/// # Returns
/// - `200 OK` - Successfully deleted cycle
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No cycle with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/cycles/{id}",
    tag = CYCLE_TAG,
    params(
        ("id" = i32, Path, description = "Cycle id")
    ),
    responses(
        (status = 200, description = "Successfully deleted cycle", body = MessageDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_cycle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = CycleService::new(&state.db);

    service.delete_cycle(id).await?;

    let dto = MessageDto {
        success: true,
        message: "Cycle deleted successfully".to_string(),
    };

    Ok(Json(dto))
}
