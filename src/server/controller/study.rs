use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        study::{CreateStudyDto, StudyItemDto, StudyListDto, UpdateStudyDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::study::{CreateStudyParams, StudyWithRelations, UpdateStudyParams},
        service::study::StudyService,
        state::AppState,
    },
};

/// Tag for grouping study endpoints in OpenAPI documentation
pub static STUDY_TAG: &str = "study";

/// Get all studies.
///
/// Returns every study with its center and cycle. Public endpoint, no
/// authentication required.
///
/// # Returns
/// - `200 OK` - List of studies
/// - `204 No Content` - No studies registered yet
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/studies",
    tag = STUDY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved studies", body = StudyListDto),
        (status = 204, description = "No studies registered yet"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_studies(State(state): State<AppState>) -> Result<Response, AppError> {
    let service = StudyService::new(&state.db);

    let studies = service.get_all_studies().await?;

    if studies.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let dto = StudyListDto {
        success: true,
        message: "Studies available".to_string(),
        studies: studies
            .into_iter()
            .map(StudyWithRelations::into_dto)
            .collect(),
    };

    Ok(Json(dto).into_response())
}

/// Get a single study by id.
///
/// Public endpoint, no authentication required.
///
/// # Returns
/// - `200 OK` - The requested study
/// - `404 Not Found` - No study with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/studies/{id}",
    tag = STUDY_TAG,
    params(
        ("id" = i32, Path, description = "Study id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved study", body = StudyItemDto),
        (status = 404, description = "Study not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_study(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudyService::new(&state.db);

    let study = service.get_study(id).await?;

    let dto = StudyItemDto {
        success: true,
        message: "Study found".to_string(),
        study: study.into_dto(),
    };

    Ok(Json(dto))
}

/// Create a new study.
///
/// Links an academic cycle to the center offering it for a given course
/// year. Both the center and the cycle must already exist.
///
/// # Access Control
/// - `Admin` - Only admins can create studies
///
/// # Returns
/// - `201 Created` - Successfully created study
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Referenced center or cycle does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/studies",
    tag = STUDY_TAG,
    request_body = CreateStudyDto,
    responses(
        (status = 201, description = "Successfully created study", body = StudyItemDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Referenced center or cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_study(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateStudyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = StudyService::new(&state.db);

    let study = service
        .create_study(CreateStudyParams {
            center_id: payload.center_id,
            cycle_id: payload.cycle_id,
            course: payload.course,
        })
        .await?;

    let dto = StudyItemDto {
        success: true,
        message: "Study created successfully".to_string(),
        study: study.into_dto(),
    };

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Update an existing study.
///
/// Fields absent from the payload keep their current value. A changed
/// center or cycle reference must point at an existing row.
///
/// # Access Control
/// - `Admin` - Only admins can update studies
///
/// # Returns
/// - `200 OK` - Successfully updated study
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Study, center or cycle not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/studies/{id}",
    tag = STUDY_TAG,
    params(
        ("id" = i32, Path, description = "Study id")
    ),
    request_body = UpdateStudyDto,
    responses(
        (status = 200, description = "Successfully updated study", body = StudyItemDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Study, center or cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_study(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStudyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = StudyService::new(&state.db);

    let study = service
        .update_study(
            id,
            UpdateStudyParams {
                center_id: payload.center_id,
                cycle_id: payload.cycle_id,
                course: payload.course,
            },
        )
        .await?;

    let dto = StudyItemDto {
        success: true,
        message: "Study updated successfully".to_string(),
        study: study.into_dto(),
    };

    Ok(Json(dto))
}

/// Delete a study.
///
/// # Access Control
/// - `Admin` - Only admins can delete studies
///
/// # Returns
/// - `200 OK` - Successfully deleted study
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No study with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/studies/{id}",
    tag = STUDY_TAG,
    params(
        ("id" = i32, Path, description = "Study id")
    ),
    responses(
        (status = 200, description = "Successfully deleted study", body = MessageDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Study not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_study(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = StudyService::new(&state.db);

    service.delete_study(id).await?;

    let dto = MessageDto {
        success: true,
        message: "Study deleted successfully".to_string(),
    };

    Ok(Json(dto))
}
