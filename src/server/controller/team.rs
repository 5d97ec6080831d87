use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        team::{CreateTeamDto, TeamItemDto, TeamListDto, UpdateTeamDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            auth::Ability,
            player::PlayerKind,
            team::{CreateTeamParams, CreateTeamPlayerParams, TeamWithRelations, UpdateTeamParams},
        },
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Get all teams.
///
/// Admins see every team. Everyone else, authenticated or not, only sees
/// teams whose enrollment has been approved. A bearer token may be sent but
/// is not required.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers, inspected for an optional bearer token
///
/// # Returns
/// - `200 OK` - List of teams visible to the caller
/// - `204 No Content` - No visible teams
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved teams", body = TeamListDto),
        (status = 204, description = "No visible teams"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let principal = AuthGuard::new(&state.db, &headers).current_user().await?;

    let service = TeamService::new(&state.db);

    let teams = service.get_all_teams(principal.as_ref()).await?;

    if teams.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let dto = TeamListDto {
        success: true,
        message: "Teams available".to_string(),
        teams: teams.into_iter().map(TeamWithRelations::into_dto).collect(),
    };

    Ok(Json(dto).into_response())
}

/// Get a single team by id.
///
/// Returns the team with its center and roster. Public endpoint, no
/// authentication required.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Id of the team to fetch
///
/// # Returns
/// - `200 OK` - The requested team
/// - `404 Not Found` - No team with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved team", body = TeamItemDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TeamService::new(&state.db);

    let team = service.get_team(id).await?;

    let dto = TeamItemDto {
        success: true,
        message: "Team found".to_string(),
        team: team.into_dto(),
    };

    Ok(Json(dto))
}

/// Create a new team, optionally with an inline roster.
///
/// The center is referenced by name and each roster entry may reference an
/// academic cycle by name, which is resolved to a study. Team names are
/// unique.
///
/// # Access Control
/// - `Coach` - Only coaches can create teams
/// - `team:create` - The token must carry the team creation ability
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Team creation data (name, group, center name, roster)
///
/// # Returns
/// - `201 Created` - Successfully created team
/// - `400 Bad Request` - A roster entry carries an unknown player kind
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller is not a coach or the token lacks `team:create`
/// - `404 Not Found` - Referenced center or cycle does not exist
/// - `409 Conflict` - A team with that name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Successfully created team", body = TeamItemDto),
        (status = 400, description = "Invalid roster entry", body = ErrorDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a coach or the token lacks the ability", body = ErrorDto),
        (status = 404, description = "Referenced center or cycle not found", body = ErrorDto),
        (status = 409, description = "A team with that name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[
            Permission::Coach,
            Permission::Ability(Ability::CreateTeam),
        ])
        .await?;

    let mut players = Vec::with_capacity(payload.players.len());

    for entry in payload.players {
        let kind = PlayerKind::parse(&entry.kind).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown player kind '{}'", entry.kind))
        })?;

        players.push(CreateTeamPlayerParams {
            first_name: entry.first_name,
            first_surname: entry.first_surname,
            second_surname: entry.second_surname,
            kind,
            national_id: entry.national_id,
            email: entry.email,
            phone: entry.phone,
            cycle: entry.cycle,
        });
    }

    let service = TeamService::new(&state.db);

    let team = service
        .create_team(CreateTeamParams {
            name: payload.name,
            group: payload.group,
            center: payload.center,
            players,
        })
        .await?;

    let dto = TeamItemDto {
        success: true,
        message: "Team created successfully".to_string(),
        team: team.into_dto(),
    };

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Update an existing team.
///
/// # Access Control
/// - `Staff` - Admins and coaches may update teams
/// - `team:update:{id}` - The token must be scoped to this team
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Id of the team to update
/// - `payload` - New name and optional group
///
/// # Returns
/// - `200 OK` - Successfully updated team
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller lacks the role or the token scope
/// - `404 Not Found` - No team with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team id")
    ),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Successfully updated team", body = TeamItemDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the role or the token scope", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Staff])
        .await?;

    let service = TeamService::new(&state.db);

    let team = service
        .update_team(
            &principal,
            id,
            UpdateTeamParams {
                name: Some(payload.name),
                group: payload.group,
            },
        )
        .await?;

    let dto = TeamItemDto {
        success: true,
        message: "Team updated successfully".to_string(),
        team: team.into_dto(),
    };

    Ok(Json(dto))
}

/// Delete a team.
///
/// # Access Control
/// - `Staff` - Admins and coaches may delete teams
/// - `team:delete:{id}` - The token must be scoped to this team
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Id of the team to delete
///
/// # Returns
/// - `200 OK` - Successfully deleted team
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller lacks the role or the token scope
/// - `404 Not Found` - No team with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Successfully deleted team", body = MessageDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the role or the token scope", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Staff])
        .await?;

    let service = TeamService::new(&state.db);

    service.delete_team(&principal, id).await?;

    let dto = MessageDto {
        success: true,
        message: "Team deleted successfully".to_string(),
    };

    Ok(Json(dto))
}
