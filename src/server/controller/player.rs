use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        player::{CreatePlayerDto, PlayerItemDto, PlayerListDto, UpdatePlayerDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::player::{CreatePlayerParams, PlayerKind, PlayerWithStudy, UpdatePlayerParams},
        service::player::PlayerService,
        state::AppState,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

/// Get all players.
///
/// Returns every player together with their study details. Public endpoint,
/// no authentication required.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of players
/// - `204 No Content` - No players registered yet
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved players", body = PlayerListDto),
        (status = 204, description = "No players registered yet"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players(State(state): State<AppState>) -> Result<Response, AppError> {
    let service = PlayerService::new(&state.db);

    let players = service.get_all_players().await?;

    if players.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let dto = PlayerListDto {
        success: true,
        message: "Players available".to_string(),
        players: players.into_iter().map(PlayerWithStudy::into_dto).collect(),
    };

    Ok(Json(dto).into_response())
}

/// Get a single player by id.
///
/// Public endpoint, no authentication required.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Id of the player to fetch
///
/// # Returns
/// - `200 OK` - The requested player
/// - `404 Not Found` - No player with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i32, Path, description = "Player id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved player", body = PlayerItemDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PlayerService::new(&state.db);

    let player = service.get_player(id).await?;

    let dto = PlayerItemDto {
        success: true,
        message: "Player found".to_string(),
        player: player.into_dto(),
    };

    Ok(Json(dto))
}

/// Add a player to a team.
///
/// The team is referenced by name and the optional cycle name is resolved to
/// a study. A full roster rejects the attempt and revokes the caller's
/// player creation permission until a deletion frees a slot.
///
/// # Access Control
/// - `Coach` - Only coaches can add players
/// - `create_player` - The caller must hold the player creation permission
/// - `player:create:{team_id}` - The token must be scoped to the target team
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Player data with the target team name
///
/// # Returns
/// - `201 Created` - Successfully created player
/// - `400 Bad Request` - Unknown player kind
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller lacks the role, the permission or the token scope
/// - `404 Not Found` - Referenced team or cycle does not exist
/// - `409 Conflict` - The team roster is already full
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/players",
    tag = PLAYER_TAG,
    request_body = CreatePlayerDto,
    responses(
        (status = 201, description = "Successfully created player", body = PlayerItemDto),
        (status = 400, description = "Unknown player kind", body = ErrorDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the role, the permission or the token scope", body = ErrorDto),
        (status = 404, description = "Referenced team or cycle not found", body = ErrorDto),
        (status = 409, description = "The team roster is already full", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Coach, Permission::CreatePlayer])
        .await?;

    let kind = PlayerKind::parse(&payload.kind)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown player kind '{}'", payload.kind)))?;

    let service = PlayerService::new(&state.db);

    let player = service
        .create_player(
            &principal,
            CreatePlayerParams {
                team: payload.team,
                first_name: payload.first_name,
                first_surname: payload.first_surname,
                second_surname: payload.second_surname,
                kind,
                national_id: payload.national_id,
                email: payload.email,
                phone: payload.phone,
                cycle: payload.cycle,
            },
        )
        .await?;

    let dto = PlayerItemDto {
        success: true,
        message: "Player created successfully".to_string(),
        player: player.into_dto(),
    };

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Update an existing player.
///
/// Fields absent from the payload keep their current value. A team name
/// moves the player, the token scope is checked against the team they
/// currently belong to.
///
/// # Access Control
/// - `Staff` - Admins and coaches may update players
/// - `player:update:{team_id}` - The token must be scoped to the player's team
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Id of the player to update
/// - `payload` - The fields to change
///
/// # Returns
/// - `200 OK` - Successfully updated player
/// - `400 Bad Request` - Unknown player kind
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller lacks the role or the token scope
/// - `404 Not Found` - No player with that id, or the named team or cycle
///   does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i32, Path, description = "Player id")
    ),
    request_body = UpdatePlayerDto,
    responses(
        (status = 200, description = "Successfully updated player", body = PlayerItemDto),
        (status = 400, description = "Unknown player kind", body = ErrorDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the role or the token scope", body = ErrorDto),
        (status = 404, description = "Player, team or cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Staff])
        .await?;

    let kind = match &payload.kind {
        Some(kind) => Some(PlayerKind::parse(kind).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown player kind '{kind}'"))
        })?),
        None => None,
    };

    let service = PlayerService::new(&state.db);

    let player = service
        .update_player(
            &principal,
            id,
            UpdatePlayerParams {
                first_name: payload.first_name,
                first_surname: payload.first_surname,
                second_surname: payload.second_surname,
                kind,
                national_id: payload.national_id,
                email: payload.email,
                phone: payload.phone,
                team: payload.team,
                cycle: payload.cycle,
            },
        )
        .await?;

    let dto = PlayerItemDto {
        success: true,
        message: "Player updated successfully".to_string(),
        player: player.into_dto(),
    };

    Ok(Json(dto))
}

/// Remove a player from their team.
///
/// Deleting a player frees a roster slot and grants the player creation
/// permission back to the caller.
///
/// # Access Control
/// - `Staff` - Admins and coaches may remove players
/// - `player:delete:{team_id}` - The token must be scoped to the player's team
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Id of the player to delete
///
/// # Returns
/// - `200 OK` - Successfully deleted player
/// - `401 Unauthorized` - Missing or unknown bearer token
/// - `403 Forbidden` - Caller lacks the role or the token scope
/// - `404 Not Found` - No player with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i32, Path, description = "Player id")
    ),
    responses(
        (status = 200, description = "Successfully deleted player", body = MessageDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the role or the token scope", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Staff])
        .await?;

    let service = PlayerService::new(&state.db);

    service.delete_player(&principal, id).await?;

    let dto = MessageDto {
        success: true,
        message: "Player deleted successfully".to_string(),
    };

    Ok(Json(dto))
}
