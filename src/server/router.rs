use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        center::{self, CENTER_TAG},
        cycle::{self, CYCLE_TAG},
        enrollment::{self, ENROLLMENT_TAG},
        player::{self, PLAYER_TAG},
        study::{self, STUDY_TAG},
        team::{self, TEAM_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Teamboard API",
        description = "REST backend for managing league teams, players and enrollments"
    ),
    tags(
        (name = AUTH_TAG, description = "Authentication endpoints"),
        (name = CENTER_TAG, description = "Training center management"),
        (name = CYCLE_TAG, description = "Academic cycle management"),
        (name = STUDY_TAG, description = "Study management"),
        (name = TEAM_TAG, description = "Team management"),
        (name = PLAYER_TAG, description = "Player roster management"),
        (name = ENROLLMENT_TAG, description = "League enrollment review"),
        (name = USER_TAG, description = "User administration")
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// Handlers registered through the OpenAPI router contribute their path
/// documentation and schemas automatically; the collected document is served
/// through Swagger UI at `/swagger-ui`.
pub fn router() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::get_authenticated_user))
        .routes(routes!(center::get_centers, center::create_center))
        .routes(routes!(
            center::get_center,
            center::update_center,
            center::delete_center
        ))
        .routes(routes!(cycle::get_cycles, cycle::create_cycle))
        .routes(routes!(
            cycle::get_cycle,
            cycle::update_cycle,
            cycle::delete_cycle
        ))
        .routes(routes!(study::get_studies, study::create_study))
        .routes(routes!(
            study::get_study,
            study::update_study,
            study::delete_study
        ))
        .routes(routes!(team::get_teams, team::create_team))
        .routes(routes!(
            team::get_team,
            team::update_team,
            team::delete_team
        ))
        .routes(routes!(player::get_players, player::create_player))
        .routes(routes!(
            player::get_player,
            player::update_player,
            player::delete_player
        ))
        .routes(routes!(
            enrollment::get_enrollments,
            enrollment::create_enrollment
        ))
        .routes(routes!(
            enrollment::get_enrollment,
            enrollment::update_enrollment,
            enrollment::delete_enrollment
        ))
        .routes(routes!(user::get_users))
        .routes(routes!(user::set_user_role))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
