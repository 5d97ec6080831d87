//! Team service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        center::CenterRepository, enrollment::EnrollmentRepository, player::PlayerRepository,
        team::TeamRepository,
    },
    error::AppError,
    model::{
        auth::{Ability, Principal},
        player::NewPlayerParams,
        team::{CreateTeamParams, TeamWithRelations, UpdateTeamParams},
    },
    service::study::StudyService,
};

/// Service providing business logic for team management.
pub struct TeamService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the teams visible to the caller.
    ///
    /// Admins see every team. Everyone else, including anonymous callers,
    /// only sees teams whose enrollment has been approved.
    ///
    /// # Arguments
    /// * `principal` - The authenticated caller, if any
    ///
    /// # Returns
    /// - `Ok(Vec<TeamWithRelations>)` - The visible teams, empty when none exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_teams(
        &self,
        principal: Option<&Principal>,
    ) -> Result<Vec<TeamWithRelations>, AppError> {
        let team_repo = TeamRepository::new(self.db);

        if principal.is_some_and(|principal| principal.is_admin()) {
            let teams = team_repo.get_all_with_relations().await?;
            return Ok(teams);
        }

        let enrollment_repo = EnrollmentRepository::new(self.db);
        let approved_ids = enrollment_repo.approved_team_ids().await?;
        let teams = team_repo.get_by_ids_with_relations(approved_ids).await?;

        Ok(teams)
    }

    /// Retrieves a single team with its center and roster.
    ///
    /// # Returns
    /// - `Ok(TeamWithRelations)` - The requested team
    /// - `Err(AppError::NotFound)` - No team with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_team(&self, team_id: i32) -> Result<TeamWithRelations, AppError> {
        let team_repo = TeamRepository::new(self.db);

        let team = team_repo
            .get_by_id_with_relations(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        Ok(team)
    }

    /// Creates a team together with its initial roster.
    ///
    /// The center and the cycle of each roster entry are referenced by name.
    /// Every cycle name is resolved before the team row is written so a bad
    /// entry cannot leave a half-populated team behind.
    ///
    /// # Arguments
    /// * `param` - The team fields and roster entries
    ///
    /// # Returns
    /// - `Ok(TeamWithRelations)` - The created team with its roster
    /// - `Err(AppError::NotFound)` - The named center or a named cycle does not exist
    /// - `Err(AppError::Conflict)` - A team with that name already exists
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_team(&self, param: CreateTeamParams) -> Result<TeamWithRelations, AppError> {
        let team_repo = TeamRepository::new(self.db);
        let center_repo = CenterRepository::new(self.db);
        let player_repo = PlayerRepository::new(self.db);
        let study_service = StudyService::new(self.db);

        let center = center_repo
            .find_by_name(&param.center)
            .await?
            .ok_or_else(|| AppError::NotFound("Center not found".to_string()))?;

        if team_repo.find_by_name(&param.name).await?.is_some() {
            return Err(AppError::Conflict(
                "A team with that name already exists".to_string(),
            ));
        }

        // Resolve every cycle name up front so the team is created whole
        let mut study_ids = Vec::with_capacity(param.players.len());
        for entry in &param.players {
            let study_id = match &entry.cycle {
                Some(cycle) => Some(study_service.resolve_cycle_name(cycle).await?.id),
                None => None,
            };
            study_ids.push(study_id);
        }

        let team = team_repo.create(param.name, param.group, center.id).await?;

        for (entry, study_id) in param.players.into_iter().zip(study_ids) {
            player_repo
                .create(NewPlayerParams {
                    first_name: entry.first_name,
                    first_surname: entry.first_surname,
                    second_surname: entry.second_surname,
                    kind: entry.kind,
                    national_id: entry.national_id,
                    email: entry.email,
                    phone: entry.phone,
                    team_id: team.id,
                    study_id,
                })
                .await?;
        }

        let team = team_repo
            .get_by_id_with_relations(team.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        Ok(team)
    }

    /// Updates a team's name and group.
    ///
    /// # Arguments
    /// * `principal` - The authenticated caller
    /// * `team_id` - The id of the team to update
    /// * `param` - The fields to change
    ///
    /// # Returns
    /// - `Ok(TeamWithRelations)` - The updated team
    /// - `Err(AppError::NotFound)` - No team with that id
    /// - `Err(AppError::AuthErr)` - The caller's token cannot update this team
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_team(
        &self,
        principal: &Principal,
        team_id: i32,
        param: UpdateTeamParams,
    ) -> Result<TeamWithRelations, AppError> {
        let team_repo = TeamRepository::new(self.db);

        // Verify the team exists before checking the token scope
        if team_repo.get_by_id(team_id).await?.is_none() {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        principal.require_ability(Ability::UpdateTeam(team_id))?;

        team_repo
            .update(team_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        let team = team_repo
            .get_by_id_with_relations(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        Ok(team)
    }

    /// Deletes a team.
    ///
    /// The roster and any enrollment are removed by the cascading foreign
    /// keys.
    ///
    /// # Arguments
    /// * `principal` - The authenticated caller
    /// * `team_id` - The id of the team to delete
    ///
    /// # Returns
    /// - `Ok(())` - Team deleted
    /// - `Err(AppError::NotFound)` - No team with that id
    /// - `Err(AppError::AuthErr)` - The caller's token cannot delete this team
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_team(&self, principal: &Principal, team_id: i32) -> Result<(), AppError> {
        let team_repo = TeamRepository::new(self.db);

        if team_repo.get_by_id(team_id).await?.is_none() {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        principal.require_ability(Ability::DeleteTeam(team_id))?;

        if !team_repo.delete(team_id).await? {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        Ok(())
    }
}
