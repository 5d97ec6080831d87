//! Player service for business logic.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        player::PlayerRepository, study::StudyRepository, team::TeamRepository,
        user_permission::UserPermissionRepository,
    },
    error::AppError,
    model::{
        auth::{Ability, Principal, CREATE_PLAYER_PERMISSION},
        player::{
            CreatePlayerParams, NewPlayerParams, PlayerWithStudy, UpdatePlayerFields,
            UpdatePlayerParams,
        },
        study::StudyWithRelations,
        team::ROSTER_CAP,
    },
    service::study::StudyService,
};

/// Service providing business logic for player management.
pub struct PlayerService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all players with their study details.
    ///
    /// # Returns
    /// - `Ok(Vec<PlayerWithStudy>)` - All players, empty when none exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_players(&self) -> Result<Vec<PlayerWithStudy>, AppError> {
        let player_repo = PlayerRepository::new(self.db);
        let study_repo = StudyRepository::new(self.db);

        let players = player_repo.get_all().await?;

        let study_ids = players
            .iter()
            .filter_map(|player| player.study_id)
            .collect::<Vec<i32>>();
        let studies_by_id = study_repo
            .get_by_ids_with_relations(study_ids)
            .await?
            .into_iter()
            .map(|study| (study.study.id, study))
            .collect::<HashMap<i32, StudyWithRelations>>();

        let players = players
            .into_iter()
            .map(|player| {
                let study = player
                    .study_id
                    .and_then(|study_id| studies_by_id.get(&study_id).cloned());
                PlayerWithStudy { player, study }
            })
            .collect();

        Ok(players)
    }

    /// Retrieves a single player with their study details.
    ///
    /// # Returns
    /// - `Ok(PlayerWithStudy)` - The requested player
    /// - `Err(AppError::NotFound)` - No player with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_player(&self, player_id: i32) -> Result<PlayerWithStudy, AppError> {
        let player_repo = PlayerRepository::new(self.db);
        let study_repo = StudyRepository::new(self.db);

        let player = player_repo
            .get_by_id(player_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;

        let study = match player.study_id {
            Some(study_id) => study_repo.get_by_id_with_relations(study_id).await?,
            None => None,
        };

        Ok(PlayerWithStudy { player, study })
    }

    /// Adds a player to a team, referenced by team name.
    ///
    /// The roster cap is enforced here, a full roster rejects the attempt and
    /// revokes the caller's create permission so further attempts fail at the
    /// handler gate until a deletion grants it back.
    ///
    /// # Arguments
    /// * `principal` - The authenticated caller
    /// * `param` - The player fields, team name and optional cycle name
    ///
    /// # Returns
    /// - `Ok(PlayerWithStudy)` - The created player
    /// - `Err(AppError::NotFound)` - The named team or cycle does not exist
    /// - `Err(AppError::AuthErr)` - The token is not scoped to the team
    /// - `Err(AppError::Conflict)` - The team roster is already full
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_player(
        &self,
        principal: &Principal,
        param: CreatePlayerParams,
    ) -> Result<PlayerWithStudy, AppError> {
        let player_repo = PlayerRepository::new(self.db);
        let team_repo = TeamRepository::new(self.db);
        let permission_repo = UserPermissionRepository::new(self.db);
        let study_service = StudyService::new(self.db);

        let team = team_repo
            .find_by_name(&param.team)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        principal.require_ability(Ability::CreatePlayer(team.id))?;

        if player_repo.count_by_team(team.id).await? >= ROSTER_CAP {
            permission_repo
                .revoke(principal.user.id, CREATE_PLAYER_PERMISSION)
                .await?;
            return Err(AppError::Conflict(
                "The team roster is already full".to_string(),
            ));
        }

        let study_id = match &param.cycle {
            Some(cycle) => Some(study_service.resolve_cycle_name(cycle).await?.id),
            None => None,
        };

        let player = player_repo
            .create(NewPlayerParams {
                first_name: param.first_name,
                first_surname: param.first_surname,
                second_surname: param.second_surname,
                kind: param.kind,
                national_id: param.national_id,
                email: param.email,
                phone: param.phone,
                team_id: team.id,
                study_id,
            })
            .await?;

        self.get_player(player.id).await
    }

    /// Updates a player, optionally moving them to another team.
    ///
    /// The token scope is checked against the team the player currently
    /// belongs to.
    ///
    /// # Arguments
    /// * `principal` - The authenticated caller
    /// * `player_id` - The id of the player to update
    /// * `param` - The fields to change, team and cycle by name
    ///
    /// # Returns
    /// - `Ok(PlayerWithStudy)` - The updated player
    /// - `Err(AppError::NotFound)` - No player with that id, or the named
    ///   team or cycle does not exist
    /// - `Err(AppError::AuthErr)` - The caller's token cannot update players
    ///   on this team
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_player(
        &self,
        principal: &Principal,
        player_id: i32,
        param: UpdatePlayerParams,
    ) -> Result<PlayerWithStudy, AppError> {
        let player_repo = PlayerRepository::new(self.db);
        let team_repo = TeamRepository::new(self.db);
        let study_service = StudyService::new(self.db);

        let player = player_repo
            .get_by_id(player_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;

        principal.require_ability(Ability::UpdatePlayer(player.team_id))?;

        let team_id = match &param.team {
            Some(team) => {
                let team = team_repo
                    .find_by_name(team)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;
                Some(team.id)
            }
            None => None,
        };

        let study_id = match &param.cycle {
            Some(cycle) => Some(study_service.resolve_cycle_name(cycle).await?.id),
            None => None,
        };

        player_repo
            .update(
                player_id,
                UpdatePlayerFields {
                    first_name: param.first_name,
                    first_surname: param.first_surname,
                    second_surname: param.second_surname,
                    kind: param.kind,
                    national_id: param.national_id,
                    email: param.email,
                    phone: param.phone,
                    team_id,
                    study_id,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;

        self.get_player(player_id).await
    }

    /// Removes a player from their team.
    ///
    /// Deleting a player frees a roster slot, so the create permission is
    /// granted back to the caller.
    ///
    /// # Arguments
    /// * `principal` - The authenticated caller
    /// * `player_id` - The id of the player to delete
    ///
    /// # Returns
    /// - `Ok(())` - Player deleted
    /// - `Err(AppError::NotFound)` - No player with that id
    /// - `Err(AppError::AuthErr)` - The caller's token cannot remove players
    ///   from this team
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_player(
        &self,
        principal: &Principal,
        player_id: i32,
    ) -> Result<(), AppError> {
        let player_repo = PlayerRepository::new(self.db);
        let permission_repo = UserPermissionRepository::new(self.db);

        let player = player_repo
            .get_by_id(player_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;

        principal.require_ability(Ability::DeletePlayer(player.team_id))?;

        if !player_repo.delete(player_id).await? {
            return Err(AppError::NotFound("Player not found".to_string()));
        }

        permission_repo
            .grant(principal.user.id, CREATE_PLAYER_PERMISSION)
            .await?;

        Ok(())
    }
}
