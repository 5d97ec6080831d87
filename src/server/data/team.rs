//! Team data repository for database operations.
//!
//! List and detail queries load each team's center and roster in bulk so
//! responses can embed them without per-row round trips.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::center::Center;
use crate::server::model::player::Player;
use crate::server::model::team::{Team, TeamWithRelations, UpdateTeamParams};

/// Repository providing database operations for teams.
pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new team.
    ///
    /// The roster is inserted separately through the player repository.
    ///
    /// # Arguments
    /// - `name` - Unique team name
    /// - `group` - Optional bracket or division label
    /// - `center_id` - Center the team belongs to
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(DbErr)` - Database error during insert, e.g. a duplicate name
    pub async fn create(
        &self,
        name: String,
        group: Option<String>,
        center_id: i32,
    ) -> Result<Team, DbErr> {
        let entity = entity::team::ActiveModel {
            name: ActiveValue::Set(name),
            group: ActiveValue::Set(group),
            center_id: ActiveValue::Set(center_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    /// Gets all teams with their center and roster.
    ///
    /// # Returns
    /// - `Ok(Vec<TeamWithRelations>)` - All teams ordered by name
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_with_relations(&self) -> Result<Vec<TeamWithRelations>, DbErr> {
        let entities = entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        self.load_relations(entities).await
    }

    /// Gets the teams with the given ids, with their center and roster.
    ///
    /// Used to restrict listings to the teams a caller may see, e.g. teams
    /// with an approved enrollment.
    ///
    /// # Returns
    /// - `Ok(Vec<TeamWithRelations>)` - Matching teams ordered by name
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_ids_with_relations(
        &self,
        team_ids: Vec<i32>,
    ) -> Result<Vec<TeamWithRelations>, DbErr> {
        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(team_ids))
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        self.load_relations(entities).await
    }

    /// Gets a team by its id without loading relations.
    pub async fn get_by_id(&self, team_id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(team_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Gets a team by id with its center and roster.
    ///
    /// # Returns
    /// - `Ok(Some(TeamWithRelations))` - Team found
    /// - `Ok(None)` - No team with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id_with_relations(
        &self,
        team_id: i32,
    ) -> Result<Option<TeamWithRelations>, DbErr> {
        let entity = match entity::prelude::Team::find_by_id(team_id)
            .one(self.db)
            .await?
        {
            Some(entity) => entity,
            None => return Ok(None),
        };

        let mut teams = self.load_relations(vec![entity]).await?;

        Ok(teams.pop())
    }

    /// Finds a team by its exact name.
    ///
    /// Used when player requests reference the owning team by name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find()
            .filter(entity::team::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Updates a team, leaving `None` fields untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - The updated team
    /// - `Ok(None)` - No team with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        team_id: i32,
        param: UpdateTeamParams,
    ) -> Result<Option<Team>, DbErr> {
        let entity = match entity::prelude::Team::find_by_id(team_id)
            .one(self.db)
            .await?
        {
            Some(entity) => entity,
            None => return Ok(None),
        };

        let mut active: entity::team::ActiveModel = entity.into();

        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(group) = param.group {
            active.group = ActiveValue::Set(Some(group));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Team::from_entity(updated)))
    }

    /// Deletes a team.
    ///
    /// The roster and enrollment rows are removed by the cascading foreign
    /// keys.
    ///
    /// # Returns
    /// - `Ok(true)` - Team deleted
    /// - `Ok(false)` - No team with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, team_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::delete_by_id(team_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads the center and roster for the given teams in two bulk queries
    /// and zips them onto each team.
    async fn load_relations(
        &self,
        entities: Vec<entity::team::Model>,
    ) -> Result<Vec<TeamWithRelations>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let center_ids: Vec<i32> = entities.iter().map(|team| team.center_id).collect();
        let team_ids: Vec<i32> = entities.iter().map(|team| team.id).collect();

        let centers: HashMap<i32, Center> = entity::prelude::Center::find()
            .filter(entity::center::Column::Id.is_in(center_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|entity| (entity.id, Center::from_entity(entity)))
            .collect();

        let player_entities = entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.is_in(team_ids))
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        let mut players_by_team: HashMap<i32, Vec<Player>> = HashMap::new();
        for entity in player_entities {
            let player = Player::from_entity(entity)?;
            players_by_team.entry(player.team_id).or_default().push(player);
        }

        let teams = entities
            .into_iter()
            .map(|entity| {
                let center = centers.get(&entity.center_id).cloned();
                let players = players_by_team.remove(&entity.id).unwrap_or_default();

                TeamWithRelations {
                    team: Team::from_entity(entity),
                    center,
                    players,
                }
            })
            .collect();

        Ok(teams)
    }
}
