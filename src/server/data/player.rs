//! Player data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::player::{NewPlayerParams, Player, UpdatePlayerFields};

/// Repository providing database operations for players.
pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new player on a team roster.
    ///
    /// # Returns
    /// - `Ok(Player)` - The created player
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: NewPlayerParams) -> Result<Player, DbErr> {
        let entity = entity::player::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            first_surname: ActiveValue::Set(param.first_surname),
            second_surname: ActiveValue::Set(param.second_surname),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            national_id: ActiveValue::Set(param.national_id),
            email: ActiveValue::Set(param.email),
            phone: ActiveValue::Set(param.phone),
            team_id: ActiveValue::Set(param.team_id),
            study_id: ActiveValue::Set(param.study_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Player::from_entity(entity)
    }

    /// Gets all players ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<Player>)` - All players, empty when none exist
    /// - `Err(DbErr)` - Database error during query or an unparsable row
    pub async fn get_all(&self) -> Result<Vec<Player>, DbErr> {
        let entities = entity::prelude::Player::find()
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Player::from_entity).collect()
    }

    /// Gets a player by its id.
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - Player found
    /// - `Ok(None)` - No player with that id
    /// - `Err(DbErr)` - Database error during query or an unparsable row
    pub async fn get_by_id(&self, player_id: i32) -> Result<Option<Player>, DbErr> {
        let entity = entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await?;

        entity.map(Player::from_entity).transpose()
    }

    /// Counts the players currently on a team's roster.
    ///
    /// Used to enforce the roster cap before adding another player.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of players on the team
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count_by_team(&self, team_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.eq(team_id))
            .count(self.db)
            .await
    }

    /// Updates a player, leaving `None` fields untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - The updated player
    /// - `Ok(None)` - No player with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        player_id: i32,
        param: UpdatePlayerFields,
    ) -> Result<Option<Player>, DbErr> {
        let entity = match entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await?
        {
            Some(entity) => entity,
            None => return Ok(None),
        };

        let mut active: entity::player::ActiveModel = entity.into();

        if let Some(first_name) = param.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(first_surname) = param.first_surname {
            active.first_surname = ActiveValue::Set(first_surname);
        }
        if let Some(second_surname) = param.second_surname {
            active.second_surname = ActiveValue::Set(Some(second_surname));
        }
        if let Some(kind) = param.kind {
            active.kind = ActiveValue::Set(kind.as_str().to_string());
        }
        if let Some(national_id) = param.national_id {
            active.national_id = ActiveValue::Set(Some(national_id));
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(Some(email));
        }
        if let Some(phone) = param.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(team_id) = param.team_id {
            active.team_id = ActiveValue::Set(team_id);
        }
        if let Some(study_id) = param.study_id {
            active.study_id = ActiveValue::Set(Some(study_id));
        }

        let updated = active.update(self.db).await?;

        Player::from_entity(updated).map(Some)
    }

    /// Deletes a player.
    ///
    /// # Returns
    /// - `Ok(true)` - Player deleted
    /// - `Ok(false)` - No player with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, player_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Player::delete_by_id(player_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
