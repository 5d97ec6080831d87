//! Cycle data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::cycle::{CreateCycleParams, Cycle, UpdateCycleParams};

/// Repository providing database operations for academic cycles.
pub struct CycleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CycleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new cycle.
    ///
    /// # Returns
    /// - `Ok(Cycle)` - The created cycle
    /// - `Err(DbErr)` - Database error during insert, e.g. a duplicate name
    pub async fn create(&self, param: CreateCycleParams) -> Result<Cycle, DbErr> {
        let entity = entity::cycle::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Cycle::from_entity(entity))
    }

    /// Gets all cycles ordered alphabetically by name.
    pub async fn get_all(&self) -> Result<Vec<Cycle>, DbErr> {
        let entities = entity::prelude::Cycle::find()
            .order_by_asc(entity::cycle::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Cycle::from_entity).collect())
    }

    /// Gets a cycle by its id.
    pub async fn get_by_id(&self, cycle_id: i32) -> Result<Option<Cycle>, DbErr> {
        let entity = entity::prelude::Cycle::find_by_id(cycle_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Cycle::from_entity))
    }

    /// Finds a cycle by its exact name.
    ///
    /// Used when player requests reference their study through the cycle name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Cycle>, DbErr> {
        let entity = entity::prelude::Cycle::find()
            .filter(entity::cycle::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Cycle::from_entity))
    }

    /// Updates a cycle, leaving `None` fields untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Cycle))` - The updated cycle
    /// - `Ok(None)` - No cycle with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        cycle_id: i32,
        param: UpdateCycleParams,
    ) -> Result<Option<Cycle>, DbErr> {
        let entity = match entity::prelude::Cycle::find_by_id(cycle_id)
            .one(self.db)
            .await?
        {
            Some(entity) => entity,
            None => return Ok(None),
        };

        let mut active: entity::cycle::ActiveModel = entity.into();

        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Cycle::from_entity(updated)))
    }

    /// Deletes a cycle.
    ///
    /// # Returns
    /// - `Ok(true)` - Cycle deleted
    /// - `Ok(false)` - No cycle with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, cycle_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Cycle::delete_by_id(cycle_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
