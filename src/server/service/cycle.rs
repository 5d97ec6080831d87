//! Cycle service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::cycle::CycleRepository,
    error::AppError,
    model::cycle::{CreateCycleParams, Cycle, UpdateCycleParams},
};

/// Service providing business logic for academic cycle management.
pub struct CycleService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CycleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all cycles ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Cycle>)` - All cycles, empty when none exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_cycles(&self) -> Result<Vec<Cycle>, AppError> {
        let cycle_repo = CycleRepository::new(self.db);
        let cycles = cycle_repo.get_all().await?;
        Ok(cycles)
    }

    /// Retrieves a single cycle.
    ///
    /// # Returns
    /// - `Ok(Cycle)` - The requested cycle
    /// - `Err(AppError::NotFound)` - No cycle with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_cycle(&self, cycle_id: i32) -> Result<Cycle, AppError> {
        let cycle_repo = CycleRepository::new(self.db);

        let cycle = cycle_repo
            .get_by_id(cycle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cycle not found".to_string()))?;

        Ok(cycle)
    }

    /// Creates a cycle.
    ///
    /// Cycle names are unique, a duplicate is rejected before touching the
    /// constraint.
    ///
    /// # Returns
    /// - `Ok(Cycle)` - The created cycle
    /// - `Err(AppError::Conflict)` - A cycle with that name already exists
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_cycle(&self, param: CreateCycleParams) -> Result<Cycle, AppError> {
        let cycle_repo = CycleRepository::new(self.db);

        if cycle_repo.find_by_name(&param.name).await?.is_some() {
            return Err(AppError::Conflict(
                "A cycle with that name already exists".to_string(),
            ));
        }

        let cycle = cycle_repo.create(param).await?;
        Ok(cycle)
    }

    /// Updates a cycle.
    ///
    /// # Returns
    /// - `Ok(Cycle)` - The updated cycle
    /// - `Err(AppError::NotFound)` - No cycle with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_cycle(
        &self,
        cycle_id: i32,
        param: UpdateCycleParams,
    ) -> Result<Cycle, AppError> {
        let cycle_repo = CycleRepository::new(self.db);

        let cycle = cycle_repo
            .update(cycle_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Cycle not found".to_string()))?;

        Ok(cycle)
    }

    /// Deletes a cycle.
    ///
    /// Studies in the cycle are removed by the cascading foreign key.
    ///
    /// # Returns
    /// - `Ok(())` - Cycle deleted
    /// - `Err(AppError::NotFound)` - No cycle with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_cycle(&self, cycle_id: i32) -> Result<(), AppError> {
        let cycle_repo = CycleRepository::new(self.db);

        if !cycle_repo.delete(cycle_id).await? {
            return Err(AppError::NotFound("Cycle not found".to_string()));
        }

        Ok(())
    }
}
