//! Center service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::center::CenterRepository,
    error::AppError,
    model::center::{Center, CreateCenterParams, UpdateCenterParams},
};

/// Service providing business logic for center management.
pub struct CenterService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CenterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all centers ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Center>)` - All centers, empty when none exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_centers(&self) -> Result<Vec<Center>, AppError> {
        let center_repo = CenterRepository::new(self.db);
        let centers = center_repo.get_all().await?;
        Ok(centers)
    }

    /// Retrieves a single center.
    ///
    /// # Returns
    /// - `Ok(Center)` - The requested center
    /// - `Err(AppError::NotFound)` - No center with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_center(&self, center_id: i32) -> Result<Center, AppError> {
        let center_repo = CenterRepository::new(self.db);

        let center = center_repo
            .get_by_id(center_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Center not found".to_string()))?;

        Ok(center)
    }

    /// Creates a center.
    ///
    /// Center names are unique, a duplicate is rejected before touching the
    /// constraint.
    ///
    /// # Returns
    /// - `Ok(Center)` - The created center
    /// - `Err(AppError::Conflict)` - A center with that name already exists
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_center(&self, param: CreateCenterParams) -> Result<Center, AppError> {
        let center_repo = CenterRepository::new(self.db);

        if center_repo.find_by_name(&param.name).await?.is_some() {
            return Err(AppError::Conflict(
                "A center with that name already exists".to_string(),
            ));
        }

        let center = center_repo.create(param).await?;
        Ok(center)
    }

    /// Updates a center.
    ///
    /// # Returns
    /// - `Ok(Center)` - The updated center
    /// - `Err(AppError::NotFound)` - No center with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_center(
        &self,
        center_id: i32,
        param: UpdateCenterParams,
    ) -> Result<Center, AppError> {
        let center_repo = CenterRepository::new(self.db);

        let center = center_repo
            .update(center_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Center not found".to_string()))?;

        Ok(center)
    }

    /// Deletes a center.
    ///
    /// Teams and studies at the center are removed by the cascading foreign
    /// keys.
    ///
    /// # Returns
    /// - `Ok(())` - Center deleted
    /// - `Err(AppError::NotFound)` - No center with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_center(&self, center_id: i32) -> Result<(), AppError> {
        let center_repo = CenterRepository::new(self.db);

        if !center_repo.delete(center_id).await? {
            return Err(AppError::NotFound("Center not found".to_string()));
        }

        Ok(())
    }
}
