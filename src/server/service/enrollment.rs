//! Enrollment service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{enrollment::EnrollmentRepository, team::TeamRepository},
    error::AppError,
    model::enrollment::{CreateEnrollmentParams, Enrollment, UpdateEnrollmentParams},
};

/// Service providing business logic for enrollment management.
pub struct EnrollmentService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> EnrollmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all enrollments.
    ///
    /// # Returns
    /// - `Ok(Vec<Enrollment>)` - All enrollments, empty when none exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_enrollments(&self) -> Result<Vec<Enrollment>, AppError> {
        let enrollment_repo = EnrollmentRepository::new(self.db);
        let enrollments = enrollment_repo.get_all().await?;
        Ok(enrollments)
    }

    /// Retrieves a single enrollment.
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The requested enrollment
    /// - `Err(AppError::NotFound)` - No enrollment with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_enrollment(&self, enrollment_id: i32) -> Result<Enrollment, AppError> {
        let enrollment_repo = EnrollmentRepository::new(self.db);

        let enrollment = enrollment_repo
            .get_by_id(enrollment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Enrollment not found".to_string()))?;

        Ok(enrollment)
    }

    /// Enrolls a team into the league.
    ///
    /// New enrollments start out pending until an admin reviews them. A team
    /// can only hold one enrollment at a time.
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The created enrollment
    /// - `Err(AppError::NotFound)` - The referenced team does not exist
    /// - `Err(AppError::Conflict)` - The team already has an enrollment
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_enrollment(
        &self,
        param: CreateEnrollmentParams,
    ) -> Result<Enrollment, AppError> {
        let enrollment_repo = EnrollmentRepository::new(self.db);
        let team_repo = TeamRepository::new(self.db);

        // Verify the team exists
        if team_repo.get_by_id(param.team_id).await?.is_none() {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        if enrollment_repo.find_by_team(param.team_id).await?.is_some() {
            return Err(AppError::Conflict(
                "The team already has an enrollment".to_string(),
            ));
        }

        let enrollment = enrollment_repo.create(param.team_id).await?;
        Ok(enrollment)
    }

    /// Updates an enrollment's status.
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The updated enrollment
    /// - `Err(AppError::NotFound)` - No enrollment with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_enrollment(
        &self,
        enrollment_id: i32,
        param: UpdateEnrollmentParams,
    ) -> Result<Enrollment, AppError> {
        let enrollment_repo = EnrollmentRepository::new(self.db);

        let enrollment = enrollment_repo
            .update_status(enrollment_id, param.status)
            .await?
            .ok_or_else(|| AppError::NotFound("Enrollment not found".to_string()))?;

        Ok(enrollment)
    }

    /// Deletes an enrollment.
    ///
    /// # Returns
    /// - `Ok(())` - Enrollment deleted
    /// - `Err(AppError::NotFound)` - No enrollment with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_enrollment(&self, enrollment_id: i32) -> Result<(), AppError> {
        let enrollment_repo = EnrollmentRepository::new(self.db);

        if !enrollment_repo.delete(enrollment_id).await? {
            return Err(AppError::NotFound("Enrollment not found".to_string()));
        }

        Ok(())
    }
}
