//! Study service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{center::CenterRepository, cycle::CycleRepository, study::StudyRepository},
    error::AppError,
    model::study::{CreateStudyParams, Study, StudyWithRelations, UpdateStudyParams},
};

/// Service providing business logic for study management.
pub struct StudyService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> StudyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all studies with their center and cycle.
    ///
    /// # Returns
    /// - `Ok(Vec<StudyWithRelations>)` - All studies, empty when none exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_studies(&self) -> Result<Vec<StudyWithRelations>, AppError> {
        let study_repo = StudyRepository::new(self.db);
        let studies = study_repo.get_all_with_relations().await?;
        Ok(studies)
    }

    /// Retrieves a single study with its center and cycle.
    ///
    /// # Returns
    /// - `Ok(StudyWithRelations)` - The requested study
    /// - `Err(AppError::NotFound)` - No study with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_study(&self, study_id: i32) -> Result<StudyWithRelations, AppError> {
        let study_repo = StudyRepository::new(self.db);

        let study = study_repo
            .get_by_id_with_relations(study_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Study not found".to_string()))?;

        Ok(study)
    }

    /// Creates a study linking a center to a cycle.
    ///
    /// # Returns
    /// - `Ok(StudyWithRelations)` - The created study
    /// - `Err(AppError::NotFound)` - The referenced center or cycle does not exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_study(
        &self,
        param: CreateStudyParams,
    ) -> Result<StudyWithRelations, AppError> {
        let study_repo = StudyRepository::new(self.db);
        let center_repo = CenterRepository::new(self.db);
        let cycle_repo = CycleRepository::new(self.db);

        // Verify the referenced center and cycle exist
        let center = center_repo
            .get_by_id(param.center_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Center not found".to_string()))?;

        let cycle = cycle_repo
            .get_by_id(param.cycle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cycle not found".to_string()))?;

        let study = study_repo.create(param).await?;

        Ok(StudyWithRelations {
            study,
            center,
            cycle,
        })
    }

    /// Updates a study.
    ///
    /// # Returns
    /// - `Ok(StudyWithRelations)` - The updated study
    /// - `Err(AppError::NotFound)` - No study with that id, or a changed
    ///   center or cycle reference does not exist
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_study(
        &self,
        study_id: i32,
        param: UpdateStudyParams,
    ) -> Result<StudyWithRelations, AppError> {
        let study_repo = StudyRepository::new(self.db);
        let center_repo = CenterRepository::new(self.db);
        let cycle_repo = CycleRepository::new(self.db);

        if let Some(center_id) = param.center_id {
            if center_repo.get_by_id(center_id).await?.is_none() {
                return Err(AppError::NotFound("Center not found".to_string()));
            }
        }

        if let Some(cycle_id) = param.cycle_id {
            if cycle_repo.get_by_id(cycle_id).await?.is_none() {
                return Err(AppError::NotFound("Cycle not found".to_string()));
            }
        }

        let study = study_repo
            .update(study_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Study not found".to_string()))?;

        let study = study_repo
            .get_by_id_with_relations(study.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Study not found".to_string()))?;

        Ok(study)
    }

    /// Deletes a study.
    ///
    /// # Returns
    /// - `Ok(())` - Study deleted
    /// - `Err(AppError::NotFound)` - No study with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_study(&self, study_id: i32) -> Result<(), AppError> {
        let study_repo = StudyRepository::new(self.db);

        if !study_repo.delete(study_id).await? {
            return Err(AppError::NotFound("Study not found".to_string()));
        }

        Ok(())
    }

    /// Resolves a cycle name to a study offered for that cycle.
    ///
    /// Player payloads reference their education by cycle name, the stored
    /// link is the study row. The first study of the cycle is used.
    ///
    /// # Returns
    /// - `Ok(Study)` - A study belonging to the named cycle
    /// - `Err(AppError::NotFound)` - No cycle with that name, or the cycle
    ///   has no studies
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn resolve_cycle_name(&self, name: &str) -> Result<Study, AppError> {
        let cycle_repo = CycleRepository::new(self.db);
        let study_repo = StudyRepository::new(self.db);

        let cycle = cycle_repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound("Cycle not found".to_string()))?;

        let study = study_repo
            .find_first_by_cycle(cycle.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Study not found".to_string()))?;

        Ok(study)
    }
}
