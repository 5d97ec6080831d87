//! Enrollment data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::enrollment::{Enrollment, EnrollmentStatus};

/// Repository providing database operations for team enrollments.
pub struct EnrollmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending enrollment for a team.
    ///
    /// Each team may hold at most one enrollment, the caller checks for an
    /// existing row first.
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The created enrollment
    /// - `Err(DbErr)` - Database error during insert, e.g. a duplicate team
    pub async fn create(&self, team_id: i32) -> Result<Enrollment, DbErr> {
        let entity = entity::enrollment::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            status: ActiveValue::Set(EnrollmentStatus::Pending.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Enrollment::from_entity(entity)
    }

    /// Gets all enrollments ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<Enrollment>)` - All enrollments, empty when none exist
    /// - `Err(DbErr)` - Database error during query or an unparsable row
    pub async fn get_all(&self) -> Result<Vec<Enrollment>, DbErr> {
        let entities = entity::prelude::Enrollment::find()
            .order_by_asc(entity::enrollment::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Enrollment::from_entity).collect()
    }

    /// Gets an enrollment by its id.
    ///
    /// # Returns
    /// - `Ok(Some(Enrollment))` - Enrollment found
    /// - `Ok(None)` - No enrollment with that id
    /// - `Err(DbErr)` - Database error during query or an unparsable row
    pub async fn get_by_id(&self, enrollment_id: i32) -> Result<Option<Enrollment>, DbErr> {
        let entity = entity::prelude::Enrollment::find_by_id(enrollment_id)
            .one(self.db)
            .await?;

        entity.map(Enrollment::from_entity).transpose()
    }

    /// Finds the enrollment belonging to a team, if any.
    ///
    /// # Returns
    /// - `Ok(Some(Enrollment))` - The team has an enrollment
    /// - `Ok(None)` - The team has no enrollment
    /// - `Err(DbErr)` - Database error during query or an unparsable row
    pub async fn find_by_team(&self, team_id: i32) -> Result<Option<Enrollment>, DbErr> {
        let entity = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::TeamId.eq(team_id))
            .one(self.db)
            .await?;

        entity.map(Enrollment::from_entity).transpose()
    }

    /// Gets the ids of all teams with an approved enrollment.
    ///
    /// Used to restrict team listings for callers without the admin role.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Team ids with approved enrollments
    /// - `Err(DbErr)` - Database error during query
    pub async fn approved_team_ids(&self) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::Status.eq(EnrollmentStatus::Approved.as_str()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|entity| entity.team_id).collect())
    }

    /// Sets the status of an enrollment.
    ///
    /// # Returns
    /// - `Ok(Some(Enrollment))` - The updated enrollment
    /// - `Ok(None)` - No enrollment with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        enrollment_id: i32,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>, DbErr> {
        let entity = match entity::prelude::Enrollment::find_by_id(enrollment_id)
            .one(self.db)
            .await?
        {
            Some(entity) => entity,
            None => return Ok(None),
        };

        let mut active: entity::enrollment::ActiveModel = entity.into();
        active.status = ActiveValue::Set(status.as_str().to_string());

        let updated = active.update(self.db).await?;

        Enrollment::from_entity(updated).map(Some)
    }

    /// Deletes an enrollment.
    ///
    /// # Returns
    /// - `Ok(true)` - Enrollment deleted
    /// - `Ok(false)` - No enrollment with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, enrollment_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Enrollment::delete_by_id(enrollment_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
