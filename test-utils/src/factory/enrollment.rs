//! Enrollment factory for creating test enrollment entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test enrollments with customizable fields.
///
/// An enrollment ties a team to the league with a status; each team can have
/// at most one. The status defaults to `pending`, matching what the backend
/// creates.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::enrollment::EnrollmentFactory;
///
/// let enrollment = EnrollmentFactory::new(&db, team.id)
///     .status("approved")
///     .build()
///     .await?;
/// ```
pub struct EnrollmentFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    status: String,
}

impl<'a> EnrollmentFactory<'a> {
    /// Creates a new EnrollmentFactory with default values.
    ///
    /// Defaults:
    /// - status: `"pending"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `team_id` - Id of the team being enrolled
    ///
    /// # Returns
    /// - `EnrollmentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, team_id: i32) -> Self {
        Self {
            db,
            team_id,
            status: "pending".to_string(),
        }
    }

    /// Sets the enrollment status.
    ///
    /// # Arguments
    /// - `status` - Status string (`"pending"`, `"approved"` or `"rejected"`)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the enrollment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::enrollment::Model)` - Created enrollment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::enrollment::Model, DbErr> {
        let now = Utc::now();
        entity::enrollment::ActiveModel {
            team_id: ActiveValue::Set(self.team_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending enrollment for a team.
///
/// Shorthand for `EnrollmentFactory::new(db, team_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `team_id` - Id of the team being enrolled
///
/// # Returns
/// - `Ok(entity::enrollment::Model)` - Created enrollment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_enrollment(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    EnrollmentFactory::new(db, team_id).build().await
}

/// Creates an approved enrollment for a team.
///
/// Approved enrollments make a team publicly visible, so this is the common
/// fixture for listing tests.
///
/// # Arguments
/// - `db` - Database connection
/// - `team_id` - Id of the team being enrolled
///
/// # Returns
/// - `Ok(entity::enrollment::Model)` - Created enrollment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_approved_enrollment(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    EnrollmentFactory::new(db, team_id)
        .status("approved")
        .build()
        .await
}
