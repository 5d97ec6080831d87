//! Study factory for creating test study entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test studies with customizable fields.
///
/// A study joins a center and a cycle with a course year. Both foreign keys are
/// required; use `helpers::create_study_with_dependencies` when the test does
/// not care about the specific center or cycle.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::study::StudyFactory;
///
/// let study = StudyFactory::new(&db, center.id, cycle.id)
///     .course("2")
///     .build()
///     .await?;
/// ```
pub struct StudyFactory<'a> {
    db: &'a DatabaseConnection,
    center_id: i32,
    cycle_id: i32,
    course: String,
}

impl<'a> StudyFactory<'a> {
    /// Creates a new StudyFactory with default values.
    ///
    /// Defaults:
    /// - course: `"1"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `center_id` - Id of the center offering the study
    /// - `cycle_id` - Id of the academic cycle
    ///
    /// # Returns
    /// - `StudyFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, center_id: i32, cycle_id: i32) -> Self {
        Self {
            db,
            center_id,
            cycle_id,
            course: "1".to_string(),
        }
    }

    /// Sets the course year.
    ///
    /// # Arguments
    /// - `course` - Course year string (e.g. `"1"`, `"2"`)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn course(mut self, course: impl Into<String>) -> Self {
        self.course = course.into();
        self
    }

    /// Builds and inserts the study entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::study::Model)` - Created study entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::study::Model, DbErr> {
        let now = Utc::now();
        entity::study::ActiveModel {
            center_id: ActiveValue::Set(self.center_id),
            cycle_id: ActiveValue::Set(self.cycle_id),
            course: ActiveValue::Set(self.course),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a study with default values.
///
/// Shorthand for `StudyFactory::new(db, center_id, cycle_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `center_id` - Id of the center offering the study
/// - `cycle_id` - Id of the academic cycle
///
/// # Returns
/// - `Ok(entity::study::Model)` - Created study entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_study(
    db: &DatabaseConnection,
    center_id: i32,
    cycle_id: i32,
) -> Result<entity::study::Model, DbErr> {
    StudyFactory::new(db, center_id, cycle_id).build().await
}
