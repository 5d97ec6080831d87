//! Cycle factory for creating test academic cycle entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cycles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::cycle::CycleFactory;
///
/// let cycle = CycleFactory::new(&db).name("DAW").build().await?;
/// ```
pub struct CycleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> CycleFactory<'a> {
    /// Creates a new CycleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Cycle {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CycleFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Cycle {}", id),
        }
    }

    /// Sets the cycle name.
    ///
    /// # Arguments
    /// - `name` - Unique name for the cycle
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the cycle entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::cycle::Model)` - Created cycle entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::cycle::Model, DbErr> {
        let now = Utc::now();
        entity::cycle::ActiveModel {
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a cycle with default values.
///
/// Shorthand for `CycleFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::cycle::Model)` - Created cycle entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_cycle(db: &DatabaseConnection) -> Result<entity::cycle::Model, DbErr> {
    CycleFactory::new(db).build().await
}
