//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
///
/// Teams require a center; use `helpers::create_team_with_dependencies` when
/// the test does not care about the specific center.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::team::TeamFactory;
///
/// let team = TeamFactory::new(&db, center.id)
///     .name("The Rockets")
///     .group("A")
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    group: Option<String>,
    center_id: i32,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"` where id is auto-incremented
    /// - group: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `center_id` - Id of the center the team belongs to
    ///
    /// # Returns
    /// - `TeamFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, center_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Team {}", id),
            group: None,
            center_id,
        }
    }

    /// Sets the team name.
    ///
    /// # Arguments
    /// - `name` - Unique name for the team
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the league group.
    ///
    /// # Arguments
    /// - `group` - Group letter (e.g. `"A"`)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Builds and inserts the team entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::team::Model)` - Created team entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        let now = Utc::now();
        entity::team::ActiveModel {
            name: ActiveValue::Set(self.name),
            group: ActiveValue::Set(self.group),
            center_id: ActiveValue::Set(self.center_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values.
///
/// Shorthand for `TeamFactory::new(db, center_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `center_id` - Id of the center the team belongs to
///
/// # Returns
/// - `Ok(entity::team::Model)` - Created team entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_team(
    db: &DatabaseConnection,
    center_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, center_id).build().await
}
