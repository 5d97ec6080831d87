//! Center factory for creating test center entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test centers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::center::CenterFactory;
///
/// let center = CenterFactory::new(&db)
///     .name("IES Example")
///     .address("1 School Road")
///     .build()
///     .await?;
/// ```
pub struct CenterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: Option<String>,
}

impl<'a> CenterFactory<'a> {
    /// Creates a new CenterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Center {id}"` where id is auto-incremented
    /// - address: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CenterFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Center {}", id),
            address: None,
        }
    }

    /// Sets the center name.
    ///
    /// # Arguments
    /// - `name` - Unique name for the center
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the center address.
    ///
    /// # Arguments
    /// - `address` - Street address for the center
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Builds and inserts the center entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::center::Model)` - Created center entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::center::Model, DbErr> {
        let now = Utc::now();
        entity::center::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a center with default values.
///
/// Shorthand for `CenterFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::center::Model)` - Created center entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_center(db: &DatabaseConnection) -> Result<entity::center::Model, DbErr> {
    CenterFactory::new(db).build().await
}
