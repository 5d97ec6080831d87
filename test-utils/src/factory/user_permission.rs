//! User permission factory for granting named permissions in tests.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Grants a named permission to a user.
///
/// Inserts a `user_permission` row tying the user to the permission string.
/// The only permission the business logic manages is `create_player`, but any
/// string is accepted.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the user receiving the grant
/// - `permission` - Permission name (e.g. `"create_player"`)
///
/// # Returns
/// - `Ok(entity::user_permission::Model)` - Created grant row
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// grant_permission(&db, coach.id, "create_player").await?;
/// ```
pub async fn grant_permission(
    db: &DatabaseConnection,
    user_id: i32,
    permission: impl Into<String>,
) -> Result<entity::user_permission::Model, DbErr> {
    entity::user_permission::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        permission: ActiveValue::Set(permission.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
