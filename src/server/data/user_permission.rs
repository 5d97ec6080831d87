//! User permission data repository for database operations.
//!
//! Permissions are plain strings attached to a user, independent of the
//! abilities carried by individual tokens. The roster cap is enforced by
//! revoking and granting the player creation permission.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for user permissions.
pub struct UserPermissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserPermissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a user holds a permission.
    ///
    /// # Returns
    /// - `Ok(true)` - The user holds the permission
    /// - `Ok(false)` - The user does not hold the permission
    /// - `Err(DbErr)` - Database error during count query
    pub async fn has(&self, user_id: i32, permission: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::UserPermission::find()
            .filter(entity::user_permission::Column::UserId.eq(user_id))
            .filter(entity::user_permission::Column::Permission.eq(permission))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Grants a permission to a user.
    ///
    /// Granting a permission the user already holds is a no-op.
    ///
    /// # Returns
    /// - `Ok(())` - Permission granted or already present
    /// - `Err(DbErr)` - Database error during insert
    pub async fn grant(&self, user_id: i32, permission: &str) -> Result<(), DbErr> {
        if self.has(user_id, permission).await? {
            return Ok(());
        }

        entity::user_permission::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            permission: ActiveValue::Set(permission.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Revokes a permission from a user.
    ///
    /// Revoking a permission the user does not hold is a no-op.
    ///
    /// # Returns
    /// - `Ok(())` - Permission revoked or was not present
    /// - `Err(DbErr)` - Database error during delete
    pub async fn revoke(&self, user_id: i32, permission: &str) -> Result<(), DbErr> {
        entity::prelude::UserPermission::delete_many()
            .filter(entity::user_permission::Column::UserId.eq(user_id))
            .filter(entity::user_permission::Column::Permission.eq(permission))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
