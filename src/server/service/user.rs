//! User service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{GetUsersParams, PaginatedUsers, SetUserRoleParams},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a page of users.
    ///
    /// # Arguments
    /// * `param` - The page to fetch and the page size
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - The requested page with pagination counters
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_users(&self, param: GetUsersParams) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (users, total, total_pages) =
            user_repo.get_all_paginated(param.page, param.per_page).await?;

        Ok(PaginatedUsers {
            users,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Assigns a role to a user.
    ///
    /// # Arguments
    /// * `param` - The user and the role to assign
    ///
    /// # Returns
    /// - `Ok(())` - Role assigned
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_user_role(&self, param: SetUserRoleParams) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if !user_repo.set_role(param.user_id, param.role).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
