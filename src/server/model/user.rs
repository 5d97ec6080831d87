use sea_orm::DbErr;

use crate::model::{PaginatedUsersDto, UserDto};

/// Role assigned to a user account.
///
/// Stored as a lowercase string on the user table and parsed when the entity
/// is loaded. Admins may manage every resource, coaches manage the resources
/// their tokens are scoped to & members only read what their enrollments
/// expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Coach,
    Member,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Coach => "coach",
            UserRole::Member => "member",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(UserRole::Admin),
            "coach" => Some(UserRole::Coach),
            "member" => Some(UserRole::Member),
            _ => None,
        }
    }
}

/// A registered user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    /// Display name shown in rosters and the admin panel.
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = UserRole::parse(&entity.role).ok_or_else(|| {
            DbErr::Custom(format!(
                "Failed to parse role '{}' for user {}",
                entity.role, entity.id
            ))
        })?;

        Ok(User {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.as_str().to_string(),
        }
    }
}

/// One page of users together with the pagination counters the admin panel
/// renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetUsersParams {
    /// Zero indexed page to fetch.
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetUserRoleParams {
    pub user_id: i32,
    pub role: UserRole,
}
