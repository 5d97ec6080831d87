use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;
use sha2::{Digest, Sha256};

use crate::server::{
    data::{token::TokenRepository, user_permission::UserPermissionRepository},
    error::{auth::AuthError, AppError},
    model::{
        auth::{Ability, Principal, CREATE_PLAYER_PERMISSION},
        user::UserRole,
    },
};

/// A requirement the caller must meet at the start of a handler.
///
/// Per-resource ability scopes are not listed here on purpose, existence of
/// the resource is checked first so those run in the service after the row
/// has been resolved.
pub enum Permission {
    /// Caller's role must be admin.
    Admin,
    /// Caller's role must be coach.
    Coach,
    /// Caller's role must be admin or coach.
    Staff,
    /// Caller's token must carry the ability.
    Ability(Ability),
    /// Caller must currently hold the revocable player create permission.
    CreatePlayer,
}

/// Resolves the caller of a request from its bearer token.
///
/// Tokens are stored hashed, so the plaintext from the Authorization header
/// is hashed before the lookup. A successful lookup stamps the token's last
/// use.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Requires an authenticated caller meeting every listed permission.
    ///
    /// # Arguments
    /// * `permissions` - Requirements checked in order after authentication
    ///
    /// # Returns
    /// - `Ok(Principal)` - The user and token abilities behind the bearer token
    /// - `Err(AuthError::MissingToken)` - No usable Authorization header
    /// - `Err(AuthError::InvalidToken)` - The token matches no stored hash
    /// - `Err(AuthError::RoleDenied)` - A role requirement failed
    /// - `Err(AuthError::AbilityDenied)` - An ability requirement failed
    /// - `Err(AuthError::PermissionDenied)` - A permission requirement failed
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn require(&self, permissions: &[Permission]) -> Result<Principal, AppError> {
        let Some(token) = self.bearer_token() else {
            return Err(AuthError::MissingToken.into());
        };

        let token_repo = TokenRepository::new(self.db);

        let Some(principal) = token_repo
            .find_principal_by_hash(&hash_token(token))
            .await?
        else {
            return Err(AuthError::InvalidToken.into());
        };

        token_repo.touch_last_used(principal.token_id).await?;

        for permission in permissions {
            match permission {
                Permission::Admin => principal.require_role(&[UserRole::Admin])?,
                Permission::Coach => principal.require_role(&[UserRole::Coach])?,
                Permission::Staff => {
                    principal.require_role(&[UserRole::Admin, UserRole::Coach])?
                }
                Permission::Ability(ability) => principal.require_ability(*ability)?,
                Permission::CreatePlayer => {
                    let permission_repo = UserPermissionRepository::new(self.db);

                    if !permission_repo
                        .has(principal.user.id, CREATE_PLAYER_PERMISSION)
                        .await?
                    {
                        return Err(AuthError::PermissionDenied {
                            user_id: principal.user.id,
                            permission: CREATE_PLAYER_PERMISSION.to_string(),
                        }
                        .into());
                    }
                }
            }
        }

        Ok(principal)
    }

    /// Resolves the caller if the request carries a valid bearer token.
    ///
    /// Public endpoints use this to vary their response for authenticated
    /// callers. A missing or unknown token is not an error here.
    ///
    /// # Returns
    /// - `Ok(Some(Principal))` - The request authenticated successfully
    /// - `Ok(None)` - No usable Authorization header, or an unknown token
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn current_user(&self) -> Result<Option<Principal>, AppError> {
        let Some(token) = self.bearer_token() else {
            return Ok(None);
        };

        let token_repo = TokenRepository::new(self.db);

        let Some(principal) = token_repo
            .find_principal_by_hash(&hash_token(token))
            .await?
        else {
            return Ok(None);
        };

        token_repo.touch_last_used(principal.token_id).await?;

        Ok(Some(principal))
    }

    fn bearer_token(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
    }
}

fn hash_token(plaintext: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hasher.finalize().to_vec()
}
