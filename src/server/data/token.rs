//! Access token data repository for database operations.
//!
//! Tokens are stored as SHA-256 hashes, the plaintext value is only ever held
//! by the client. Resolving a request's bearer token therefore hashes the
//! presented value and looks up the digest.

use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::auth::Principal;
use crate::server::model::user::User;

/// Repository providing database operations for access tokens.
pub struct TokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a token hash to the authenticated principal.
    ///
    /// Looks up the access token by digest, loads its owning user and every
    /// ability granted to the token.
    ///
    /// # Arguments
    /// - `token_hash` - SHA-256 digest of the presented bearer token
    ///
    /// # Returns
    /// - `Ok(Some(Principal))` - Token matched, principal resolved
    /// - `Ok(None)` - No token with that digest
    /// - `Err(DbErr)` - Database error or a token owned by a missing user
    pub async fn find_principal_by_hash(
        &self,
        token_hash: &[u8],
    ) -> Result<Option<Principal>, DbErr> {
        let token = match entity::prelude::AccessToken::find()
            .filter(entity::access_token::Column::TokenHash.eq(token_hash.to_vec()))
            .one(self.db)
            .await?
        {
            Some(token) => token,
            None => return Ok(None),
        };

        let user_entity = entity::prelude::User::find_by_id(token.user_id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::Custom(format!(
                    "User {} referenced by access token {} was not found",
                    token.user_id, token.id
                ))
            })?;

        let user = User::from_entity(user_entity)?;

        let abilities = entity::prelude::TokenAbility::find()
            .filter(entity::token_ability::Column::TokenId.eq(token.id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|entity| entity.ability)
            .collect();

        Ok(Some(Principal::new(user, token.id, abilities)))
    }

    /// Updates the last used timestamp of a token to now.
    ///
    /// Called after each successful token resolution.
    ///
    /// # Returns
    /// - `Ok(())` - Timestamp updated (or no matching token found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn touch_last_used(&self, token_id: i32) -> Result<(), DbErr> {
        entity::prelude::AccessToken::update_many()
            .filter(entity::access_token::Column::Id.eq(token_id))
            .col_expr(
                entity::access_token::Column::LastUsedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
