//! Access token factory for creating test tokens.
//!
//! This module provides factory methods for creating access token entities
//! together with their ability rows. Tokens are stored hashed (SHA-256), so the
//! builder returns the plaintext alongside the inserted row for use in
//! `Authorization: Bearer` headers.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use sha2::{Digest, Sha256};

/// Hashes a plaintext token the same way the backend stores it.
///
/// # Arguments
/// - `plaintext` - The bearer token string
///
/// # Returns
/// - `Vec<u8>` - SHA-256 digest of the plaintext
pub fn hash_token(plaintext: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hasher.finalize().to_vec()
}

/// Factory for creating test access tokens with customizable fields.
///
/// Provides a builder pattern for creating access token entities plus their
/// ability rows. The plaintext defaults to `"token-{id}"` and is returned from
/// `build()` so tests can authenticate with it.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::token::TokenFactory;
///
/// let (token, plaintext) = TokenFactory::new(&db, user.id)
///     .ability("team:create")
///     .ability("team:update:3")
///     .build()
///     .await?;
/// ```
pub struct TokenFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    plaintext: String,
    abilities: Vec<String>,
}

impl<'a> TokenFactory<'a> {
    /// Creates a new TokenFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Token {id}"` where id is auto-incremented
    /// - plaintext: `"token-{id}"`
    /// - abilities: empty
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the user owning the token
    ///
    /// # Returns
    /// - `TokenFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Token {}", id),
            plaintext: format!("token-{}", id),
            abilities: Vec::new(),
        }
    }

    /// Sets the token name.
    ///
    /// # Arguments
    /// - `name` - Display name for the token
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the plaintext bearer token.
    ///
    /// # Arguments
    /// - `plaintext` - The exact token string to hash and store
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn plaintext(mut self, plaintext: impl Into<String>) -> Self {
        self.plaintext = plaintext.into();
        self
    }

    /// Adds an ability scope to the token.
    ///
    /// Call multiple times for multiple scopes. Use `"*"` for the wildcard.
    ///
    /// # Arguments
    /// - `ability` - Ability scope string (e.g. `"team:create"`)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn ability(mut self, ability: impl Into<String>) -> Self {
        self.abilities.push(ability.into());
        self
    }

    /// Builds and inserts the token and its ability rows into the database.
    ///
    /// # Returns
    /// - `Ok((entity::access_token::Model, String))` - Created token entity and its plaintext
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<(entity::access_token::Model, String), DbErr> {
        let token = entity::access_token::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            token_hash: ActiveValue::Set(hash_token(&self.plaintext)),
            last_used_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for ability in self.abilities {
            entity::token_ability::ActiveModel {
                token_id: ActiveValue::Set(token.id),
                ability: ActiveValue::Set(ability),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok((token, self.plaintext))
    }
}

/// Creates a token with default values and no abilities.
///
/// Shorthand for `TokenFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the user owning the token
///
/// # Returns
/// - `Ok((entity::access_token::Model, String))` - Created token and its plaintext
/// - `Err(DbErr)` - Database error during insert
pub async fn create_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<(entity::access_token::Model, String), DbErr> {
    TokenFactory::new(db, user_id).build().await
}

/// Creates a token carrying the given ability scopes.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the user owning the token
/// - `abilities` - Ability scope strings to attach
///
/// # Returns
/// - `Ok((entity::access_token::Model, String))` - Created token and its plaintext
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let (token, plaintext) =
///     create_token_with_abilities(&db, user.id, &["player:create:1", "*"]).await?;
/// ```
pub async fn create_token_with_abilities(
    db: &DatabaseConnection,
    user_id: i32,
    abilities: &[&str],
) -> Result<(entity::access_token::Model, String), DbErr> {
    let mut factory = TokenFactory::new(db, user_id);
    for ability in abilities {
        factory = factory.ability(*ability);
    }
    factory.build().await
}
