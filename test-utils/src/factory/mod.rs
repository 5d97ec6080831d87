//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let center = factory::center::create_center(&db).await?;
//!
//!     // Create with all dependencies
//!     let (center, team) = factory::helpers::create_team_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Using builder pattern for customization
//! let user = factory::user::UserFactory::new(&db)
//!     .name("CustomUser")
//!     .role("admin")
//!     .build()
//!     .await?;
//!
//! // Tokens return the plaintext alongside the stored row
//! let (token, plaintext) = factory::token::TokenFactory::new(&db, user.id)
//!     .ability("team:create")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `token` - Create access tokens with abilities (returns the plaintext too)
//! - `user_permission` - Grant named permissions to users
//! - `center` - Create center entities
//! - `cycle` - Create cycle entities
//! - `study` - Create study entities
//! - `team` - Create team entities
//! - `player` - Create player entities
//! - `enrollment` - Create enrollment entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod center;
pub mod cycle;
pub mod enrollment;
pub mod helpers;
pub mod player;
pub mod study;
pub mod team;
pub mod token;
pub mod user;
pub mod user_permission;

// Re-export commonly used factory functions for concise usage
pub use center::create_center;
pub use cycle::create_cycle;
pub use enrollment::{create_approved_enrollment, create_enrollment};
pub use player::create_player;
pub use study::create_study;
pub use team::create_team;
pub use token::{create_token, create_token_with_abilities};
pub use user::{create_admin, create_coach, create_user};
pub use user_permission::grant_permission;
