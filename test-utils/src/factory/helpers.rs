//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a team along with the center it belongs to.
///
/// This is a convenience method that creates:
/// 1. Center
/// 2. Team (belonging to that center)
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((center, team))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::center::Model, entity::team::Model), DbErr> {
    let center = crate::factory::center::create_center(db).await?;
    let team = crate::factory::team::create_team(db, center.id).await?;

    Ok((center, team))
}

/// Creates a player along with its team and center.
///
/// This is a convenience method that creates:
/// 1. Center
/// 2. Team (belonging to that center)
/// 3. Player (on that team, no study)
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((center, team, player))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_player_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::center::Model,
        entity::team::Model,
        entity::player::Model,
    ),
    DbErr,
> {
    let (center, team) = create_team_with_dependencies(db).await?;
    let player = crate::factory::player::create_player(db, team.id).await?;

    Ok((center, team, player))
}

/// Creates a study along with the center and cycle it joins.
///
/// This is a convenience method that creates:
/// 1. Center
/// 2. Cycle
/// 3. Study (joining both)
///
/// Useful for tests exercising the cycle name to study resolution.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((center, cycle, study))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_study_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::center::Model,
        entity::cycle::Model,
        entity::study::Model,
    ),
    DbErr,
> {
    let center = crate::factory::center::create_center(db).await?;
    let cycle = crate::factory::cycle::create_cycle(db).await?;
    let study = crate::factory::study::create_study(db, center.id, cycle.id).await?;

    Ok((center, cycle, study))
}
