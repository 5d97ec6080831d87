use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::*;

/// Tests deleting a team cascades to its roster.
///
/// Verifies that the team row is removed and the players on the roster go
/// with it through the cascading foreign key.
///
/// Expected: Ok(true) with no players left for the team
#[tokio::test]
async fn deletes_team_and_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_dependencies(db).await?;
    create_player(db, team.id).await?;
    create_player(db, team.id).await?;

    let repo = TeamRepository::new(db);
    let deleted = repo.delete(team.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(team.id).await?.is_none());

    let remaining = entity::prelude::Player::find()
        .filter(entity::player::Column::TeamId.eq(team.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    Ok(())
}

/// Tests deleting a team that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = TeamRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
