use super::*;

/// Tests deleting an existing player.
///
/// Expected: Ok(true) and the player gone
#[tokio::test]
async fn deletes_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, player) = create_player_with_dependencies(db).await?;

    let repo = PlayerRepository::new(db);
    let deleted = repo.delete(player.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(player.id).await?.is_none());

    Ok(())
}

/// Tests deleting a player that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = PlayerRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
