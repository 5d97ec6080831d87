use super::*;

/// Tests fetching a player by id.
///
/// Expected: Ok with the stored player
#[tokio::test]
async fn finds_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team, player) = create_player_with_dependencies(db).await?;

    let found = PlayerRepository::new(db).get_by_id(player.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, player.id);
    assert_eq!(found.team_id, team.id);

    Ok(())
}

/// Tests fetching a player that does not exist.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_missing_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = PlayerRepository::new(db).get_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
