use super::*;

/// Tests counting the roster of a single team.
///
/// Players on other teams must not be counted.
///
/// Expected: Ok with the count of the requested team only
#[tokio::test]
async fn counts_only_requested_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (center, team) = create_team_with_dependencies(db).await?;
    let other_team = create_team(db, center.id).await?;
    create_player(db, team.id).await?;
    create_player(db, team.id).await?;
    create_player(db, other_team.id).await?;

    let count = PlayerRepository::new(db).count_by_team(team.id).await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests counting an empty roster.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_empty_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_dependencies(db).await?;

    let count = PlayerRepository::new(db).count_by_team(team.id).await?;

    assert_eq!(count, 0);

    Ok(())
}
