use super::*;

/// Tests looking up a team by its exact name.
///
/// Expected: Ok with the matching team
#[tokio::test]
async fn finds_team_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_dependencies(db).await?;

    let found = TeamRepository::new(db).find_by_name(&team.name).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, team.id);

    Ok(())
}

/// Tests looking up an unknown team name.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_team_with_dependencies(db).await?;

    let found = TeamRepository::new(db).find_by_name("No Such Team").await?;

    assert!(found.is_none());

    Ok(())
}
