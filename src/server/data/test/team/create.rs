use super::*;

/// Tests creating a team at a center.
///
/// Expected: Ok with the created team
#[tokio::test]
async fn creates_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let center = create_center(db).await?;

    let team = TeamRepository::new(db)
        .create("Harbor Hawks".to_string(), Some("A".to_string()), center.id)
        .await?;

    assert!(team.id > 0);
    assert_eq!(team.name, "Harbor Hawks");
    assert_eq!(team.group.as_deref(), Some("A"));
    assert_eq!(team.center_id, center.id);

    Ok(())
}

/// Tests that duplicate team names are rejected.
///
/// Verifies that the unique constraint on the name column surfaces as a
/// database error for the second insert.
///
/// Expected: Err for the duplicate name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let center = create_center(db).await?;
    let repo = TeamRepository::new(db);

    repo.create("River Foxes".to_string(), None, center.id)
        .await?;

    let result = repo.create("River Foxes".to_string(), None, center.id).await;

    assert!(result.is_err());

    Ok(())
}
