use super::*;

/// Tests renaming a team without touching its group.
///
/// Expected: Ok with the name changed and the group untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let center = create_center(db).await?;
    let repo = TeamRepository::new(db);
    let team = repo
        .create("Old Name".to_string(), Some("B".to_string()), center.id)
        .await?;

    let updated = repo
        .update(
            team.id,
            UpdateTeamParams {
                name: Some("New Name".to_string()),
                group: None,
            },
        )
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.group.as_deref(), Some("B"));

    Ok(())
}

/// Tests updating a team that does not exist.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_missing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = TeamRepository::new(db)
        .update(
            999,
            UpdateTeamParams {
                name: Some("Ghost".to_string()),
                group: None,
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
