use super::*;

/// Tests renaming a cycle.
///
/// Expected: Ok with the new name stored
#[tokio::test]
async fn renames_cycle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_cycle(db).await?;

    let repo = CycleRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateCycleParams {
                name: Some("Renamed Cycle".to_string()),
            },
        )
        .await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().name, "Renamed Cycle");

    Ok(())
}

/// Tests updating a cycle that does not exist.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_missing_cycle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = CycleRepository::new(db)
        .update(999, UpdateCycleParams { name: None })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
