use super::*;

/// Tests looking up a cycle by its exact name.
///
/// Expected: Ok with the matching cycle
#[tokio::test]
async fn finds_cycle_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_cycle(db).await?;

    let found = CycleRepository::new(db).find_by_name(&created.name).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    Ok(())
}

/// Tests looking up an unknown cycle name.
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

    let found = CycleRepository::new(db).find_by_name("No Such Cycle").await?;

    assert!(found.is_none());

    Ok(())
}
