use super::*;

/// Tests resolving a cycle to its study.
///
/// When a cycle has several studies the one with the lowest id wins so the
/// resolution is deterministic.
///
/// Expected: Ok with the first study of the cycle
#[tokio::test]
async fn returns_lowest_id_study() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let center = create_center(db).await?;
    let cycle = create_cycle(db).await?;
    let first = create_study(db, center.id, cycle.id).await?;
    create_study(db, center.id, cycle.id).await?;

    let found = StudyRepository::new(db).find_first_by_cycle(cycle.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, first.id);

    Ok(())
}

/// Tests resolving a cycle without studies.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_cycle_without_studies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cycle = create_cycle(db).await?;

    let found = StudyRepository::new(db).find_first_by_cycle(cycle.id).await?;

    assert!(found.is_none());

    Ok(())
}
