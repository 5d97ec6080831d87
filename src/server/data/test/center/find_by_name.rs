use super::*;

/// Tests looking up a center by its exact name.
///
/// Verifies that the repository matches the full name and returns the
/// stored center.
///
/// Expected: Ok with the matching center
#[tokio::test]
async fn finds_center_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_center(db).await?;

    let found = CenterRepository::new(db).find_by_name(&created.name).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    Ok(())
}

/// Tests looking up an unknown center name.
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

    create_center(db).await?;

    let found = CenterRepository::new(db).find_by_name("No Such Center").await?;

    assert!(found.is_none());

    Ok(())
}
