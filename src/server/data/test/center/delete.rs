use super::*;

/// Tests deleting an existing center.
///
/// Verifies that the row is removed and subsequent lookups find nothing.
///
/// Expected: Ok(true) and the center gone
#[tokio::test]
async fn deletes_center() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let center = create_center(db).await?;

    let repo = CenterRepository::new(db);
    let deleted = repo.delete(center.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(center.id).await?.is_none());

    Ok(())
}

/// Tests deleting a center that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_center() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = CenterRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
