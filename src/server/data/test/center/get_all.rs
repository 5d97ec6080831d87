use super::*;

/// Tests centers are ordered alphabetically by name.
///
/// Verifies that the repository returns centers sorted by name in ascending
/// order regardless of creation order.
///
/// Expected: Ok with centers sorted by name
#[tokio::test]
async fn orders_centers_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CenterRepository::new(db);

    repo.create(CreateCenterParams {
        name: "Zephyr Academy".to_string(),
        address: None,
    })
    .await?;
    repo.create(CreateCenterParams {
        name: "Alder High".to_string(),
        address: None,
    })
    .await?;

    let centers = repo.get_all().await?;

    assert_eq!(centers.len(), 2);
    assert_eq!(centers[0].name, "Alder High");
    assert_eq!(centers[1].name, "Zephyr Academy");

    Ok(())
}

/// Tests listing with an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_no_centers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let centers = CenterRepository::new(db).get_all().await?;

    assert!(centers.is_empty());

    Ok(())
}
