use super::*;

/// Tests updating only the provided fields.
///
/// Verifies that fields passed as `None` keep their stored value while
/// provided fields are overwritten.
///
/// Expected: Ok with the name changed and the address untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CenterRepository::new(db);

    let center = repo
        .create(CreateCenterParams {
            name: "IES West".to_string(),
            address: Some("3 Mill Lane".to_string()),
        })
        .await?;

    let updated = repo
        .update(
            center.id,
            UpdateCenterParams {
                name: Some("IES West Renamed".to_string()),
                address: None,
            },
        )
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.name, "IES West Renamed");
    assert_eq!(updated.address.as_deref(), Some("3 Mill Lane"));

    Ok(())
}

/// Tests updating a center that does not exist.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_missing_center() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = CenterRepository::new(db)
        .update(
            999,
            UpdateCenterParams {
                name: Some("Ghost".to_string()),
                address: None,
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
