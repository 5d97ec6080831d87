use super::*;

/// Tests updating a center's address.
///
/// Expected: Ok with the new address and the name untouched
#[tokio::test]
async fn updates_center() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let center = create_center(db).await?;

    let updated = CenterService::new(db)
        .update_center(
            center.id,
            UpdateCenterParams {
                name: None,
                address: Some("Avenida Nueva 12".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.name, center.name);
    assert_eq!(updated.address, Some("Avenida Nueva 12".to_string()));

    Ok(())
}

/// Tests updating a center that does not exist.
///
/// Expected: Err NotFound
#[tokio::test]
async fn fails_on_unknown_center() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CenterService::new(db)
        .update_center(
            9999,
            UpdateCenterParams {
                name: Some("Ghost".to_string()),
                address: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
