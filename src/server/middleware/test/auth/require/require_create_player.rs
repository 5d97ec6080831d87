use super::*;

/// Tests a caller holding the create permission.
///
/// Expected: Ok(Principal)
#[tokio::test]
async fn grants_access_with_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_coach(db).await?;
    grant_permission(db, user.id, CREATE_PLAYER_PERMISSION).await?;
    let (_, plaintext) = create_token(db, user.id).await?;

    let headers = bearer(&plaintext);
    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::CreatePlayer])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a caller without the create permission.
///
/// This is the gate a coach hits after the roster cap revoked their grant.
///
/// Expected: Err(AuthError::PermissionDenied)
#[tokio::test]
async fn denies_caller_without_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_coach(db).await?;
    let (_, plaintext) = create_token(db, user.id).await?;

    let headers = bearer(&plaintext);
    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::CreatePlayer])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PermissionDenied { .. }))
    ));

    Ok(())
}
