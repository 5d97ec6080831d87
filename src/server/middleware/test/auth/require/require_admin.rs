use super::*;

/// Tests an admin passing the admin requirement.
///
/// Expected: Ok(Principal) with the admin user
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_admin(db).await?;
    let (_, plaintext) = create_token(db, user.id).await?;

    let headers = bearer(&plaintext);
    let principal = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(principal.user.id, user.id);
    assert!(principal.is_admin());

    Ok(())
}

/// Tests a coach failing the admin requirement.
///
/// Expected: Err(AuthError::RoleDenied)
#[tokio::test]
async fn denies_coach() -> Result<(), AppError> {
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
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::RoleDenied(_)))
    ));

    Ok(())
}
