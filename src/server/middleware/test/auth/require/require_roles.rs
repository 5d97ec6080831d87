use super::*;

/// Tests a coach passing the coach requirement.
///
/// Expected: Ok(Principal)
#[tokio::test]
async fn coach_passes_coach_requirement() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_coach(db).await?;
    let (_, plaintext) = create_token(db, user.id).await?;

    let headers = bearer(&plaintext);
    let principal = AuthGuard::new(db, &headers)
        .require(&[Permission::Coach])
        .await?;

    assert_eq!(principal.user.id, user.id);

    Ok(())
}

/// Tests an admin failing the coach requirement.
///
/// The coach requirement is strict, team creation belongs to coaches and an
/// admin account is not one.
///
/// Expected: Err(AuthError::RoleDenied)
#[tokio::test]
async fn admin_fails_coach_requirement() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_admin(db).await?;
    let (_, plaintext) = create_token(db, user.id).await?;

    let headers = bearer(&plaintext);
    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Coach])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::RoleDenied(_)))
    ));

    Ok(())
}

/// Tests admins and coaches both passing the staff requirement.
///
/// Expected: Ok(Principal) for both roles
#[tokio::test]
async fn staff_admits_admin_and_coach() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = create_admin(db).await?;
    let (_, admin_token) = create_token(db, admin.id).await?;
    let coach = create_coach(db).await?;
    let (_, coach_token) = create_token(db, coach.id).await?;

    let headers = bearer(&admin_token);
    assert!(AuthGuard::new(db, &headers)
        .require(&[Permission::Staff])
        .await
        .is_ok());

    let headers = bearer(&coach_token);
    assert!(AuthGuard::new(db, &headers)
        .require(&[Permission::Staff])
        .await
        .is_ok());

    Ok(())
}

/// Tests a member failing the staff requirement.
///
/// Expected: Err(AuthError::RoleDenied)
#[tokio::test]
async fn staff_denies_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let (_, plaintext) = create_token(db, user.id).await?;

    let headers = bearer(&plaintext);
    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Staff])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::RoleDenied(_)))
    ));

    Ok(())
}
