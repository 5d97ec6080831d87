use super::*;

/// Tests an anonymous request.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let principal = AuthGuard::new(db, &headers).current_user().await?;

    assert!(principal.is_none());

    Ok(())
}

/// Tests a bearer token that matches no stored hash.
///
/// Expected: Ok(None) rather than an error
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = bearer("not-a-real-token");
    let principal = AuthGuard::new(db, &headers).current_user().await?;

    assert!(principal.is_none());

    Ok(())
}

/// Tests a valid bearer token.
///
/// Expected: Ok(Some(Principal))
#[tokio::test]
async fn returns_principal_for_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_coach(db).await?;
    let (_, plaintext) = create_token(db, user.id).await?;

    let headers = bearer(&plaintext);
    let principal = AuthGuard::new(db, &headers).current_user().await?;

    assert_eq!(principal.map(|principal| principal.user.id), Some(user.id));

    Ok(())
}
