use sea_orm::EntityTrait;

use super::*;

mod require_admin;
mod require_create_player;
mod require_roles;

/// Tests resolving a principal from a valid bearer token.
///
/// Expected: Ok(Principal) carrying the user and token abilities
#[tokio::test]
async fn resolves_principal_from_bearer_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_coach(db).await?;
    let (_, plaintext) = create_token_with_abilities(db, user.id, &["team:create"]).await?;

    let headers = bearer(&plaintext);
    let principal = AuthGuard::new(db, &headers).require(&[]).await?;

    assert_eq!(principal.user.id, user.id);
    assert!(principal.token_can(&Ability::CreateTeam));
    assert!(!principal.token_can(&Ability::UpdateTeam(1)));

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests an Authorization header without the bearer scheme.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());

    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a bearer token that matches no stored hash.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_coach(db).await?;
    create_token(db, user.id).await?;

    let headers = bearer("not-a-real-token");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests that authenticating stamps the token's last use.
///
/// Expected: last_used_at set after a successful require
#[tokio::test]
async fn stamps_last_used_on_success() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_coach(db).await?;
    let (token, plaintext) = create_token(db, user.id).await?;
    assert!(token.last_used_at.is_none());

    let headers = bearer(&plaintext);
    AuthGuard::new(db, &headers).require(&[]).await?;

    let stored = entity::prelude::AccessToken::find_by_id(token.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.last_used_at.is_some());

    Ok(())
}

/// Tests that every listed permission is checked.
///
/// Verifies that a caller meeting the first requirement but not the second
/// is still denied.
///
/// Expected: Err(AuthError::PermissionDenied) for the failing requirement
#[tokio::test]
async fn checks_every_listed_permission() -> Result<(), AppError> {
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
        .require(&[Permission::Coach, Permission::CreatePlayer])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PermissionDenied { .. }))
    ));

    Ok(())
}
