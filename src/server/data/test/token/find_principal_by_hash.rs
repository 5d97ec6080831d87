use super::*;

/// Tests resolving a stored token to its principal.
///
/// Verifies that hashing the plaintext finds the token and that the
/// principal carries the owning user and the token's abilities.
///
/// Expected: Ok with a principal holding user and abilities
#[tokio::test]
async fn resolves_principal_with_abilities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let (_, plaintext) =
        create_token_with_abilities(db, user.id, &["team:create", "team:update:3"]).await?;

    let principal = TokenRepository::new(db)
        .find_principal_by_hash(&hash_token(&plaintext))
        .await?;

    assert!(principal.is_some());
    let principal = principal.unwrap();
    assert_eq!(principal.user.id, user.id);
    assert!(principal.token_can(&Ability::CreateTeam));
    assert!(principal.token_can(&Ability::UpdateTeam(3)));
    assert!(!principal.token_can(&Ability::UpdateTeam(4)));

    Ok(())
}

/// Tests resolving a digest that matches no token.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_unknown_digest() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    create_token(db, user.id).await?;

    let principal = TokenRepository::new(db)
        .find_principal_by_hash(&hash_token("not-a-real-token"))
        .await?;

    assert!(principal.is_none());

    Ok(())
}

/// Tests that the plaintext itself never matches.
///
/// Only the digest is stored, so looking up the raw plaintext bytes must
/// come back empty.
///
/// Expected: Ok with None for the raw plaintext bytes
#[tokio::test]
async fn plaintext_bytes_do_not_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let (_, plaintext) = create_token(db, user.id).await?;

    let principal = TokenRepository::new(db)
        .find_principal_by_hash(plaintext.as_bytes())
        .await?;

    assert!(principal.is_none());

    Ok(())
}
