use sea_orm::EntityTrait;

use super::*;

/// Tests marking a token as used.
///
/// Verifies that the last used timestamp moves from empty to set.
///
/// Expected: Ok with a timestamp stored on the token
#[tokio::test]
async fn sets_last_used_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let (token, _) = create_token(db, user.id).await?;
    assert!(token.last_used_at.is_none());

    TokenRepository::new(db).touch_last_used(token.id).await?;

    let reloaded = entity::prelude::AccessToken::find_by_id(token.id)
        .one(db)
        .await?
        .unwrap();
    assert!(reloaded.last_used_at.is_some());

    Ok(())
}

/// Tests touching a token that does not exist.
///
/// Expected: Ok, the update simply matches no rows
#[tokio::test]
async fn ignores_missing_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TokenRepository::new(db).touch_last_used(999).await?;

    Ok(())
}
