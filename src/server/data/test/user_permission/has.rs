use super::*;

/// Tests checking a permission the user holds.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_granted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    grant_permission(db, user.id, CREATE_PLAYER_PERMISSION).await?;

    let has = UserPermissionRepository::new(db)
        .has(user.id, CREATE_PLAYER_PERMISSION)
        .await?;

    assert!(has);

    Ok(())
}

/// Tests checking a permission the user does not hold.
///
/// A grant to one user must not leak to another.
///
/// Expected: Ok(false) for the other user
#[tokio::test]
async fn returns_false_for_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let granted = create_user(db).await?;
    let other = create_user(db).await?;
    grant_permission(db, granted.id, CREATE_PLAYER_PERMISSION).await?;

    let has = UserPermissionRepository::new(db)
        .has(other.id, CREATE_PLAYER_PERMISSION)
        .await?;

    assert!(!has);

    Ok(())
}
