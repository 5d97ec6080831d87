use super::*;

/// Tests promoting a member to coach.
///
/// Expected: Ok(true) with the new role readable afterwards
#[tokio::test]
async fn sets_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    let repo = UserRepository::new(db);
    let changed = repo.set_role(user.id, UserRole::Coach).await?;

    assert!(changed);
    let reloaded = repo.get_by_id(user.id).await?.unwrap();
    assert_eq!(reloaded.role, UserRole::Coach);

    Ok(())
}

/// Tests setting the role of a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let changed = UserRepository::new(db).set_role(999, UserRole::Admin).await?;

    assert!(!changed);

    Ok(())
}
