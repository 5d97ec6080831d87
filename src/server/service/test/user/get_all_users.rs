use super::*;

/// Tests fetching a page of users.
///
/// Expected: Ok with the page contents and pagination counters
#[tokio::test]
async fn returns_page_with_counters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        create_user(db).await?;
    }

    let page = UserService::new(db)
        .get_all_users(GetUsersParams {
            page: 1,
            per_page: 2,
        })
        .await?;

    assert_eq!(page.users.len(), 2);
    assert_eq!(page.total, 5);
    assert_eq!(page.page, 1);
    assert_eq!(page.per_page, 2);
    assert_eq!(page.total_pages, 3);

    Ok(())
}
