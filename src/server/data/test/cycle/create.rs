use super::*;

/// Tests creating a cycle.
///
/// Expected: Ok with the created cycle
#[tokio::test]
async fn creates_cycle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cycle = CycleRepository::new(db)
        .create(CreateCycleParams {
            name: "Web Development".to_string(),
        })
        .await?;

    assert!(cycle.id > 0);
    assert_eq!(cycle.name, "Web Development");

    Ok(())
}

/// Tests that duplicate cycle names are rejected.
///
/// Verifies that the unique constraint on the name column surfaces as a
/// database error for the second insert.
///
/// Expected: Err for the duplicate name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CycleRepository::new(db);

    repo.create(CreateCycleParams {
        name: "Networking".to_string(),
    })
    .await?;

    let result = repo
        .create(CreateCycleParams {
            name: "Networking".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
