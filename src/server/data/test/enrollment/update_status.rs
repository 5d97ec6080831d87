use super::*;

/// Tests approving a pending enrollment.
///
/// Expected: Ok with the status set to approved
#[tokio::test]
async fn approves_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_dependencies(db).await?;
    let enrollment = create_enrollment(db, team.id).await?;

    let updated = EnrollmentRepository::new(db)
        .update_status(enrollment.id, EnrollmentStatus::Approved)
        .await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().status, EnrollmentStatus::Approved);

    Ok(())
}

/// Tests updating an enrollment that does not exist.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_missing_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = EnrollmentRepository::new(db)
        .update_status(999, EnrollmentStatus::Approved)
        .await?;

    assert!(updated.is_none());

    Ok(())
}
