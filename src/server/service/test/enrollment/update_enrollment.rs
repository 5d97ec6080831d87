use super::*;

/// Tests approving a pending enrollment.
///
/// Expected: Ok with the status set to approved
#[tokio::test]
async fn approves_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_dependencies(db).await?;
    let enrollment = create_enrollment(db, team.id).await?;

    let updated = EnrollmentService::new(db)
        .update_enrollment(
            enrollment.id,
            UpdateEnrollmentParams {
                status: EnrollmentStatus::Approved,
            },
        )
        .await?;

    assert_eq!(updated.status, EnrollmentStatus::Approved);

    Ok(())
}

/// Tests updating an enrollment that does not exist.
///
/// Expected: Err NotFound
#[tokio::test]
async fn fails_on_unknown_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EnrollmentService::new(db)
        .update_enrollment(
            9999,
            UpdateEnrollmentParams {
                status: EnrollmentStatus::Rejected,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
