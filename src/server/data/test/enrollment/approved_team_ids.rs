use super::*;

/// Tests that only approved enrollments contribute team ids.
///
/// Pending and rejected enrollments must be filtered out.
///
/// Expected: Ok with the approved team's id only
#[tokio::test]
async fn returns_only_approved_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let center = create_center(db).await?;
    let approved_team = create_team(db, center.id).await?;
    let pending_team = create_team(db, center.id).await?;
    let rejected_team = create_team(db, center.id).await?;

    create_approved_enrollment(db, approved_team.id).await?;
    create_enrollment(db, pending_team.id).await?;
    let repo = EnrollmentRepository::new(db);
    let rejected = create_enrollment(db, rejected_team.id).await?;
    repo.update_status(rejected.id, EnrollmentStatus::Rejected)
        .await?;

    let team_ids = repo.approved_team_ids().await?;

    assert_eq!(team_ids, vec![approved_team.id]);

    Ok(())
}

/// Tests with no enrollments at all.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_without_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team_ids = EnrollmentRepository::new(db).approved_team_ids().await?;

    assert!(team_ids.is_empty());

    Ok(())
}
