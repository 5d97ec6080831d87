use super::*;

/// Tests team listing as an admin.
///
/// Expected: Ok with every team regardless of enrollment status
#[tokio::test]
async fn admin_sees_all_teams() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let center = create_center(db).await?;
    let approved = create_team(db, center.id).await?;
    create_approved_enrollment(db, approved.id).await?;
    create_team(db, center.id).await?;

    let principal = admin_principal(db).await?;

    let teams = TeamService::new(db).get_all_teams(Some(&principal)).await?;

    assert_eq!(teams.len(), 2);

    Ok(())
}

/// Tests team listing without authentication.
///
/// Expected: Ok with only teams whose enrollment is approved
#[tokio::test]
async fn anonymous_sees_only_approved_teams() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let center = create_center(db).await?;
    let approved = create_team(db, center.id).await?;
    create_approved_enrollment(db, approved.id).await?;
    let pending = create_team(db, center.id).await?;
    create_enrollment(db, pending.id).await?;
    create_team(db, center.id).await?;

    let teams = TeamService::new(db).get_all_teams(None).await?;

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].team.id, approved.id);

    Ok(())
}

/// Tests team listing as a coach.
///
/// Expected: Ok with only teams whose enrollment is approved
#[tokio::test]
async fn coach_sees_only_approved_teams() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let center = create_center(db).await?;
    let approved = create_team(db, center.id).await?;
    create_approved_enrollment(db, approved.id).await?;
    create_team(db, center.id).await?;

    let principal = coach_principal(db, &[WILDCARD_ABILITY]).await?;

    let teams = TeamService::new(db).get_all_teams(Some(&principal)).await?;

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].team.id, approved.id);

    Ok(())
}
