use super::*;

/// Tests adding a player with a token scoped to the team.
///
/// Expected: Ok with the cycle resolved to a study
#[tokio::test]
async fn creates_player_with_scoped_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (center, cycle, study) = create_study_with_dependencies(db).await?;
    let team = create_team(db, center.id).await?;
    let scope = format!("player:create:{}", team.id);
    let principal = coach_principal(db, &[scope.as_str()]).await?;

    let mut params = player_params(&team.name);
    params.cycle = Some(cycle.name.clone());

    let player = PlayerService::new(db).create_player(&principal, params).await?;

    assert_eq!(player.player.team_id, team.id);
    assert_eq!(player.player.study_id, Some(study.id));
    assert_eq!(
        player.study.as_ref().map(|study| study.study.id),
        Some(study.id)
    );

    Ok(())
}

/// Tests adding a player to a team that does not exist.
///
/// Expected: Err NotFound before any ability check
#[tokio::test]
async fn fails_on_unknown_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let principal = coach_principal(db, &[]).await?;

    let result = PlayerService::new(db)
        .create_player(&principal, player_params("Nonexistent"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests adding a player with a token scoped to a different team.
///
/// Expected: Err AbilityDenied
#[tokio::test]
async fn denies_token_scoped_to_other_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (center, team) = create_team_with_dependencies(db).await?;
    let other = create_team(db, center.id).await?;
    let scope = format!("player:create:{}", other.id);
    let principal = coach_principal(db, &[scope.as_str()]).await?;

    let result = PlayerService::new(db)
        .create_player(&principal, player_params(&team.name))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AbilityDenied { .. }))
    ));

    Ok(())
}

/// Tests the thirteenth player on a full roster.
///
/// Expected: Err Conflict and the caller's create permission is revoked
#[tokio::test]
async fn full_roster_revokes_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_dependencies(db).await?;
    for _ in 0..12 {
        create_player(db, team.id).await?;
    }

    let scope = format!("player:create:{}", team.id);
    let principal = coach_principal(db, &[scope.as_str()]).await?;
    grant_permission(db, principal.user.id, CREATE_PLAYER_PERMISSION).await?;

    let result = PlayerService::new(db)
        .create_player(&principal, player_params(&team.name))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(
        !UserPermissionRepository::new(db)
            .has(principal.user.id, CREATE_PLAYER_PERMISSION)
            .await?
    );

    Ok(())
}

/// Tests that a successful create below the cap keeps the permission.
///
/// Expected: Ok and the permission is still granted
#[tokio::test]
async fn create_below_cap_keeps_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_dependencies(db).await?;
    let scope = format!("player:create:{}", team.id);
    let principal = coach_principal(db, &[scope.as_str()]).await?;
    grant_permission(db, principal.user.id, CREATE_PLAYER_PERMISSION).await?;

    PlayerService::new(db)
        .create_player(&principal, player_params(&team.name))
        .await?;

    assert!(
        UserPermissionRepository::new(db)
            .has(principal.user.id, CREATE_PLAYER_PERMISSION)
            .await?
    );

    Ok(())
}
