use super::*;

/// Tests removing a player with a scoped token.
///
/// Expected: Ok and the create permission is granted back to the caller
#[tokio::test]
async fn delete_regrants_create_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_dependencies(db).await?;
    let player = create_player(db, team.id).await?;
    let scope = format!("player:delete:{}", team.id);
    let principal = coach_principal(db, &[scope.as_str()]).await?;

    PlayerService::new(db)
        .delete_player(&principal, player.id)
        .await?;

    let result = PlayerService::new(db).get_player(player.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(
        UserPermissionRepository::new(db)
            .has(principal.user.id, CREATE_PLAYER_PERMISSION)
            .await?
    );

    Ok(())
}

/// Tests removing a player with a token that lacks the delete scope.
///
/// Expected: Err AbilityDenied and the player still exists
#[tokio::test]
async fn denies_token_without_delete_scope() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_dependencies(db).await?;
    let player = create_player(db, team.id).await?;
    let scope = format!("player:update:{}", team.id);
    let principal = coach_principal(db, &[scope.as_str()]).await?;

    let result = PlayerService::new(db)
        .delete_player(&principal, player.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AbilityDenied { .. }))
    ));
    assert!(PlayerService::new(db).get_player(player.id).await.is_ok());

    Ok(())
}
