use super::*;

/// Tests deleting a team with a token scoped to it.
///
/// Expected: Ok and the team is gone
#[tokio::test]
async fn deletes_team_with_scoped_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_dependencies(db).await?;
    let scope = format!("team:delete:{}", team.id);
    let principal = coach_principal(db, &[scope.as_str()]).await?;

    TeamService::new(db).delete_team(&principal, team.id).await?;

    let result = TeamService::new(db).get_team(team.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a team with a token that lacks the delete scope.
///
/// Expected: Err AbilityDenied and the team still exists
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
    let scope = format!("team:update:{}", team.id);
    let principal = coach_principal(db, &[scope.as_str()]).await?;

    let result = TeamService::new(db).delete_team(&principal, team.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AbilityDenied { .. }))
    ));
    assert!(TeamService::new(db).get_team(team.id).await.is_ok());

    Ok(())
}
