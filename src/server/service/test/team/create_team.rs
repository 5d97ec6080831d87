use super::*;

/// Tests creating a team with an inline roster.
///
/// Expected: Ok with the roster entry's cycle resolved to a study
#[tokio::test]
async fn creates_team_with_roster() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (center, cycle, study) = create_study_with_dependencies(db).await?;

    let team = TeamService::new(db)
        .create_team(CreateTeamParams {
            name: "Los Halcones".to_string(),
            group: Some("A".to_string()),
            center: center.name.clone(),
            players: vec![CreateTeamPlayerParams {
                first_name: "Marta".to_string(),
                first_surname: "Garcia".to_string(),
                second_surname: None,
                kind: PlayerKind::Captain,
                national_id: None,
                email: None,
                phone: None,
                cycle: Some(cycle.name.clone()),
            }],
        })
        .await?;

    assert_eq!(team.team.name, "Los Halcones");
    assert_eq!(team.center.as_ref().map(|center| center.id), Some(center.id));
    assert_eq!(team.players.len(), 1);
    assert_eq!(team.players[0].study_id, Some(study.id));

    Ok(())
}

/// Tests creating a team at a center that does not exist.
///
/// Expected: Err NotFound
#[tokio::test]
async fn fails_on_unknown_center() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeamService::new(db)
        .create_team(CreateTeamParams {
            name: "Los Halcones".to_string(),
            group: None,
            center: "Nonexistent".to_string(),
            players: Vec::new(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests creating a team whose name is already taken.
///
/// Expected: Err Conflict
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (center, existing) = create_team_with_dependencies(db).await?;

    let result = TeamService::new(db)
        .create_team(CreateTeamParams {
            name: existing.name,
            group: None,
            center: center.name.clone(),
            players: Vec::new(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests creating a team whose roster references an unknown cycle.
///
/// Expected: Err NotFound and no team row left behind
#[tokio::test]
async fn bad_cycle_leaves_no_team_behind() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let center = create_center(db).await?;

    let result = TeamService::new(db)
        .create_team(CreateTeamParams {
            name: "Los Halcones".to_string(),
            group: None,
            center: center.name.clone(),
            players: vec![CreateTeamPlayerParams {
                first_name: "Marta".to_string(),
                first_surname: "Garcia".to_string(),
                second_surname: None,
                kind: PlayerKind::Player,
                national_id: None,
                email: None,
                phone: None,
                cycle: Some("Nonexistent".to_string()),
            }],
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let admin = admin_principal(db).await?;
    let teams = TeamService::new(db).get_all_teams(Some(&admin)).await?;
    assert!(teams.is_empty());

    Ok(())
}
