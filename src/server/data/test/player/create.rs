use super::*;

/// Tests creating a player with every field set.
///
/// Expected: Ok with the created player and parsed kind
#[tokio::test]
async fn creates_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_dependencies(db).await?;

    let player = PlayerRepository::new(db)
        .create(NewPlayerParams {
            first_name: "Ana".to_string(),
            first_surname: "Torres".to_string(),
            second_surname: Some("Vidal".to_string()),
            kind: PlayerKind::Captain,
            national_id: Some("51234567Z".to_string()),
            email: Some("ana@example.com".to_string()),
            phone: Some("600111222".to_string()),
            team_id: team.id,
            study_id: None,
        })
        .await?;

    assert!(player.id > 0);
    assert_eq!(player.first_name, "Ana");
    assert_eq!(player.kind, PlayerKind::Captain);
    assert_eq!(player.team_id, team.id);
    assert_eq!(player.study_id, None);

    Ok(())
}

/// Tests creating a player with only the required fields.
///
/// Expected: Ok with optional columns left empty
#[tokio::test]
async fn creates_player_with_minimal_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_dependencies(db).await?;

    let player = PlayerRepository::new(db)
        .create(NewPlayerParams {
            first_name: "Leo".to_string(),
            first_surname: "Marsh".to_string(),
            second_surname: None,
            kind: PlayerKind::Player,
            national_id: None,
            email: None,
            phone: None,
            team_id: team.id,
            study_id: None,
        })
        .await?;

    assert_eq!(player.second_surname, None);
    assert_eq!(player.email, None);

    Ok(())
}
