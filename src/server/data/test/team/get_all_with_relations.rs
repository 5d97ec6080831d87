use super::*;

/// Tests listing teams with their center and roster loaded.
///
/// Verifies that each returned team embeds its center and every player on
/// the roster.
///
/// Expected: Ok with relations populated
#[tokio::test]
async fn loads_center_and_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (center, team) = create_team_with_dependencies(db).await?;
    create_player(db, team.id).await?;
    create_player(db, team.id).await?;

    let teams = TeamRepository::new(db).get_all_with_relations().await?;

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].team.id, team.id);
    assert_eq!(teams[0].center.as_ref().map(|center| center.id), Some(center.id));
    assert_eq!(teams[0].players.len(), 2);

    Ok(())
}

/// Tests that a team without players gets an empty roster.
///
/// Expected: Ok with an empty player vector
#[tokio::test]
async fn returns_empty_roster_for_team_without_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_team_with_dependencies(db).await?;

    let teams = TeamRepository::new(db).get_all_with_relations().await?;

    assert_eq!(teams.len(), 1);
    assert!(teams[0].players.is_empty());

    Ok(())
}

/// Tests that players land on the team that owns them.
///
/// With two teams each holding one player, the rosters must not bleed into
/// each other.
///
/// Expected: Ok with each roster holding its own player
#[tokio::test]
async fn groups_players_by_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let center = create_center(db).await?;
    let first_team = create_team(db, center.id).await?;
    let second_team = create_team(db, center.id).await?;
    let first_player = create_player(db, first_team.id).await?;
    let second_player = create_player(db, second_team.id).await?;

    let teams = TeamRepository::new(db).get_all_with_relations().await?;

    assert_eq!(teams.len(), 2);
    for team in teams {
        assert_eq!(team.players.len(), 1);
        if team.team.id == first_team.id {
            assert_eq!(team.players[0].id, first_player.id);
        } else {
            assert_eq!(team.players[0].id, second_player.id);
        }
    }

    Ok(())
}
