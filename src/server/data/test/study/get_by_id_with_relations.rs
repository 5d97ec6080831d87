use super::*;

/// Tests fetching a single study with relations.
///
/// Expected: Ok with the study and its center and cycle
#[tokio::test]
async fn loads_single_study() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (center, cycle, study) = create_study_with_dependencies(db).await?;

    let found = StudyRepository::new(db)
        .get_by_id_with_relations(study.id)
        .await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.study.id, study.id);
    assert_eq!(found.center.id, center.id);
    assert_eq!(found.cycle.id, cycle.id);

    Ok(())
}

/// Tests fetching a study that does not exist.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_missing_study() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = StudyRepository::new(db).get_by_id_with_relations(999).await?;

    assert!(found.is_none());

    Ok(())
}
