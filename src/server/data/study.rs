//! Study data repository for database operations.
//!
//! Studies reference a center and a cycle. List and detail queries load both
//! referenced rows in bulk so responses can embed them without per-row
//! round trips.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::center::Center;
use crate::server::model::cycle::Cycle;
use crate::server::model::study::{
    CreateStudyParams, Study, StudyWithRelations, UpdateStudyParams,
};

/// Repository providing database operations for studies.
pub struct StudyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new study.
    ///
    /// The referenced center and cycle must already exist.
    ///
    /// # Returns
    /// - `Ok(Study)` - The created study
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateStudyParams) -> Result<Study, DbErr> {
        let entity = entity::study::ActiveModel {
            center_id: ActiveValue::Set(param.center_id),
            cycle_id: ActiveValue::Set(param.cycle_id),
            course: ActiveValue::Set(param.course),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Study::from_entity(entity))
    }

    /// Gets all studies with their center and cycle rows.
    ///
    /// # Returns
    /// - `Ok(Vec<StudyWithRelations>)` - All studies, empty when none exist
    /// - `Err(DbErr)` - Database error during query or a dangling reference
    pub async fn get_all_with_relations(&self) -> Result<Vec<StudyWithRelations>, DbErr> {
        let entities = entity::prelude::Study::find()
            .order_by_asc(entity::study::Column::Id)
            .all(self.db)
            .await?;

        self.load_relations(entities).await
    }

    /// Gets a study by id with its center and cycle rows.
    ///
    /// # Returns
    /// - `Ok(Some(StudyWithRelations))` - Study found
    /// - `Ok(None)` - No study with that id
    /// - `Err(DbErr)` - Database error during query or a dangling reference
    pub async fn get_by_id_with_relations(
        &self,
        study_id: i32,
    ) -> Result<Option<StudyWithRelations>, DbErr> {
        let entity = match entity::prelude::Study::find_by_id(study_id)
            .one(self.db)
            .await?
        {
            Some(entity) => entity,
            None => return Ok(None),
        };

        let mut studies = self.load_relations(vec![entity]).await?;

        Ok(studies.pop())
    }

    /// Gets the studies with the given ids, with their center and cycle rows.
    ///
    /// Used to batch load the studies referenced by a page of players.
    ///
    /// # Returns
    /// - `Ok(Vec<StudyWithRelations>)` - Matching studies in id order
    /// - `Err(DbErr)` - Database error during query or a dangling reference
    pub async fn get_by_ids_with_relations(
        &self,
        study_ids: Vec<i32>,
    ) -> Result<Vec<StudyWithRelations>, DbErr> {
        if study_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Study::find()
            .filter(entity::study::Column::Id.is_in(study_ids))
            .order_by_asc(entity::study::Column::Id)
            .all(self.db)
            .await?;

        self.load_relations(entities).await
    }

    /// Gets a study by its id without loading relations.
    pub async fn get_by_id(&self, study_id: i32) -> Result<Option<Study>, DbErr> {
        let entity = entity::prelude::Study::find_by_id(study_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Study::from_entity))
    }

    /// Finds the first study belonging to a cycle, lowest id first.
    ///
    /// Player requests reference their study through the cycle name, which is
    /// resolved to the cycle's study via this lookup.
    ///
    /// # Returns
    /// - `Ok(Some(Study))` - A study exists for the cycle
    /// - `Ok(None)` - The cycle has no studies
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_first_by_cycle(&self, cycle_id: i32) -> Result<Option<Study>, DbErr> {
        let entity = entity::prelude::Study::find()
            .filter(entity::study::Column::CycleId.eq(cycle_id))
            .order_by_asc(entity::study::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Study::from_entity))
    }

    /// Updates a study, leaving `None` fields untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Study))` - The updated study
    /// - `Ok(None)` - No study with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        study_id: i32,
        param: UpdateStudyParams,
    ) -> Result<Option<Study>, DbErr> {
        let entity = match entity::prelude::Study::find_by_id(study_id)
            .one(self.db)
            .await?
        {
            Some(entity) => entity,
            None => return Ok(None),
        };

        let mut active: entity::study::ActiveModel = entity.into();

        if let Some(center_id) = param.center_id {
            active.center_id = ActiveValue::Set(center_id);
        }
        if let Some(cycle_id) = param.cycle_id {
            active.cycle_id = ActiveValue::Set(cycle_id);
        }
        if let Some(course) = param.course {
            active.course = ActiveValue::Set(course);
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Study::from_entity(updated)))
    }

    /// Deletes a study.
    ///
    /// Players referencing the study keep their row, the foreign key nulls
    /// their study reference.
    ///
    /// # Returns
    /// - `Ok(true)` - Study deleted
    /// - `Ok(false)` - No study with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, study_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Study::delete_by_id(study_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads the center and cycle rows referenced by the given studies in two
    /// bulk queries and zips them onto each study.
    async fn load_relations(
        &self,
        entities: Vec<entity::study::Model>,
    ) -> Result<Vec<StudyWithRelations>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let center_ids: Vec<i32> = entities.iter().map(|study| study.center_id).collect();
        let cycle_ids: Vec<i32> = entities.iter().map(|study| study.cycle_id).collect();

        let centers: HashMap<i32, Center> = entity::prelude::Center::find()
            .filter(entity::center::Column::Id.is_in(center_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|entity| (entity.id, Center::from_entity(entity)))
            .collect();

        let cycles: HashMap<i32, Cycle> = entity::prelude::Cycle::find()
            .filter(entity::cycle::Column::Id.is_in(cycle_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|entity| (entity.id, Cycle::from_entity(entity)))
            .collect();

        let mut studies = Vec::with_capacity(entities.len());

        for entity in entities {
            let center = centers.get(&entity.center_id).cloned().ok_or_else(|| {
                DbErr::Custom(format!(
                    "Center {} referenced by study {} was not found",
                    entity.center_id, entity.id
                ))
            })?;
            let cycle = cycles.get(&entity.cycle_id).cloned().ok_or_else(|| {
                DbErr::Custom(format!(
                    "Cycle {} referenced by study {} was not found",
                    entity.cycle_id, entity.id
                ))
            })?;

            studies.push(StudyWithRelations {
                study: Study::from_entity(entity),
                center,
                cycle,
            });
        }

        Ok(studies)
    }
}
