pub use sea_orm_migration::prelude::*;

mod m20260115_000001_create_user_table;
mod m20260115_000002_create_access_token_table;
mod m20260115_000003_create_token_ability_table;
mod m20260115_000004_create_user_permission_table;
mod m20260115_000005_create_center_table;
mod m20260115_000006_create_cycle_table;
mod m20260115_000007_create_study_table;
mod m20260115_000008_create_team_table;
mod m20260115_000009_create_player_table;
mod m20260115_000010_create_enrollment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_user_table::Migration),
            Box::new(m20260115_000002_create_access_token_table::Migration),
            Box::new(m20260115_000003_create_token_ability_table::Migration),
            Box::new(m20260115_000004_create_user_permission_table::Migration),
            Box::new(m20260115_000005_create_center_table::Migration),
            Box::new(m20260115_000006_create_cycle_table::Migration),
            Box::new(m20260115_000007_create_study_table::Migration),
            Box::new(m20260115_000008_create_team_table::Migration),
            Box::new(m20260115_000009_create_player_table::Migration),
            Box::new(m20260115_000010_create_enrollment_table::Migration),
        ]
    }
}
