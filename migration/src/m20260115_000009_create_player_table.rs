use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260115_000007_create_study_table::Study, m20260115_000008_create_team_table::Team,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string(Player::FirstName))
                    .col(string(Player::FirstSurname))
                    .col(string_null(Player::SecondSurname))
                    .col(string(Player::Kind))
                    .col(string_null(Player::NationalId))
                    .col(string_null(Player::Email))
                    .col(string_null(Player::Phone))
                    .col(integer(Player::TeamId))
                    .col(integer_null(Player::StudyId))
                    .col(
                        timestamp(Player::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Player::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_team_id")
                            .from(Player::Table, Player::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_study_id")
                            .from(Player::Table, Player::StudyId)
                            .to(Study::Table, Study::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    FirstName,
    FirstSurname,
    SecondSurname,
    Kind,
    NationalId,
    Email,
    Phone,
    TeamId,
    StudyId,
    CreatedAt,
    UpdatedAt,
}
