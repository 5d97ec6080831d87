use sea_orm_migration::{prelude::*, schema::*};

use super::m20260115_000002_create_access_token_table::AccessToken;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TokenAbility::Table)
                    .if_not_exists()
                    .col(pk_auto(TokenAbility::Id))
                    .col(integer(TokenAbility::TokenId))
                    .col(string(TokenAbility::Ability))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_token_ability_token_id")
                            .from(TokenAbility::Table, TokenAbility::TokenId)
                            .to(AccessToken::Table, AccessToken::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_token_ability_token_id_ability")
                    .table(TokenAbility::Table)
                    .col(TokenAbility::TokenId)
                    .col(TokenAbility::Ability)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TokenAbility::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TokenAbility {
    Table,
    Id,
    TokenId,
    Ability,
}
