use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cycle::Table)
                    .if_not_exists()
                    .col(pk_auto(Cycle::Id))
                    .col(string_uniq(Cycle::Name))
                    .col(
                        timestamp(Cycle::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Cycle::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cycle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cycle {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
