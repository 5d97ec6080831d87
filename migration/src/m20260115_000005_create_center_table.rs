use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Center::Table)
                    .if_not_exists()
                    .col(pk_auto(Center::Id))
                    .col(string_uniq(Center::Name))
                    .col(string_null(Center::Address))
                    .col(
                        timestamp(Center::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Center::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Center::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Center {
    Table,
    Id,
    Name,
    Address,
    CreatedAt,
    UpdatedAt,
}
