//! Create `ciudad` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ciudad::Table)
                    .if_not_exists()
                    .col(uuid(Ciudad::Id).primary_key())
                    .col(string_len(Ciudad::Nombre, 256).not_null())
                    .col(string_len(Ciudad::Pais, 64).not_null())
                    .col(big_integer(Ciudad::NumeroHabitantes).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Ciudad::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Ciudad { Table, Id, Nombre, Pais, NumeroHabitantes }
