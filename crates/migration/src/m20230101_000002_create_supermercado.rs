//! Create `supermercado` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Supermercado::Table)
                    .if_not_exists()
                    .col(uuid(Supermercado::Id).primary_key())
                    .col(string_len(Supermercado::Nombre, 256).not_null())
                    .col(double(Supermercado::Longitud).not_null())
                    .col(double(Supermercado::Latitud).not_null())
                    .col(string_len(Supermercado::PaginaWeb, 512).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Supermercado::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Supermercado { Table, Id, Nombre, Longitud, Latitud, PaginaWeb }
