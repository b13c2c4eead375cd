//! Create `ciudad_supermercado` join table.
//!
//! One row per linked pair; the composite primary key keeps the link set a set
//! and both foreign keys cascade so removing either side drops its links.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CiudadSupermercado::Table)
                    .if_not_exists()
                    .col(uuid(CiudadSupermercado::CiudadId).not_null())
                    .col(uuid(CiudadSupermercado::SupermercadoId).not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_ciudad_supermercado")
                            .col(CiudadSupermercado::CiudadId)
                            .col(CiudadSupermercado::SupermercadoId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ciudad_supermercado_ciudad")
                            .from(CiudadSupermercado::Table, CiudadSupermercado::CiudadId)
                            .to(Ciudad::Table, Ciudad::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ciudad_supermercado_supermercado")
                            .from(CiudadSupermercado::Table, CiudadSupermercado::SupermercadoId)
                            .to(Supermercado::Table, Supermercado::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CiudadSupermercado::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CiudadSupermercado { Table, CiudadId, SupermercadoId }

#[derive(DeriveIden)]
enum Ciudad { Table, Id }

#[derive(DeriveIden)]
enum Supermercado { Table, Id }
