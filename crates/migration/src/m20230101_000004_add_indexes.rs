use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reverse lookup: cities of a supermarket (the PK already covers ciudad_id first)
        manager
            .create_index(
                Index::create()
                    .name("idx_ciudad_supermercado_supermercado")
                    .table(CiudadSupermercado::Table)
                    .col(CiudadSupermercado::SupermercadoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ciudad_pais")
                    .table(Ciudad::Table)
                    .col(Ciudad::Pais)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_ciudad_supermercado_supermercado")
                    .table(CiudadSupermercado::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_ciudad_pais").table(Ciudad::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CiudadSupermercado { Table, SupermercadoId }

#[derive(DeriveIden)]
enum Ciudad { Table, Pais }
