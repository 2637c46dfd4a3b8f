//! Migration: Create proposta table, owned by banco.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_banco_table::Banco;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Proposta::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Proposta::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Proposta::Nome).string().not_null())
                    .col(ColumnDef::new(Proposta::BancoId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_proposta_banco")
                            .from(Proposta::Table, Proposta::BancoId)
                            .to(Banco::Table, Banco::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Proposals are always looked up by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_proposta_banco_id")
                    .table(Proposta::Table)
                    .col(Proposta::BancoId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Proposta::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Proposta {
    Table,
    Id,
    Nome,
    BancoId,
}
