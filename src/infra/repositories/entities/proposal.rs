//! Proposal database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Proposal;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "proposta")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nome: String,
    /// Owning bank (NOT NULL, cascades on bank delete)
    pub banco_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bank::Entity",
        from = "Column::BancoId",
        to = "super::bank::Column::Id",
        on_delete = "Cascade"
    )]
    Bank,
}

impl Related<super::bank::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bank.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Proposal {
    fn from(model: Model) -> Self {
        Proposal {
            id: model.id,
            name: model.nome,
            bank_id: model.banco_id,
        }
    }
}
