//! Bank database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Bank, Proposal};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "banco")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nome: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::proposal::Entity")]
    Proposals,
}

impl Related<super::proposal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Proposals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Build the domain entity from this row and its proposal rows
    pub fn into_domain(self, proposals: Vec<super::proposal::Model>) -> Bank {
        Bank {
            id: self.id,
            name: self.nome,
            proposals: proposals.into_iter().map(Proposal::from).collect(),
        }
    }
}
