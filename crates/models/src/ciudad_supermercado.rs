use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{ciudad, supermercado};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ciudad_supermercado")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub ciudad_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub supermercado_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Ciudad,
    Supermercado,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Ciudad => Entity::belongs_to(ciudad::Entity)
                .from(Column::CiudadId)
                .to(ciudad::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Supermercado => Entity::belongs_to(supermercado::Entity)
                .from(Column::SupermercadoId)
                .to(supermercado::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<ciudad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ciudad.def()
    }
}

impl Related<supermercado::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supermercado.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
