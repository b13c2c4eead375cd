use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{ciudad, ciudad_supermercado, errors};

/// A supermarket name must be strictly longer than this many characters.
pub const NOMBRE_MIN_LEN: usize = 10;

pub const NOMBRE_INVALIDO: &str = "El nombre del supermercado debe tener más de 10 caracteres";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supermercado")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nombre: String,
    #[sea_orm(column_type = "Double")]
    pub longitud: f64,
    #[sea_orm(column_type = "Double")]
    pub latitud: f64,
    pub pagina_web: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    CiudadSupermercado,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::CiudadSupermercado => Entity::has_many(ciudad_supermercado::Entity).into(),
        }
    }
}

impl Related<ciudad_supermercado::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CiudadSupermercado.def()
    }
}

impl Related<ciudad::Entity> for Entity {
    fn to() -> RelationDef {
        ciudad_supermercado::Relation::Ciudad.def()
    }

    fn via() -> Option<RelationDef> {
        Some(ciudad_supermercado::Relation::Supermercado.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Length is counted in characters, not bytes.
pub fn validate_nombre(nombre: &str) -> Result<(), errors::ModelError> {
    if nombre.chars().count() <= NOMBRE_MIN_LEN {
        return Err(errors::ModelError::Validation(NOMBRE_INVALIDO.into()));
    }
    Ok(())
}
