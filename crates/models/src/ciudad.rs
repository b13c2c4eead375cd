use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{ciudad_supermercado, errors, supermercado};

pub const PAIS_INVALIDO: &str =
    "El país al que pertenece la ciudad debe ser Argentina, Ecuador ó Paraguay";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ciudad")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nombre: String,
    pub pais: String,
    pub numero_habitantes: i64,
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

impl Related<supermercado::Entity> for Entity {
    fn to() -> RelationDef {
        ciudad_supermercado::Relation::Supermercado.def()
    }

    fn via() -> Option<RelationDef> {
        Some(ciudad_supermercado::Relation::Ciudad.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Countries a city may belong to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pais {
    Argentina,
    Ecuador,
    Paraguay,
}

impl Pais {
    pub const ALL: [Pais; 3] = [Pais::Argentina, Pais::Ecuador, Pais::Paraguay];

    pub fn as_str(self) -> &'static str {
        match self {
            Pais::Argentina => "Argentina",
            Pais::Ecuador => "Ecuador",
            Pais::Paraguay => "Paraguay",
        }
    }
}

impl fmt::Display for Pais {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pais {
    type Err = errors::ModelError;

    /// Exact, case-sensitive match on the country name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pais::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| errors::ModelError::Validation(PAIS_INVALIDO.into()))
    }
}

pub fn validate_pais(pais: &str) -> Result<Pais, errors::ModelError> {
    pais.parse()
}

pub const HABITANTES_INVALIDO: &str = "El número de habitantes de la ciudad no puede ser negativo";

pub fn validate_numero_habitantes(numero_habitantes: i64) -> Result<(), errors::ModelError> {
    if numero_habitantes < 0 {
        return Err(errors::ModelError::Validation(HABITANTES_INVALIDO.into()));
    }
    Ok(())
}
