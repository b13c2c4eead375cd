//! Business view of cities and supermarkets, independent of the ORM rows.
//!
//! A relation that was not loaded is `None` and is left out of the JSON
//! representation; a loaded relation is `Some`, possibly empty.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ciudad {
    pub id: Uuid,
    pub nombre: String,
    pub pais: String,
    pub numero_habitantes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supermercados: Option<Vec<Supermercado>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supermercado {
    pub id: Uuid,
    pub nombre: String,
    pub longitud: f64,
    pub latitud: f64,
    pub pagina_web: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciudades: Option<Vec<Ciudad>>,
}

impl Ciudad {
    /// Whether `supermercado_id` is in the loaded relation.
    pub fn has_supermercado(&self, supermercado_id: Uuid) -> bool {
        self.supermercados
            .as_deref()
            .is_some_and(|list| list.iter().any(|s| s.id == supermercado_id))
    }
}

/// Fields for a new city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CiudadInput {
    pub nombre: String,
    pub pais: String,
    pub numero_habitantes: i64,
}

/// Fields to overwrite on a stored city; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CiudadPatch {
    pub nombre: Option<String>,
    pub pais: Option<String>,
    pub numero_habitantes: Option<i64>,
}

impl CiudadPatch {
    pub fn apply(self, mut stored: Ciudad) -> Ciudad {
        if let Some(n) = self.nombre { stored.nombre = n; }
        if let Some(p) = self.pais { stored.pais = p; }
        if let Some(h) = self.numero_habitantes { stored.numero_habitantes = h; }
        stored
    }
}

impl From<CiudadInput> for CiudadPatch {
    fn from(input: CiudadInput) -> Self {
        Self { nombre: Some(input.nombre), pais: Some(input.pais), numero_habitantes: Some(input.numero_habitantes) }
    }
}

/// Fields for a new supermarket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupermercadoInput {
    pub nombre: String,
    pub longitud: f64,
    pub latitud: f64,
    pub pagina_web: String,
}

/// Fields to overwrite on a stored supermarket; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupermercadoPatch {
    pub nombre: Option<String>,
    pub longitud: Option<f64>,
    pub latitud: Option<f64>,
    pub pagina_web: Option<String>,
}

impl SupermercadoPatch {
    pub fn apply(self, mut stored: Supermercado) -> Supermercado {
        if let Some(n) = self.nombre { stored.nombre = n; }
        if let Some(lon) = self.longitud { stored.longitud = lon; }
        if let Some(lat) = self.latitud { stored.latitud = lat; }
        if let Some(w) = self.pagina_web { stored.pagina_web = w; }
        stored
    }
}

impl From<SupermercadoInput> for SupermercadoPatch {
    fn from(input: SupermercadoInput) -> Self {
        Self {
            nombre: Some(input.nombre),
            longitud: Some(input.longitud),
            latitud: Some(input.latitud),
            pagina_web: Some(input.pagina_web),
        }
    }
}
