use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::validation::FieldError;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CiudadDoc {
    pub id: String,
    pub nombre: String,
    /// Argentina, Ecuador or Paraguay.
    pub pais: String,
    pub numero_habitantes: i64,
    /// Present when the relation was loaded.
    pub supermercados: Option<Vec<SupermercadoSummaryDoc>>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupermercadoDoc {
    pub id: String,
    /// More than 10 characters.
    pub nombre: String,
    pub longitud: f64,
    pub latitud: f64,
    pub pagina_web: String,
    pub ciudades: Option<Vec<CiudadSummaryDoc>>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CiudadSummaryDoc { pub id: String, pub nombre: String, pub pais: String, pub numero_habitantes: i64 }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupermercadoSummaryDoc { pub id: String, pub nombre: String, pub longitud: f64, pub latitud: f64, pub pagina_web: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CiudadBodyDoc { pub nombre: String, pub pais: String, pub numero_habitantes: u64 }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupermercadoBodyDoc { pub nombre: String, pub longitud: f64, pub latitud: f64, pub pagina_web: String }

#[derive(ToSchema)]
pub struct SupermercadoRefDoc { pub id: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBodyDoc {
    pub status_code: u16,
    pub error: String,
    pub message: Option<String>,
    pub details: Option<Vec<FieldError>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::ciudades::find_all,
        crate::routes::ciudades::find_one,
        crate::routes::ciudades::create,
        crate::routes::ciudades::update,
        crate::routes::ciudades::delete,
        crate::routes::supermercados::find_all,
        crate::routes::supermercados::find_one,
        crate::routes::supermercados::create,
        crate::routes::supermercados::update,
        crate::routes::supermercados::delete,
        crate::routes::ciudad_supermercados::add_supermarket_to_city,
        crate::routes::ciudad_supermercados::find_supermarket_from_city,
        crate::routes::ciudad_supermercados::find_supermarkets_from_city,
        crate::routes::ciudad_supermercados::update_supermarkets_from_city,
        crate::routes::ciudad_supermercados::delete_supermarket_from_city,
    ),
    components(
        schemas(
            HealthResponse,
            CiudadDoc,
            SupermercadoDoc,
            CiudadSummaryDoc,
            SupermercadoSummaryDoc,
            CiudadBodyDoc,
            SupermercadoBodyDoc,
            SupermercadoRefDoc,
            ErrorBodyDoc,
            FieldError,
        )
    ),
    tags(
        (name = "health"),
        (name = "cities"),
        (name = "supermarkets"),
        (name = "links")
    )
)]
pub struct ApiDoc;
