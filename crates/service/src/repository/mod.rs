//! Storage ports, one per entity type, plus their adapters.
//!
//! Managers receive these as `Arc<dyn ...>` at construction time and never
//! talk to the database directly.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Ciudad, Supermercado};
use crate::errors::ServiceError;

pub mod mock;
pub mod seaorm;

#[async_trait]
pub trait CiudadRepository: Send + Sync {
    async fn find_all(&self, with_relations: bool) -> Result<Vec<Ciudad>, ServiceError>;
    async fn find_by_id(&self, id: Uuid, with_relations: bool) -> Result<Option<Ciudad>, ServiceError>;
    /// Insert or update the row. When `supermercados` is `Some`, the city's
    /// link set is replaced by exactly that list.
    async fn save(&self, ciudad: &Ciudad) -> Result<Ciudad, ServiceError>;
    /// Remove the row together with its links.
    async fn remove(&self, id: Uuid) -> Result<(), ServiceError>;
}

#[async_trait]
pub trait SupermercadoRepository: Send + Sync {
    async fn find_all(&self, with_relations: bool) -> Result<Vec<Supermercado>, ServiceError>;
    async fn find_by_id(&self, id: Uuid, with_relations: bool) -> Result<Option<Supermercado>, ServiceError>;
    /// Insert or update the row; the `ciudades` relation is ignored.
    async fn save(&self, supermercado: &Supermercado) -> Result<Supermercado, ServiceError>;
    /// Remove the row together with its links.
    async fn remove(&self, id: Uuid) -> Result<(), ServiceError>;
}
