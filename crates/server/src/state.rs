use std::sync::Arc;

use sea_orm::DatabaseConnection;

use service::repository::mock::MockRepository;
use service::repository::seaorm::{SeaOrmCiudadRepository, SeaOrmSupermercadoRepository};
use service::repository::{CiudadRepository, SupermercadoRepository};
use service::{CiudadService, CiudadSupermercadoService, SupermercadoService};

/// Managers shared by every handler.
#[derive(Clone)]
pub struct ServerState {
    pub ciudades: Arc<CiudadService<dyn CiudadRepository>>,
    pub supermercados: Arc<SupermercadoService<dyn SupermercadoRepository>>,
    pub asociaciones: Arc<CiudadSupermercadoService<dyn CiudadRepository, dyn SupermercadoRepository>>,
}

impl ServerState {
    pub fn new(ciudades: Arc<dyn CiudadRepository>, supermercados: Arc<dyn SupermercadoRepository>) -> Self {
        Self {
            ciudades: Arc::new(CiudadService::new(Arc::clone(&ciudades))),
            supermercados: Arc::new(SupermercadoService::new(Arc::clone(&supermercados))),
            asociaciones: Arc::new(CiudadSupermercadoService::new(ciudades, supermercados)),
        }
    }

    pub fn with_database(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmCiudadRepository { db: db.clone() }),
            Arc::new(SeaOrmSupermercadoRepository { db }),
        )
    }

    /// Backed by a fresh in-memory store; nothing survives the process.
    pub fn in_memory() -> Self {
        let repo = Arc::new(MockRepository::new());
        Self::new(repo.clone(), repo)
    }
}
