use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use models::supermercado::validate_nombre;

use crate::domain::{Supermercado, SupermercadoInput, SupermercadoPatch};
use crate::errors::{Resource, ServiceError};
use crate::repository::SupermercadoRepository;

/// Supermarket manager: CRUD over supermarkets with the name-length rule.
pub struct SupermercadoService<R: SupermercadoRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: SupermercadoRepository + ?Sized> SupermercadoService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// All supermarkets with the cities they are linked to.
    pub async fn find_all(&self) -> Result<Vec<Supermercado>, ServiceError> {
        self.repo.find_all(true).await
    }

    #[instrument(skip(self))]
    pub async fn find_one(&self, id: Uuid) -> Result<Supermercado, ServiceError> {
        self.repo
            .find_by_id(id, true)
            .await?
            .ok_or_else(|| ServiceError::not_found(Resource::Supermercado))
    }

    #[instrument(skip(self, input), fields(nombre = %input.nombre))]
    pub async fn create(&self, input: SupermercadoInput) -> Result<Supermercado, ServiceError> {
        if let Err(e) = validate_nombre(&input.nombre) {
            debug!("rejected name");
            return Err(e.into());
        }
        let supermercado = Supermercado {
            id: Uuid::new_v4(),
            nombre: input.nombre,
            longitud: input.longitud,
            latitud: input.latitud,
            pagina_web: input.pagina_web,
            ciudades: None,
        };
        let created = self.repo.save(&supermercado).await?;
        info!(supermercado_id = %created.id, "supermercado_created");
        Ok(created)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: Uuid, patch: SupermercadoPatch) -> Result<Supermercado, ServiceError> {
        if let Some(nombre) = &patch.nombre {
            validate_nombre(nombre)?;
        }
        let stored = self
            .repo
            .find_by_id(id, false)
            .await?
            .ok_or_else(|| ServiceError::not_found(Resource::Supermercado))?;
        let merged = patch.apply(stored);
        validate_nombre(&merged.nombre)?;
        let updated = self.repo.save(&merged).await?;
        info!(supermercado_id = %id, "supermercado_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if self.repo.find_by_id(id, false).await?.is_none() {
            return Err(ServiceError::not_found(Resource::Supermercado));
        }
        self.repo.remove(id).await?;
        info!(supermercado_id = %id, "supermercado_deleted");
        Ok(())
    }
}
