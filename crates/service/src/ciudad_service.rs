use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use models::ciudad::{validate_numero_habitantes, validate_pais};

use crate::domain::{Ciudad, CiudadInput, CiudadPatch};
use crate::errors::{Resource, ServiceError};
use crate::repository::CiudadRepository;

/// City manager: CRUD over cities with the country whitelist.
pub struct CiudadService<R: CiudadRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CiudadRepository + ?Sized> CiudadService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// All cities with their supermarkets.
    pub async fn find_all(&self) -> Result<Vec<Ciudad>, ServiceError> {
        self.repo.find_all(true).await
    }

    #[instrument(skip(self))]
    pub async fn find_one(&self, id: Uuid) -> Result<Ciudad, ServiceError> {
        self.repo
            .find_by_id(id, true)
            .await?
            .ok_or_else(|| ServiceError::not_found(Resource::Ciudad))
    }

    /// Validate the country and population, then insert with a fresh id.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::ciudad_service::CiudadService;
    /// use service::domain::CiudadInput;
    /// use service::repository::mock::MockRepository;
    ///
    /// let svc = CiudadService::new(Arc::new(MockRepository::new()));
    /// let input = CiudadInput { nombre: "Guayaquil".into(), pais: "Ecuador".into(), numero_habitantes: 2_700_000 };
    /// let ciudad = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(ciudad.pais, "Ecuador");
    ///
    /// let bogota = CiudadInput { nombre: "Bogotá".into(), pais: "Colombia".into(), numero_habitantes: 7_900_000 };
    /// assert!(tokio_test::block_on(svc.create(bogota)).is_err());
    /// ```
    #[instrument(skip(self, input), fields(nombre = %input.nombre, pais = %input.pais))]
    pub async fn create(&self, input: CiudadInput) -> Result<Ciudad, ServiceError> {
        if let Err(e) = validate_pais(&input.pais) {
            debug!("rejected country");
            return Err(e.into());
        }
        validate_numero_habitantes(input.numero_habitantes)?;
        let ciudad = Ciudad {
            id: Uuid::new_v4(),
            nombre: input.nombre,
            pais: input.pais,
            numero_habitantes: input.numero_habitantes,
            supermercados: None,
        };
        let created = self.repo.save(&ciudad).await?;
        info!(ciudad_id = %created.id, "ciudad_created");
        Ok(created)
    }

    /// Shallow-merge `patch` onto the stored city and save it.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: Uuid, patch: CiudadPatch) -> Result<Ciudad, ServiceError> {
        if let Some(pais) = &patch.pais {
            validate_pais(pais)?;
        }
        if let Some(h) = patch.numero_habitantes {
            validate_numero_habitantes(h)?;
        }
        let stored = self
            .repo
            .find_by_id(id, false)
            .await?
            .ok_or_else(|| ServiceError::not_found(Resource::Ciudad))?;
        let merged = patch.apply(stored);
        validate_pais(&merged.pais)?;
        let updated = self.repo.save(&merged).await?;
        info!(ciudad_id = %id, "ciudad_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if self.repo.find_by_id(id, false).await?.is_none() {
            return Err(ServiceError::not_found(Resource::Ciudad));
        }
        self.repo.remove(id).await?;
        info!(ciudad_id = %id, "ciudad_deleted");
        Ok(())
    }
}
