//! Association manager: links between cities and supermarkets.
//!
//! Every precondition (both records exist, the pair is or is not linked) is
//! checked before the single write through [`CiudadRepository::save`].

use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::{Ciudad, Supermercado};
use crate::errors::{parse_id, Resource, ServiceError};
use crate::repository::{CiudadRepository, SupermercadoRepository};

pub struct CiudadSupermercadoService<C, S>
where
    C: CiudadRepository + ?Sized,
    S: SupermercadoRepository + ?Sized,
{
    ciudades: Arc<C>,
    supermercados: Arc<S>,
}

impl<C, S> CiudadSupermercadoService<C, S>
where
    C: CiudadRepository + ?Sized,
    S: SupermercadoRepository + ?Sized,
{
    pub fn new(ciudades: Arc<C>, supermercados: Arc<S>) -> Self {
        Self { ciudades, supermercados }
    }

    async fn supermercado(&self, id: Uuid) -> Result<Supermercado, ServiceError> {
        self.supermercados
            .find_by_id(id, false)
            .await?
            .ok_or_else(|| ServiceError::not_found(Resource::Supermercado))
    }

    async fn ciudad_con_supermercados(&self, id: Uuid) -> Result<Ciudad, ServiceError> {
        self.ciudades
            .find_by_id(id, true)
            .await?
            .ok_or_else(|| ServiceError::not_found(Resource::Ciudad))
    }

    /// Link a supermarket to a city. Linking an already linked pair returns
    /// the city unchanged.
    #[instrument(skip(self))]
    pub async fn add_supermarket_to_city(&self, ciudad_id: Uuid, supermercado_id: Uuid) -> Result<Ciudad, ServiceError> {
        let supermercado = self.supermercado(supermercado_id).await?;
        let mut ciudad = self.ciudad_con_supermercados(ciudad_id).await?;
        if ciudad.has_supermercado(supermercado_id) {
            debug!("already linked");
            return Ok(ciudad);
        }
        ciudad.supermercados.get_or_insert_with(Vec::new).push(supermercado);
        let saved = self.ciudades.save(&ciudad).await?;
        info!(ciudad_id = %ciudad_id, supermercado_id = %supermercado_id, "supermercado_linked");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn find_supermarket_from_city(&self, ciudad_id: Uuid, supermercado_id: Uuid) -> Result<Supermercado, ServiceError> {
        let ciudad = self.ciudad_con_supermercados(ciudad_id).await?;
        // existence first, so a missing supermarket is NOT_FOUND rather than not associated
        self.supermercado(supermercado_id).await?;
        ciudad
            .supermercados
            .unwrap_or_default()
            .into_iter()
            .find(|s| s.id == supermercado_id)
            .ok_or_else(ServiceError::not_associated)
    }

    #[instrument(skip(self))]
    pub async fn find_supermarkets_from_city(&self, ciudad_id: Uuid) -> Result<Vec<Supermercado>, ServiceError> {
        let ciudad = self.ciudad_con_supermercados(ciudad_id).await?;
        Ok(ciudad.supermercados.unwrap_or_default())
    }

    /// Replace the city's whole supermarket list. Ids arrive as given by the
    /// client and are resolved only after the city is found; every one must
    /// name a stored supermarket, and repeated ids collapse into one link.
    #[instrument(skip(self, supermercado_ids), fields(count = supermercado_ids.len()))]
    pub async fn update_supermarkets_from_city<Id>(
        &self,
        ciudad_id: Uuid,
        supermercado_ids: &[Id],
    ) -> Result<Ciudad, ServiceError>
    where
        Id: AsRef<str> + Sync,
    {
        let mut ciudad = self.ciudad_con_supermercados(ciudad_id).await?;
        let mut nuevos: Vec<Supermercado> = Vec::with_capacity(supermercado_ids.len());
        for raw in supermercado_ids {
            let id = parse_id(raw.as_ref(), Resource::Supermercado)?;
            if nuevos.iter().any(|s| s.id == id) {
                continue;
            }
            nuevos.push(self.supermercado(id).await?);
        }
        ciudad.supermercados = Some(nuevos);
        let saved = self.ciudades.save(&ciudad).await?;
        info!(ciudad_id = %ciudad_id, links = saved.supermercados.as_ref().map_or(0, Vec::len), "supermercados_replaced");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn delete_supermarket_from_city(&self, ciudad_id: Uuid, supermercado_id: Uuid) -> Result<(), ServiceError> {
        self.supermercado(supermercado_id).await?;
        let mut ciudad = self.ciudad_con_supermercados(ciudad_id).await?;
        if !ciudad.has_supermercado(supermercado_id) {
            return Err(ServiceError::not_associated());
        }
        if let Some(list) = ciudad.supermercados.as_mut() {
            list.retain(|s| s.id != supermercado_id);
        }
        self.ciudades.save(&ciudad).await?;
        info!(ciudad_id = %ciudad_id, supermercado_id = %supermercado_id, "supermercado_unlinked");
        Ok(())
    }
}
