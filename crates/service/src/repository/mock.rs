//! In-memory store for tests and doc examples.
//!
//! One `MockRepository` implements both ports over a single shared state, the
//! same way both SeaORM adapters share one database. Rows keep insertion order.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use super::{CiudadRepository, SupermercadoRepository};
use crate::domain::{Ciudad, Supermercado};
use crate::errors::ServiceError;

#[derive(Default)]
struct State {
    ciudades: Vec<Ciudad>,
    supermercados: Vec<Supermercado>,
    links: Vec<(Uuid, Uuid)>, // (ciudad_id, supermercado_id)
}

impl State {
    fn ciudad_row(&self, id: Uuid) -> Option<Ciudad> {
        self.ciudades.iter().find(|c| c.id == id).cloned()
    }

    fn supermercado_row(&self, id: Uuid) -> Option<Supermercado> {
        self.supermercados.iter().find(|s| s.id == id).cloned()
    }

    fn supermercados_of(&self, ciudad_id: Uuid) -> Vec<Supermercado> {
        self.links
            .iter()
            .filter(|(c, _)| *c == ciudad_id)
            .filter_map(|(_, s)| self.supermercado_row(*s))
            .collect()
    }

    fn ciudades_of(&self, supermercado_id: Uuid) -> Vec<Ciudad> {
        self.links
            .iter()
            .filter(|(_, s)| *s == supermercado_id)
            .filter_map(|(c, _)| self.ciudad_row(*c))
            .collect()
    }

    fn with_supermercados(&self, mut c: Ciudad, with_relations: bool) -> Ciudad {
        c.supermercados = with_relations.then(|| self.supermercados_of(c.id));
        c
    }

    fn with_ciudades(&self, mut s: Supermercado, with_relations: bool) -> Supermercado {
        s.ciudades = with_relations.then(|| self.ciudades_of(s.id));
        s
    }
}

#[derive(Default)]
pub struct MockRepository {
    state: Mutex<State>,
}

impl MockRepository {
    pub fn new() -> Self { Self::default() }

    fn lock(&self) -> MutexGuard<'_, State> {
        // a panicking test must not wedge the other tests sharing the store
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of stored links, for assertions.
    pub fn link_count(&self) -> usize { self.lock().links.len() }
}

#[async_trait]
impl CiudadRepository for MockRepository {
    async fn find_all(&self, with_relations: bool) -> Result<Vec<Ciudad>, ServiceError> {
        let state = self.lock();
        Ok(state.ciudades.iter().cloned().map(|c| state.with_supermercados(c, with_relations)).collect())
    }

    async fn find_by_id(&self, id: Uuid, with_relations: bool) -> Result<Option<Ciudad>, ServiceError> {
        let state = self.lock();
        Ok(state.ciudad_row(id).map(|c| state.with_supermercados(c, with_relations)))
    }

    async fn save(&self, ciudad: &Ciudad) -> Result<Ciudad, ServiceError> {
        let mut state = self.lock();
        if let Some(list) = &ciudad.supermercados {
            if let Some(missing) = list.iter().find(|s| state.supermercado_row(s.id).is_none()) {
                return Err(ServiceError::Db(format!("foreign key violation: supermercado {}", missing.id)));
            }
        }
        let row = Ciudad { supermercados: None, ..ciudad.clone() };
        match state.ciudades.iter().position(|c| c.id == ciudad.id) {
            Some(i) => state.ciudades[i] = row,
            None => state.ciudades.push(row),
        }
        if let Some(list) = &ciudad.supermercados {
            state.links.retain(|(c, _)| *c != ciudad.id);
            for s in list {
                if !state.links.contains(&(ciudad.id, s.id)) {
                    state.links.push((ciudad.id, s.id));
                }
            }
        }
        let saved = state.ciudad_row(ciudad.id).ok_or_else(|| ServiceError::Db("saved row vanished".into()))?;
        Ok(state.with_supermercados(saved, ciudad.supermercados.is_some()))
    }

    async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        let mut state = self.lock();
        state.ciudades.retain(|c| c.id != id);
        state.links.retain(|(c, _)| *c != id);
        Ok(())
    }
}

#[async_trait]
impl SupermercadoRepository for MockRepository {
    async fn find_all(&self, with_relations: bool) -> Result<Vec<Supermercado>, ServiceError> {
        let state = self.lock();
        Ok(state.supermercados.iter().cloned().map(|s| state.with_ciudades(s, with_relations)).collect())
    }

    async fn find_by_id(&self, id: Uuid, with_relations: bool) -> Result<Option<Supermercado>, ServiceError> {
        let state = self.lock();
        Ok(state.supermercado_row(id).map(|s| state.with_ciudades(s, with_relations)))
    }

    async fn save(&self, supermercado: &Supermercado) -> Result<Supermercado, ServiceError> {
        let mut state = self.lock();
        let row = Supermercado { ciudades: None, ..supermercado.clone() };
        match state.supermercados.iter().position(|s| s.id == supermercado.id) {
            Some(i) => state.supermercados[i] = row.clone(),
            None => state.supermercados.push(row.clone()),
        }
        Ok(row)
    }

    async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        let mut state = self.lock();
        state.supermercados.retain(|s| s.id != id);
        state.links.retain(|(_, s)| *s != id);
        Ok(())
    }
}
