use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

use models::{ciudad, ciudad_supermercado, supermercado};

use super::{CiudadRepository, SupermercadoRepository};
use crate::domain::{Ciudad, Supermercado};
use crate::errors::ServiceError;

fn ciudad_from(m: ciudad::Model, supermercados: Option<Vec<supermercado::Model>>) -> Ciudad {
    Ciudad {
        id: m.id,
        nombre: m.nombre,
        pais: m.pais,
        numero_habitantes: m.numero_habitantes,
        supermercados: supermercados.map(|list| list.into_iter().map(|s| supermercado_from(s, None)).collect()),
    }
}

fn supermercado_from(m: supermercado::Model, ciudades: Option<Vec<ciudad::Model>>) -> Supermercado {
    Supermercado {
        id: m.id,
        nombre: m.nombre,
        longitud: m.longitud,
        latitud: m.latitud,
        pagina_web: m.pagina_web,
        ciudades: ciudades.map(|list| list.into_iter().map(|c| ciudad_from(c, None)).collect()),
    }
}

/// SeaORM-backed city repository.
pub struct SeaOrmCiudadRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CiudadRepository for SeaOrmCiudadRepository {
    async fn find_all(&self, with_relations: bool) -> Result<Vec<Ciudad>, ServiceError> {
        if !with_relations {
            let rows = ciudad::Entity::find().all(&self.db).await?;
            return Ok(rows.into_iter().map(|c| ciudad_from(c, None)).collect());
        }
        let rows = ciudad::Entity::find()
            .find_with_related(supermercado::Entity)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|(c, s)| ciudad_from(c, Some(s))).collect())
    }

    async fn find_by_id(&self, id: Uuid, with_relations: bool) -> Result<Option<Ciudad>, ServiceError> {
        let Some(found) = ciudad::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let related = if with_relations {
            Some(found.find_related(supermercado::Entity).all(&self.db).await?)
        } else {
            None
        };
        Ok(Some(ciudad_from(found, related)))
    }

    async fn save(&self, c: &Ciudad) -> Result<Ciudad, ServiceError> {
        let txn = self.db.begin().await?;

        let exists = ciudad::Entity::find_by_id(c.id).one(&txn).await?.is_some();
        let am = ciudad::ActiveModel {
            id: Set(c.id),
            nombre: Set(c.nombre.clone()),
            pais: Set(c.pais.clone()),
            numero_habitantes: Set(c.numero_habitantes),
        };
        if exists {
            am.update(&txn).await?;
        } else {
            am.insert(&txn).await?;
        }

        if let Some(list) = &c.supermercados {
            ciudad_supermercado::Entity::delete_many()
                .filter(ciudad_supermercado::Column::CiudadId.eq(c.id))
                .exec(&txn)
                .await?;
            let mut seen: Vec<Uuid> = Vec::with_capacity(list.len());
            for s in list {
                if seen.contains(&s.id) {
                    continue;
                }
                seen.push(s.id);
            }
            if !seen.is_empty() {
                let links = seen.iter().map(|sid| ciudad_supermercado::ActiveModel {
                    ciudad_id: Set(c.id),
                    supermercado_id: Set(*sid),
                });
                ciudad_supermercado::Entity::insert_many(links).exec_without_returning(&txn).await?;
            }
        }

        txn.commit().await?;

        self.find_by_id(c.id, c.supermercados.is_some())
            .await?
            .ok_or_else(|| ServiceError::Db("saved row vanished".into()))
    }

    async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        // join rows go with it (ON DELETE CASCADE)
        ciudad::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

/// SeaORM-backed supermarket repository.
pub struct SeaOrmSupermercadoRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl SupermercadoRepository for SeaOrmSupermercadoRepository {
    async fn find_all(&self, with_relations: bool) -> Result<Vec<Supermercado>, ServiceError> {
        if !with_relations {
            let rows = supermercado::Entity::find().all(&self.db).await?;
            return Ok(rows.into_iter().map(|s| supermercado_from(s, None)).collect());
        }
        let rows = supermercado::Entity::find()
            .find_with_related(ciudad::Entity)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|(s, c)| supermercado_from(s, Some(c))).collect())
    }

    async fn find_by_id(&self, id: Uuid, with_relations: bool) -> Result<Option<Supermercado>, ServiceError> {
        let Some(found) = supermercado::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let related = if with_relations {
            Some(found.find_related(ciudad::Entity).all(&self.db).await?)
        } else {
            None
        };
        Ok(Some(supermercado_from(found, related)))
    }

    async fn save(&self, s: &Supermercado) -> Result<Supermercado, ServiceError> {
        let exists = supermercado::Entity::find_by_id(s.id).one(&self.db).await?.is_some();
        let am = supermercado::ActiveModel {
            id: Set(s.id),
            nombre: Set(s.nombre.clone()),
            longitud: Set(s.longitud),
            latitud: Set(s.latitud),
            pagina_web: Set(s.pagina_web.clone()),
        };
        let saved = if exists { am.update(&self.db).await? } else { am.insert(&self.db).await? };
        Ok(supermercado_from(saved, None))
    }

    async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        supermercado::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn nuevo_supermercado(nombre: &str) -> Supermercado {
        Supermercado {
            id: Uuid::new_v4(),
            nombre: format!("{nombre} {}", Uuid::new_v4()),
            longitud: -57.6,
            latitud: -25.3,
            pagina_web: "https://www.superseis.com.py".into(),
            ciudades: None,
        }
    }

    #[tokio::test]
    async fn ciudad_save_replaces_link_set() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()); };
        let ciudades = SeaOrmCiudadRepository { db: db.clone() };
        let supermercados = SeaOrmSupermercadoRepository { db };

        let s1 = supermercados.save(&nuevo_supermercado("Superseis Villa Morra")).await?;
        let s2 = supermercados.save(&nuevo_supermercado("Stock Mariscal López")).await?;

        let c = Ciudad {
            id: Uuid::new_v4(),
            nombre: "Asunción".into(),
            pais: "Paraguay".into(),
            numero_habitantes: 520_000,
            supermercados: Some(vec![s1.clone(), s2.clone()]),
        };
        let saved = ciudades.save(&c).await?;
        assert_eq!(saved.supermercados.as_ref().map(Vec::len), Some(2));

        let replaced = ciudades.save(&Ciudad { supermercados: Some(vec![s2.clone()]), ..saved }).await?;
        let ids: Vec<Uuid> = replaced.supermercados.unwrap_or_default().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![s2.id]);

        let back = supermercados.find_by_id(s2.id, true).await?.unwrap();
        assert_eq!(back.ciudades.map(|c| c.len()), Some(1));

        ciudades.remove(c.id).await?;
        supermercados.remove(s1.id).await?;
        supermercados.remove(s2.id).await?;
        assert!(ciudades.find_by_id(c.id, false).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn supermercado_update_keeps_id() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()); };
        let repo = SeaOrmSupermercadoRepository { db };

        let s = repo.save(&nuevo_supermercado("Hiper Libertad Córdoba")).await?;
        let updated = repo.save(&Supermercado { longitud: -64.2, ..s.clone() }).await?;
        assert_eq!(updated.id, s.id);
        assert_eq!(updated.longitud, -64.2);

        repo.remove(s.id).await?;
        Ok(())
    }
}
