//! Service layer: business rules for cities, supermarkets and their links.
//! - Managers depend only on the storage ports in [`repository`].
//! - Entity-level validation is reused from the `models` crate.
//! - Every failure is a [`errors::ServiceError`] carrying the message shown to API clients.

pub mod errors;
pub mod domain;
pub mod repository;
pub mod ciudad_service;
pub mod supermercado_service;
pub mod ciudad_supermercado_service;
#[cfg(test)]
pub mod test_support;

pub use ciudad_service::CiudadService;
pub use ciudad_supermercado_service::CiudadSupermercadoService;
pub use supermercado_service::SupermercadoService;
