//! SeaORM entities for cities, supermarkets and their link table, plus the
//! entity-level validation rules and connection helpers.

pub mod errors;
pub mod db;
pub mod ciudad;
pub mod supermercado;
pub mod ciudad_supermercado;

#[cfg(test)]
mod tests;
