//! HTTP adapter for the city / supermarket managers.

pub mod errors;
pub mod validation;
pub mod state;
pub mod routes;
pub mod openapi;
pub mod startup;

pub use startup::run;
