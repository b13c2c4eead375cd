//! Shared helpers used by the server binary and HTTP adapter.

pub mod types;
pub mod utils;
