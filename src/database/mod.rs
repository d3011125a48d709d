//! Módulo de base de datos
//!
//! Maneja el pool de conexiones, las migraciones y la conexión por request.

pub mod connection;

pub use connection::{create_pool, run_migrations, DbConnection};
