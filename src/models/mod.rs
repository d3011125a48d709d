//! Modelos de datos
//!
//! Structs que mapean directamente a las tablas de la base de datos.

pub mod vehicle;

pub use vehicle::Vehicle;
