//! Vehicle Registry
//!
//! Servicio CRUD de vehículos indexados por VIN, expuesto por HTTP con Axum
//! y persistido en SQLite con SQLx.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
