//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle que mapea a la tabla `vehicles`.
//! La primary key es el VIN, siempre almacenado normalizado (trim + mayúsculas).

use serde::Serialize;
use sqlx::FromRow;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Vehicle {
    pub vin: String,
    pub manufacturer_name: String,
    pub description: Option<String>,
    pub horse_power: i32,
    pub model_name: String,
    pub model_year: i32,
    pub purchase_price: f64,
    pub fuel_type: String,
}
