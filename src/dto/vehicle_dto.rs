use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::Vehicle;
use crate::utils::validation::validate_not_empty;

// Request para crear un vehículo
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[serde(alias = "id")]
    #[validate(length(max = 64), custom = "validate_not_empty")]
    pub vin: String,

    #[validate(custom = "validate_not_empty")]
    pub manufacturer_name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub horse_power: i32,

    #[validate(custom = "validate_not_empty")]
    pub model_name: String,

    pub model_year: i32,

    pub purchase_price: f64,

    #[validate(custom = "validate_not_empty")]
    pub fuel_type: String,
}

// Request para actualizar un vehículo: reemplazo completo, el VIN no se toca
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(custom = "validate_not_empty")]
    pub manufacturer_name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub horse_power: i32,

    #[validate(custom = "validate_not_empty")]
    pub model_name: String,

    pub model_year: i32,

    pub purchase_price: f64,

    #[validate(custom = "validate_not_empty")]
    pub fuel_type: String,
}

// Response de vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleResponse {
    pub vin: String,
    pub manufacturer_name: String,
    pub description: Option<String>,
    pub horse_power: i32,
    pub model_name: String,
    pub model_year: i32,
    pub purchase_price: f64,
    pub fuel_type: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            vin: vehicle.vin,
            manufacturer_name: vehicle.manufacturer_name,
            description: vehicle.description,
            horse_power: vehicle.horse_power,
            model_name: vehicle.model_name,
            model_year: vehicle.model_year,
            purchase_price: vehicle.purchase_price,
            fuel_type: vehicle.fuel_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_payload() -> serde_json::Value {
        json!({
            "vin": "abc123",
            "manufacturer_name": "Toyota",
            "description": "Sedan",
            "horse_power": 130,
            "model_name": "Corolla",
            "model_year": 2020,
            "purchase_price": 20000.0,
            "fuel_type": "Petrol"
        })
    }

    #[test]
    fn test_create_request_accepts_id_alias() {
        let mut payload = create_payload();
        let vin = payload.as_object_mut().unwrap().remove("vin").unwrap();
        payload["id"] = vin;

        let request: CreateVehicleRequest = serde_json::from_value(payload).unwrap();
        assert_eq!(request.vin, "abc123");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_blank_vin() {
        let mut payload = create_payload();
        payload["vin"] = json!("   ");

        let request: CreateVehicleRequest = serde_json::from_value(payload).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("vin"));
    }

    #[test]
    fn test_create_request_rejects_long_vin() {
        let mut payload = create_payload();
        payload["vin"] = json!("X".repeat(65));

        let request: CreateVehicleRequest = serde_json::from_value(payload).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_description_is_optional() {
        let mut payload = create_payload();
        payload.as_object_mut().unwrap().remove("description");

        let request: CreateVehicleRequest = serde_json::from_value(payload).unwrap();
        assert_eq!(request.description, None);
    }

    #[test]
    fn test_update_request_ignores_vin() {
        let request: UpdateVehicleRequest = serde_json::from_value(create_payload()).unwrap();
        assert_eq!(request.manufacturer_name, "Toyota");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_wrong_type_fails_to_deserialize() {
        let mut payload = create_payload();
        payload["horse_power"] = json!("a lot");
        assert!(serde_json::from_value::<CreateVehicleRequest>(payload).is_err());
    }
}
